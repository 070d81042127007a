// src/main.rs

use std::io::{self, Write};
use std::path::Path;
use std::process;

use gridops::{parse_matrix_deck, GridError, MatrixDeck, SquareGrid};

fn main() {
    env_logger::init();

    let filename = match prompt_for_filename() {
        Ok(filename) => filename,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    let deck = match parse_matrix_deck(Path::new(&filename)) {
        Ok(deck) => deck,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    if let Err(err) = run_demonstration(&deck) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

/// Prompts on stdout and reads the input filename from stdin.
fn prompt_for_filename() -> io::Result<String> {
    print!("Enter the filename containing matrix data: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Runs the full demonstration sequence over the two loaded matrices.
///
/// The loaded grids are never mutated; the swap and update steps operate on
/// clones. A failed swap or update prints its error and the sequence
/// continues with the next step.
fn run_demonstration(deck: &MatrixDeck) -> Result<(), GridError> {
    display("Matrix 1", &deck.first);
    display("Matrix 2", &deck.second);

    println!("=== Matrix Addition ===");
    let sum = deck.first.add(&deck.second)?;
    display("Sum", &sum);

    println!("=== Matrix Multiplication ===");
    let product = deck.first.multiply(&deck.second)?;
    display("Product", &product);

    println!("=== Diagonal Sums ===");
    println!(
        "Main diagonal sum of Matrix 1: {}",
        deck.first.main_diagonal_sum()
    );
    println!(
        "Secondary diagonal sum of Matrix 1: {}",
        deck.first.secondary_diagonal_sum()
    );
    println!(
        "Main diagonal sum of Matrix 2: {}",
        deck.second.main_diagonal_sum()
    );
    println!(
        "Secondary diagonal sum of Matrix 2: {}",
        deck.second.secondary_diagonal_sum()
    );
    println!();

    println!("=== Row Swapping ===");
    let mut row_swapped = deck.first.clone();
    match row_swapped.swap_rows(0, 1) {
        Ok(()) => display("Matrix 1 after swapping rows 0 and 1", &row_swapped),
        Err(err) => eprintln!("Error: {}", err),
    }

    println!("=== Column Swapping ===");
    let mut column_swapped = deck.second.clone();
    match column_swapped.swap_columns(0, 1) {
        Ok(()) => display("Matrix 2 after swapping columns 0 and 1", &column_swapped),
        Err(err) => eprintln!("Error: {}", err),
    }

    println!("=== Element Update ===");
    let mut updated = deck.first.clone();
    match updated.update_element(0, 0, 99) {
        Ok(()) => display("Matrix 1 after updating element (0,0) to 99", &updated),
        Err(err) => eprintln!("Error: {}", err),
    }

    Ok(())
}

/// Prints a labeled grid followed by a blank line.
fn display(label: &str, grid: &SquareGrid) {
    println!("{}:", label);
    print!("{}", grid);
    println!();
}

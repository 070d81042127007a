// src/input/parser.rs

use std::fs;
use std::path::Path;

use crate::error::GridError;
use crate::grid::SquareGrid;
use crate::input::MatrixDeck;

/// Parses a matrix deck from a text file.
///
/// # Arguments
///
/// * `path` - Path to the input file.
///
/// # Returns
///
/// * `Ok(MatrixDeck)` if parsing is successful.
/// * `Err(GridError::Io)` naming the path when the file cannot be opened or
///   read, or any error of [`parse_matrix_deck_str`].
pub fn parse_matrix_deck(path: &Path) -> Result<MatrixDeck, GridError> {
    let contents = fs::read_to_string(path).map_err(|source| GridError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let deck = parse_matrix_deck_str(&contents)?;
    log::debug!("loaded two {0}x{0} matrices from {1}", deck.size, path.display());
    Ok(deck)
}

/// Parses a matrix deck from whitespace-delimited text.
///
/// The input is a flat token stream, not line-structured: one leading size
/// token N followed by 2·N·N integers, the two N×N matrices in row-major
/// order. Both matrices are consumed sequentially from the same cursor.
/// Tokens left over after the second matrix are ignored with a warning.
///
/// # Returns
///
/// * `Ok(MatrixDeck)` holding both grids.
/// * `Err(GridError::ParseToken)` on a token that is not a valid integer.
/// * `Err(GridError::UnexpectedEof)` when the input runs out of tokens
///   before both matrices are complete.
pub fn parse_matrix_deck_str(contents: &str) -> Result<MatrixDeck, GridError> {
    let mut tokens = contents.split_whitespace();

    let size_token = tokens.next().ok_or(GridError::UnexpectedEof {
        expected: 1,
        found: 0,
    })?;
    let size: usize = size_token.parse().map_err(|_| GridError::ParseToken {
        token: size_token.to_string(),
    })?;
    let needed = size
        .checked_mul(size)
        .and_then(|cells| cells.checked_mul(2))
        .ok_or_else(|| GridError::ParseToken {
            token: size_token.to_string(),
        })?;

    let mut values = Vec::new();
    for token in tokens.by_ref().take(needed) {
        let value: i64 = token.parse().map_err(|_| GridError::ParseToken {
            token: token.to_string(),
        })?;
        values.push(value);
    }
    if values.len() < needed {
        return Err(GridError::UnexpectedEof {
            expected: needed,
            found: values.len(),
        });
    }

    let trailing = tokens.count();
    if trailing > 0 {
        log::warn!("ignoring {} trailing tokens after the second matrix", trailing);
    }

    let cells = size * size;
    let first = SquareGrid::from_row_major(size, &values[..cells])?;
    let second = SquareGrid::from_row_major(size, &values[cells..])?;
    Ok(MatrixDeck { size, first, second })
}

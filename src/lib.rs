// src/lib.rs

//! Square-matrix demonstration: load two N×N integer matrices from a
//! whitespace-delimited text file and run elementwise addition, standard
//! multiplication, diagonal sums, and row/column/element edits over them.

pub mod error;
pub mod grid;
pub mod input;

// Re-export the main entry points for easier access
pub use error::GridError;
pub use grid::SquareGrid;
pub use input::{parse_matrix_deck, MatrixDeck};

// src/input/deck.rs

use crate::grid::SquareGrid;

/// Parsed contents of one matrix input file.
///
/// The file declares a single side length shared by both matrices, then the
/// two matrices as row-major integer tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixDeck {
    pub size: usize,       // Side length N shared by both grids
    pub first: SquareGrid, // First N×N matrix
    pub second: SquareGrid, // Second N×N matrix
}

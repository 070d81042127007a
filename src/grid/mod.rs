// src/grid/mod.rs

pub mod square_grid;

// Re-export the container for easier access
pub use square_grid::SquareGrid;

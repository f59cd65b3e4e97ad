//! Error types for shape parsing, problem construction, and moves.

use thiserror::Error;

/// A block shape definition that cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("shape '{0}' has rows of unequal length")]
    NotRectangular(char),
    #[error("shape '{0}' contains unexpected character '{1}'")]
    UnknownCell(char, char),
    #[error("shape '{0}' has no rows")]
    Empty(char),
}

/// A problem definition that cannot be constructed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("inventory references block '{0}' not present in the library")]
    UnknownBlock(char),
}

/// A placement or removal rejected by the current state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The placement is not legal: the block is out of stock, or a filled
    /// cell of its shape lands on an occupied or border cell.
    #[error("illegal placement of block '{block}' at ({row}, {col})")]
    Illegal { block: char, row: usize, col: usize },
    /// No placement with exactly these coordinates exists in the state.
    #[error("no placement of block '{block}' at ({row}, {col}) to remove")]
    NotFound { block: char, row: usize, col: usize },
}

/// Returned by neighbor selection when the state has no neighbors at all.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("state has no neighbors")]
pub struct EmptyNeighborhood;

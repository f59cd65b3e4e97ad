//! Grid Tiling Local-Search Core
//!
//! Provides the state representation, move legality, scoring, and
//! neighbor-generation primitives for a polyomino tiling puzzle: blocks
//! from a finite inventory are placed on a square grid, and the fitness
//! score is the number of cells left uncovered (lower is better).
//!
//! The crate deliberately stops at single-step primitives. A search loop
//! (hill climbing, random walk, annealing) is the caller's concern: build
//! a [`Problem`], take its [`Problem::initial_state`], and repeatedly swap
//! in whichever neighbor the problem hands back.

pub mod blocks;
pub mod error;
pub mod grid;
pub mod problem;
pub mod state;

pub use blocks::{BlockLibrary, BlockShape};
pub use error::{BuildError, EmptyNeighborhood, MoveError, ShapeError};
pub use grid::{Cell, Grid};
pub use problem::Problem;
pub use state::{Placement, State};

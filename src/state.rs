//! Grid state: a snapshot of a partially tiled grid.
//!
//! A `State` owns its grid, its remaining-block inventory, and the list of
//! placements made so far. Deriving a new state means cloning and applying
//! exactly one placement or removal; parent and child never share mutable
//! buffers. The shape library is the one shared piece, held read-only
//! behind an `Arc`.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::blocks::BlockLibrary;
use crate::error::MoveError;
use crate::grid::{Cell, Grid};

/// One placed block: its name and anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Placement {
    pub block: char,
    pub row: usize,
    pub col: usize,
}

/// A snapshot of the grid, the remaining inventory, and the placements.
#[derive(Debug, Clone)]
pub struct State {
    size: usize,
    grid: Grid,
    inventory: FxHashMap<char, u32>,
    placements: Vec<Placement>,
    library: Arc<BlockLibrary>,
}

impl State {
    /// A blank state: empty grid, full inventory, no placements.
    pub(crate) fn blank(
        size: usize,
        inventory: FxHashMap<char, u32>,
        library: Arc<BlockLibrary>,
        pad: usize,
    ) -> Self {
        Self {
            size,
            grid: Grid::new(size, pad),
            inventory,
            placements: Vec::new(),
            library,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Remaining count for a block, zero if the block is unknown.
    pub fn remaining(&self, block: char) -> u32 {
        self.inventory.get(&block).copied().unwrap_or(0)
    }

    /// Whether placing `block` at `(row, col)` is allowed: stock remains
    /// and every filled cell of the shape lands on an empty cell. Border
    /// cells fail the check, which is how out-of-bounds anchors are
    /// rejected.
    pub fn legal(&self, block: char, row: usize, col: usize) -> bool {
        if self.remaining(block) == 0 {
            return false;
        }
        let Some(shape) = self.library.shape(block) else {
            return false;
        };
        shape.filled_cells().iter().all(|&(dy, dx)| {
            match (row.checked_add(dy), col.checked_add(dx)) {
                (Some(r), Some(c)) => self.grid.get(r, c) == Cell::Empty,
                _ => false,
            }
        })
    }

    /// Places a block, consuming one unit of inventory and stamping its
    /// shape onto the grid.
    pub fn place(&mut self, block: char, row: usize, col: usize) -> Result<(), MoveError> {
        if !self.legal(block, row, col) {
            return Err(MoveError::Illegal { block, row, col });
        }
        // legal() guarantees the shape exists and the count is nonzero
        if let Some(count) = self.inventory.get_mut(&block) {
            *count -= 1;
        }
        self.placements.push(Placement { block, row, col });
        self.stamp(block, row, col, Cell::Filled);
        Ok(())
    }

    /// Removes a previously placed block, restoring its cells and inventory.
    /// Only one occurrence is removed if duplicates exist.
    pub fn remove(&mut self, block: char, row: usize, col: usize) -> Result<(), MoveError> {
        let target = Placement { block, row, col };
        let Some(index) = self.placements.iter().position(|&p| p == target) else {
            return Err(MoveError::NotFound { block, row, col });
        };
        self.placements.remove(index);
        if let Some(count) = self.inventory.get_mut(&block) {
            *count += 1;
        }
        self.stamp(block, row, col, Cell::Empty);
        Ok(())
    }

    fn stamp(&mut self, block: char, row: usize, col: usize, cell: Cell) {
        if let Some(shape) = self.library.shape(block) {
            for &(dy, dx) in shape.filled_cells() {
                self.grid.set(row + dy, col + dx, cell);
            }
        }
    }

    /// Fitness score: the number of uncovered cells, `N^2` minus the cells
    /// covered by every placement. Lower is better.
    pub fn score(&self) -> usize {
        let covered: usize = self
            .placements
            .iter()
            .filter_map(|p| self.library.shape(p.block))
            .map(|shape| shape.cell_count())
            .sum();
        self.size * self.size - covered
    }

    /// Strictly better (lower) score than `other`.
    pub fn is_better_than(&self, other: &State) -> bool {
        self.score() < other.score()
    }

    /// Same score as `other`.
    pub fn has_equal_score(&self, other: &State) -> bool {
        self.score() == other.score()
    }

    fn sorted_placements(&self) -> Vec<Placement> {
        let mut placements = self.placements.clone();
        placements.sort_unstable();
        placements
    }
}

/// Two states are equal when they have placed the same blocks in the same
/// cells (regardless of order) and have the same inventory left. The grid
/// is derived from the placements and does not participate.
impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.inventory == other.inventory
            && self.sorted_placements() == other.sorted_placements()
    }
}

impl Eq for State {}

/// Diagnostic rendering: the grid without its padding, the placement list,
/// the score, and the remaining inventory. Not a stable format.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let glyph = match self.grid.get(row, col) {
                    Cell::Empty => '.',
                    Cell::Filled => '*',
                    Cell::Border => '#',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        write!(f, "Placed:")?;
        for p in &self.placements {
            write!(f, " {}@({},{})", p.block, p.row, p.col)?;
        }
        writeln!(f)?;
        writeln!(f, "Score: {}", self.score())?;
        write!(f, "Remaining:")?;
        let mut names: Vec<char> = self.inventory.keys().copied().collect();
        names.sort_unstable();
        for name in names {
            write!(f, " {}:{}", name, self.inventory[&name])?;
        }
        Ok(())
    }
}

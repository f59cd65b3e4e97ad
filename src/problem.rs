//! Problem definition and neighbor generation.
//!
//! A `Problem` holds the fixed parameters of one tiling instance: grid
//! size, starting inventory, and the shape library. It derives new states
//! from existing ones but never holds search state itself; the search loop
//! belongs to the caller. All sampling goes through an injected `Rng` so a
//! fixed seed reproduces a run exactly.

use std::sync::Arc;

use rand::Rng;
use rustc_hash::FxHashMap;

use crate::blocks::BlockLibrary;
use crate::error::{BuildError, EmptyNeighborhood};
use crate::state::State;

/// Fixed parameters of a tiling instance.
#[derive(Debug, Clone)]
pub struct Problem {
    size: usize,
    inventory: FxHashMap<char, u32>,
    library: Arc<BlockLibrary>,
    /// Inventory keys in sorted order, for deterministic enumeration.
    block_order: Vec<char>,
    /// Border padding sized to the largest shape in the library.
    pad: usize,
}

impl Problem {
    /// Builds a problem, validating that every inventory entry names a
    /// shape in the library.
    pub fn new(
        size: usize,
        inventory: FxHashMap<char, u32>,
        library: BlockLibrary,
    ) -> Result<Self, BuildError> {
        for &block in inventory.keys() {
            if !library.contains(block) {
                return Err(BuildError::UnknownBlock(block));
            }
        }
        let mut block_order: Vec<char> = inventory.keys().copied().collect();
        block_order.sort_unstable();
        let pad = library.max_extent();
        Ok(Self {
            size,
            inventory,
            library: Arc::new(library),
            block_order,
            pad,
        })
    }

    /// Builds a problem over the builtin six-block library.
    pub fn with_standard_blocks(
        size: usize,
        inventory: FxHashMap<char, u32>,
    ) -> Result<Self, BuildError> {
        Self::new(size, inventory, BlockLibrary::standard())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn library(&self) -> &BlockLibrary {
        &self.library
    }

    /// A blank state: empty grid, full inventory, no placements.
    pub fn initial_state(&self) -> State {
        State::blank(
            self.size,
            self.inventory.clone(),
            Arc::clone(&self.library),
            self.pad,
        )
    }

    /// Every state one move away from `state`: each legal single-block
    /// placement (row-major anchors, blocks in sorted order) followed by
    /// each single-block removal in placement order. Coinciding results
    /// are not deduplicated.
    pub fn neighbors(&self, state: &State) -> Vec<State> {
        let mut out = Vec::new();

        for row in 0..self.size {
            for col in 0..self.size {
                for &block in &self.block_order {
                    if !state.legal(block, row, col) {
                        continue;
                    }
                    let mut next = state.clone();
                    if next.place(block, row, col).is_ok() {
                        out.push(next);
                    }
                }
            }
        }

        for &placement in state.placements() {
            let mut next = state.clone();
            if next
                .remove(placement.block, placement.row, placement.col)
                .is_ok()
            {
                out.push(next);
            }
        }

        out
    }

    /// A uniformly sampled neighbor.
    pub fn random_neighbor<R: Rng>(
        &self,
        state: &State,
        rng: &mut R,
    ) -> Result<State, EmptyNeighborhood> {
        let mut all = self.neighbors(state);
        if all.is_empty() {
            return Err(EmptyNeighborhood);
        }
        let index = rng.gen_range(0..all.len());
        Ok(all.swap_remove(index))
    }

    /// The lowest-scoring neighbor, ties broken by enumeration order. Not
    /// guaranteed to score better than `state` itself.
    pub fn best_neighbor(&self, state: &State) -> Result<State, EmptyNeighborhood> {
        let mut best: Option<State> = None;
        for candidate in self.neighbors(state) {
            match &best {
                Some(current) if !candidate.is_better_than(current) => {}
                _ => best = Some(candidate),
            }
        }
        best.ok_or(EmptyNeighborhood)
    }

    /// A uniformly sampled neighbor scoring strictly better than `state`,
    /// or `None` if no neighbor improves on it.
    pub fn random_improving_neighbor<R: Rng>(&self, state: &State, rng: &mut R) -> Option<State> {
        let mut improving: Vec<State> = self
            .neighbors(state)
            .into_iter()
            .filter(|candidate| candidate.is_better_than(state))
            .collect();
        if improving.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..improving.len());
        Some(improving.swap_remove(index))
    }
}

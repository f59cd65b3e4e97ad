//! Padded cell grid with a border sentinel.
//!
//! The playable area is `size x size`, stored inside a `(size + pad)^2`
//! buffer whose extra cells are permanently `Border`. Stamping a shape
//! anchored anywhere in the playable area can then read every covered cell
//! directly; anything past the edge reads as `Border` and simply fails the
//! legality check, with no min/max arithmetic on the hot path.

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Filled,
    Border,
}

/// A square grid of cells with border padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    stride: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a blank grid with `pad` rows and columns of border cells
    /// beyond the playable area.
    pub fn new(size: usize, pad: usize) -> Self {
        let stride = size + pad;
        let mut cells = vec![Cell::Border; stride * stride];
        for row in 0..size {
            for col in 0..size {
                cells[row * stride + col] = Cell::Empty;
            }
        }
        Self {
            size,
            stride,
            cells,
        }
    }

    /// Side length of the playable area.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reads a cell. Coordinates past the padded buffer read as `Border`,
    /// so the sentinel is total over all of `usize`.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row >= self.stride || col >= self.stride {
            return Cell::Border;
        }
        self.cells[row * self.stride + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(row < self.stride && col < self.stride);
        self.cells[row * self.stride + col] = cell;
    }

    /// Number of `Empty` cells in the playable area.
    pub fn empty_cells(&self) -> usize {
        let mut count = 0;
        for row in 0..self.size {
            for col in 0..self.size {
                if self.get(row, col) == Cell::Empty {
                    count += 1;
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty_inside_border_outside() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.get(0, 0), Cell::Empty);
        assert_eq!(grid.get(2, 2), Cell::Empty);
        assert_eq!(grid.get(3, 0), Cell::Border);
        assert_eq!(grid.get(0, 3), Cell::Border);
        assert_eq!(grid.get(6, 6), Cell::Border);
        assert_eq!(grid.empty_cells(), 9);
    }

    #[test]
    fn reads_past_the_buffer_are_border() {
        let grid = Grid::new(2, 1);
        assert_eq!(grid.get(100, 0), Cell::Border);
        assert_eq!(grid.get(0, usize::MAX), Cell::Border);
    }

    #[test]
    fn set_round_trips() {
        let mut grid = Grid::new(2, 1);
        grid.set(1, 1, Cell::Filled);
        assert_eq!(grid.get(1, 1), Cell::Filled);
        grid.set(1, 1, Cell::Empty);
        assert_eq!(grid.get(1, 1), Cell::Empty);
    }
}

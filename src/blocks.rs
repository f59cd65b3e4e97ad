//! Block shape definitions and the shared shape library.
//!
//! Each block is a named polyomino given as a rectangular pattern of rows
//! over the alphabet `*` (filled) and `.` (empty). Shapes are parsed and
//! validated once, then shared read-only across every derived state.

use rustc_hash::FxHashMap;

use crate::error::ShapeError;

/// A single polyomino, normalized to its bounding box.
///
/// The filled-cell offsets and their count are computed at parse time so
/// that stamping and scoring never re-scan the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockShape {
    name: char,
    height: usize,
    width: usize,
    /// (row, col) offsets of the filled cells, row-major.
    filled: Vec<(usize, usize)>,
}

impl BlockShape {
    /// Parses a shape from equal-length rows of `*` and `.` characters.
    pub fn parse(name: char, rows: &[&str]) -> Result<Self, ShapeError> {
        if rows.is_empty() {
            return Err(ShapeError::Empty(name));
        }

        let width = rows[0].chars().count();
        let mut filled = Vec::new();

        for (row_index, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(ShapeError::NotRectangular(name));
            }
            for (col_index, cell) in row.chars().enumerate() {
                match cell {
                    '*' => filled.push((row_index, col_index)),
                    '.' => {}
                    other => return Err(ShapeError::UnknownCell(name, other)),
                }
            }
        }

        Ok(Self {
            name,
            height: rows.len(),
            width,
            filled,
        })
    }

    pub fn name(&self) -> char {
        self.name
    }

    /// Number of filled cells; each placement of this block covers this many
    /// grid cells.
    pub fn cell_count(&self) -> usize {
        self.filled.len()
    }

    /// The (row, col) offsets covered by this shape, relative to its anchor.
    pub fn filled_cells(&self) -> &[(usize, usize)] {
        &self.filled
    }

    /// Largest side of the bounding box.
    pub fn extent(&self) -> usize {
        self.height.max(self.width)
    }
}

/// The six classic blocks of the standard tiling instance.
const STANDARD_BLOCKS: &[(char, &[&str])] = &[
    ('+', &[".*.", "***", ".*."]),
    ('|', &["*", "*", "*", "*"]),
    ('L', &["*..", "*..", "***"]),
    ('Z', &["**.", ".**"]),
    ('T', &["***", ".*.", ".*."]),
    ('4', &["*.", "**", ".*"]),
];

/// An immutable, shared collection of block shapes keyed by name.
///
/// Built once at problem construction; states hold it behind an `Arc` and
/// never mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockLibrary {
    shapes: FxHashMap<char, BlockShape>,
}

impl BlockLibrary {
    /// Parses and validates a set of shape definitions.
    pub fn new(definitions: &[(char, &[&str])]) -> Result<Self, ShapeError> {
        let mut shapes = FxHashMap::default();
        for &(name, rows) in definitions {
            shapes.insert(name, BlockShape::parse(name, rows)?);
        }
        Ok(Self { shapes })
    }

    /// The builtin six-block library.
    pub fn standard() -> Self {
        Self::new(STANDARD_BLOCKS).expect("builtin block table is well-formed")
    }

    pub fn shape(&self, name: char) -> Option<&BlockShape> {
        self.shapes.get(&name)
    }

    pub fn contains(&self, name: char) -> bool {
        self.shapes.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Largest bounding-box side across all shapes. Determines how much
    /// border padding a grid needs so stamping can never read past the
    /// buffer.
    pub fn max_extent(&self) -> usize {
        self.shapes
            .values()
            .map(BlockShape::extent)
            .max()
            .unwrap_or(0)
    }
}

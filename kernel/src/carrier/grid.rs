//! `GridState`: immutable n x n tile placement.
//!
//! # Layout
//!
//! Cells are stored row-major in a flat `Vec<Tile>` of length
//! `dimension * dimension`. The blank's flat index is cached at
//! construction and carried through every transformation.
//!
//! # Invariants (enforced by the validating constructors)
//!
//! - The grid is square and non-empty, with `2 <= dimension <= MAX_DIMENSION`.
//! - Exactly one cell holds [`Tile::BLANK`].
//! - Every other symbol appears at most once.
//!
//! A `GridState` is never mutated in place: [`GridState::swapped`] returns
//! a new value and leaves the receiver untouched.

use std::collections::BTreeSet;
use std::fmt;

use crate::carrier::tile::Tile;

/// Largest supported side length.
///
/// 9 x 9 = 81 cells still fits within the printable ASCII alphabet with
/// unique symbols.
pub const MAX_DIMENSION: usize = 9;

/// Typed failure for grid construction. Fail-closed: no partially valid
/// grid is ever returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows (or only empty rows) were supplied.
    Empty,
    /// A row's length differs from the number of rows.
    NotSquare { row: usize, expected: usize, actual: usize },
    /// The grid is square but not the configured size.
    DimensionMismatch { expected: usize, actual: usize },
    /// The grid is smaller than 2 x 2 or larger than [`MAX_DIMENSION`].
    TooLarge { dimension: usize },
    /// No cell holds the blank.
    MissingBlank,
    /// More than one cell holds the blank.
    MultipleBlanks { count: usize },
    /// A non-blank symbol appears more than once.
    DuplicateSymbol { symbol: char },
    /// A symbol is not a printable ASCII character.
    InvalidSymbol { symbol: String },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid has no rows"),
            Self::NotSquare {
                row,
                expected,
                actual,
            } => write!(
                f,
                "grid is not square: row {row} has {actual} cells, expected {expected}"
            ),
            Self::DimensionMismatch { expected, actual } => write!(
                f,
                "grid is {actual}x{actual}, expected {expected}x{expected}"
            ),
            Self::TooLarge { dimension } => write!(
                f,
                "unsupported grid dimension {dimension} (supported: 2..={MAX_DIMENSION})"
            ),
            Self::MissingBlank => write!(f, "grid has no blank cell '0'"),
            Self::MultipleBlanks { count } => {
                write!(f, "grid has {count} blank cells, expected exactly one")
            }
            Self::DuplicateSymbol { symbol } => {
                write!(f, "symbol '{symbol}' appears more than once")
            }
            Self::InvalidSymbol { symbol } => {
                write!(f, "invalid symbol {symbol:?}: expected one printable ASCII character")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// An immutable snapshot of tile placement.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GridState {
    dimension: usize,
    cells: Vec<Tile>,
    blank: usize,
}

impl GridState {
    /// Build a grid from rows, inferring the dimension from the row count.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if the rows violate any grid invariant.
    pub fn from_rows(rows: &[Vec<Tile>]) -> Result<Self, GridError> {
        let dimension = rows.len();
        if dimension == 0 || rows.iter().all(Vec::is_empty) {
            return Err(GridError::Empty);
        }
        if !(2..=MAX_DIMENSION).contains(&dimension) {
            return Err(GridError::TooLarge { dimension });
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != dimension {
                return Err(GridError::NotSquare {
                    row,
                    expected: dimension,
                    actual: cells.len(),
                });
            }
        }
        let cells: Vec<Tile> = rows.iter().flatten().copied().collect();
        Self::from_cells(dimension, cells)
    }

    /// Build a grid from rows and require it to be `dimension` x `dimension`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DimensionMismatch`] if the row count differs from
    /// `dimension`, or any other [`GridError`] from [`GridState::from_rows`].
    pub fn from_rows_with_dimension(
        rows: &[Vec<Tile>],
        dimension: usize,
    ) -> Result<Self, GridError> {
        if !rows.is_empty() && rows.len() != dimension {
            return Err(GridError::DimensionMismatch {
                expected: dimension,
                actual: rows.len(),
            });
        }
        Self::from_rows(rows)
    }

    /// Build a grid from a flat row-major cell vector.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if the length is not `dimension * dimension` or
    /// the cells violate the blank/uniqueness invariants.
    pub fn from_cells(dimension: usize, cells: Vec<Tile>) -> Result<Self, GridError> {
        if !(2..=MAX_DIMENSION).contains(&dimension) {
            return Err(GridError::TooLarge { dimension });
        }
        if cells.len() != dimension * dimension {
            return Err(GridError::NotSquare {
                row: cells.len() / dimension,
                expected: dimension,
                actual: cells.len() % dimension,
            });
        }

        let blanks = cells.iter().filter(|t| t.is_blank()).count();
        if blanks == 0 {
            return Err(GridError::MissingBlank);
        }
        if blanks > 1 {
            return Err(GridError::MultipleBlanks { count: blanks });
        }

        let mut seen = BTreeSet::new();
        for tile in &cells {
            if !seen.insert(*tile) {
                return Err(GridError::DuplicateSymbol {
                    symbol: tile.as_char(),
                });
            }
        }

        let blank = cells.iter().position(|t| t.is_blank()).unwrap_or_default();
        Ok(Self {
            dimension,
            cells,
            blank,
        })
    }

    /// The ordered goal layout `1, 2, ..., n*n - 1, 0` using the indexed
    /// tile alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooLarge`] if `dimension` is out of range or
    /// needs more symbols than the indexed alphabet holds (above 7 x 7).
    pub fn ordered(dimension: usize) -> Result<Self, GridError> {
        if !(2..=MAX_DIMENSION).contains(&dimension) {
            return Err(GridError::TooLarge { dimension });
        }
        let total = dimension * dimension;
        let mut cells = Vec::with_capacity(total);
        for index in 1..total {
            let tile = Tile::from_index(index).ok_or(GridError::TooLarge { dimension })?;
            cells.push(tile);
        }
        cells.push(Tile::BLANK);
        Self::from_cells(dimension, cells)
    }

    /// Side length `n`.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Row-major cells.
    #[must_use]
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// The tile at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row < self.dimension && col < self.dimension {
            Some(self.cells[row * self.dimension + col])
        } else {
            None
        }
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.dimension)
    }

    /// Locate `tile` by row-major linear scan.
    ///
    /// Returns the first match, or `None` if the symbol is not present.
    #[must_use]
    pub fn locate(&self, tile: Tile) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|t| *t == tile)
            .map(|i| (i / self.dimension, i % self.dimension))
    }

    /// Position of the blank. Always present by construction.
    #[must_use]
    pub const fn blank(&self) -> (usize, usize) {
        (self.blank / self.dimension, self.blank % self.dimension)
    }

    /// Return a copy with cells `(r1, c1)` and `(r2, c2)` exchanged.
    ///
    /// The receiver is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the grid.
    #[must_use]
    pub fn swapped(&self, r1: usize, c1: usize, r2: usize, c2: usize) -> Self {
        let n = self.dimension;
        assert!(
            r1 < n && c1 < n && r2 < n && c2 < n,
            "swap coordinates ({r1},{c1}) <-> ({r2},{c2}) outside {n}x{n} grid"
        );
        let a = r1 * n + c1;
        let b = r2 * n + c2;
        let mut cells = self.cells.clone();
        cells.swap(a, b);
        let blank = if self.blank == a {
            b
        } else if self.blank == b {
            a
        } else {
            self.blank
        };
        Self {
            dimension: self.dimension,
            cells,
            blank,
        }
    }

    /// Stable identity encoding: the dimension byte followed by each cell's
    /// ASCII byte in row-major order.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(1 + self.cells.len());
        // MAX_DIMENSION keeps this lossless.
        #[allow(clippy::cast_possible_truncation)]
        bytes.push(self.dimension as u8);
        bytes.extend(self.cells.iter().map(|t| t.as_byte()));
        bytes
    }

    /// The sorted set of symbols in this grid (blank included).
    #[must_use]
    pub fn symbol_set(&self) -> BTreeSet<Tile> {
        self.cells.iter().copied().collect()
    }
}

impl fmt::Debug for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self
            .rows()
            .map(|r| r.iter().map(|t| t.as_char()).collect())
            .collect();
        write!(f, "GridState({})", rows.join("/"))
    }
}

/// One row per line, symbols separated by single spaces, no trailing newline.
impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, tile) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}

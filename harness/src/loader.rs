//! Line-oriented grid loader.
//!
//! One row per line, symbols separated by whitespace, one character per
//! symbol. Blank lines (a trailing newline included) are ignored and each
//! line is trimmed before splitting.

use std::path::Path;

use tessera_kernel::carrier::grid::{GridError, GridState};
use tessera_kernel::carrier::tile::Tile;

/// Error loading a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The file could not be read.
    Io { path: String, detail: String },
    /// A symbol on `line` (1-based) is not a single printable character.
    Symbol { line: usize, source: GridError },
    /// The rows do not form a valid grid.
    Grid(GridError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "cannot read {path}: {detail}"),
            Self::Symbol { line, source } => write!(f, "line {line}: {source}"),
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { .. } => None,
            Self::Symbol { source, .. } | Self::Grid(source) => Some(source),
        }
    }
}

impl From<GridError> for LoadError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

fn parse_symbol(symbol: &str) -> Result<Tile, GridError> {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Tile::from_char(c),
        _ => None,
    }
    .ok_or_else(|| GridError::InvalidSymbol {
        symbol: symbol.to_string(),
    })
}

/// Parse `text` into a `dimension x dimension` grid.
///
/// # Errors
///
/// Returns [`LoadError::Symbol`] for a malformed symbol and
/// [`LoadError::Grid`] for any grid invariant violation.
pub fn parse_grid(text: &str, dimension: usize) -> Result<GridState, LoadError> {
    let mut rows = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(parse_symbol)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| LoadError::Symbol {
                line: index + 1,
                source,
            })?;
        rows.push(row);
    }
    Ok(GridState::from_rows_with_dimension(&rows, dimension)?)
}

/// Read and parse a grid file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise as
/// [`parse_grid`].
pub fn load_grid(path: &Path, dimension: usize) -> Result<GridState, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    parse_grid(&text, dimension)
}

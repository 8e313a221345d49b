//! Puzzle configuration: tile count, heuristic, and search policy.

use tessera_kernel::carrier::grid::MAX_DIMENSION;
use tessera_search::heuristic::Heuristic;
use tessera_search::policy::SearchPolicy;

/// Tile count of the classic 3 x 3 puzzle.
pub const DEFAULT_TILES: usize = 8;

/// Error deriving a grid size from a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `tiles + 1` is not a perfect square.
    TilesNotSquare { tiles: usize },
    /// The derived grid is smaller than 2 x 2 or larger than the kernel allows.
    UnsupportedSize { tiles: usize, dimension: usize },
    /// A loaded grid does not match the configured size.
    GridSizeMismatch { tiles: usize, dimension: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TilesNotSquare { tiles } => {
                write!(f, "{tiles} tiles plus the blank is not a square number")
            }
            Self::UnsupportedSize { tiles, dimension } => write!(
                f,
                "{tiles} tiles gives a {dimension}x{dimension} grid (supported: 2..={MAX_DIMENSION})"
            ),
            Self::GridSizeMismatch { tiles, dimension } => write!(
                f,
                "{dimension}x{dimension} grid does not hold {tiles} tiles"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration for one puzzle run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Number of non-blank tiles (8 for the 3 x 3 puzzle).
    pub tiles: usize,
    /// Heuristic strategy for the run.
    pub heuristic: Heuristic,
    /// Dedup, budget, and audit options.
    pub policy: SearchPolicy,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            tiles: DEFAULT_TILES,
            heuristic: Heuristic::Manhattan,
            policy: SearchPolicy::default(),
        }
    }
}

impl PuzzleConfig {
    /// Side length `n` with `n * n == tiles + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `tiles + 1` is not a perfect square or the
    /// resulting grid is outside `2..=MAX_DIMENSION`.
    pub fn dimension(&self) -> Result<usize, ConfigError> {
        let not_square = || ConfigError::TilesNotSquare { tiles: self.tiles };
        let cells = self.tiles.checked_add(1).ok_or_else(not_square)?;
        let n = cells.isqrt();
        if n.checked_mul(n) != Some(cells) {
            return Err(not_square());
        }
        if !(2..=MAX_DIMENSION).contains(&n) {
            return Err(ConfigError::UnsupportedSize {
                tiles: self.tiles,
                dimension: n,
            });
        }
        Ok(n)
    }

    /// Same configuration with a different heuristic.
    #[must_use]
    pub fn with_heuristic(&self, heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            ..self.clone()
        }
    }
}

//! Heuristic estimators: remaining-cost estimates from a grid to the goal.
//!
//! Both strategies ignore the blank and return zero exactly when the two
//! grids are equal cell by cell. Manhattan distance dominates misplaced
//! tiles: every misplaced tile is at least one slide away from home.

use tessera_kernel::carrier::grid::GridState;

use crate::error::SearchError;

/// Heuristic strategy, chosen once per search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Strategy 1: count of non-blank cells holding the wrong symbol.
    MisplacedTiles,
    /// Strategy 2: sum over non-blank tiles of row and column distance to
    /// the tile's goal cell.
    Manhattan,
}

impl Heuristic {
    /// Both strategies, in selector order.
    pub const ALL: [Self; 2] = [Self::MisplacedTiles, Self::Manhattan];

    /// Map the numeric selector (1 = misplaced tiles, 2 = Manhattan).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownHeuristic`] for any other code.
    pub fn from_code(code: u8) -> Result<Self, SearchError> {
        match code {
            1 => Ok(Self::MisplacedTiles),
            2 => Ok(Self::Manhattan),
            _ => Err(SearchError::UnknownHeuristic { code }),
        }
    }

    /// The numeric selector.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::MisplacedTiles => 1,
            Self::Manhattan => 2,
        }
    }

    /// Stable identifier used in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MisplacedTiles => "misplaced_tiles",
            Self::Manhattan => "manhattan",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MisplacedTiles => "Miss-placed Tiles",
            Self::Manhattan => "Manhattan Distance",
        }
    }

    /// Estimate the remaining slides from `source` to `goal`.
    #[must_use]
    pub fn estimate(self, source: &GridState, goal: &GridState) -> u32 {
        match self {
            Self::MisplacedTiles => misplaced_tiles(source, goal),
            Self::Manhattan => manhattan_distance(source, goal),
        }
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Non-blank cells of `source` whose symbol differs from `goal`'s.
#[must_use]
pub fn misplaced_tiles(source: &GridState, goal: &GridState) -> u32 {
    let count = source
        .cells()
        .iter()
        .zip(goal.cells())
        .filter(|(s, g)| !s.is_blank() && s != g)
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Sum of `|dr| + |dc|` between each non-blank tile and its goal cell.
///
/// Tiles absent from `goal` contribute nothing; the driver's pre-flight
/// check rules that case out.
#[must_use]
pub fn manhattan_distance(source: &GridState, goal: &GridState) -> u32 {
    let n = source.dimension();
    let mut total = 0usize;
    for (i, tile) in source.cells().iter().enumerate() {
        if tile.is_blank() || goal.cells().get(i) == Some(tile) {
            continue;
        }
        if let Some((gr, gc)) = goal.locate(*tile) {
            total += (i / n).abs_diff(gr) + (i % n).abs_diff(gc);
        }
    }
    u32::try_from(total).unwrap_or(u32::MAX)
}

//! Built-in puzzles shared by tests, benchmarks, and the fixture binary.
//!
//! Grids use the loader's text format. `optimal_depth` is the known
//! shortest solution length (`None` when the goal is unreachable).

use tessera_kernel::carrier::grid::GridState;

use crate::config::PuzzleConfig;
use crate::loader::parse_grid;
use crate::runner::RunError;

/// A named puzzle instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    pub name: &'static str,
    pub tiles: usize,
    pub initial: &'static str,
    pub goal: &'static str,
    pub optimal_depth: Option<u32>,
}

const GOAL_3X3: &str = "1 2 3\n4 5 6\n7 8 0\n";

/// Blank in the centre, two slides from home.
pub const CLASSIC: Fixture = Fixture {
    name: "classic",
    tiles: 8,
    initial: "1 2 3\n4 0 6\n7 5 8\n",
    goal: GOAL_3X3,
    optimal_depth: Some(2),
};

/// Three tiles rotated around the blank.
pub const THREE_SLIDE: Fixture = Fixture {
    name: "three_slide",
    tiles: 8,
    initial: "1 2 3\n4 8 5\n7 0 6\n",
    goal: GOAL_3X3,
    optimal_depth: Some(3),
};

/// Initial equals goal.
pub const IDENTITY: Fixture = Fixture {
    name: "identity",
    tiles: 8,
    initial: GOAL_3X3,
    goal: GOAL_3X3,
    optimal_depth: Some(0),
};

/// A longer 3 x 3 instance where Manhattan expands fewer nodes than misplaced tiles.
pub const EIGHT_SLIDE: Fixture = Fixture {
    name: "eight_slide",
    tiles: 8,
    initial: "4 1 3\n2 8 5\n0 7 6\n",
    goal: GOAL_3X3,
    optimal_depth: Some(8),
};

/// 4 x 4 instance (tiles `10..=15` written `A..=F`).
pub const FIFTEEN_THREE_SLIDE: Fixture = Fixture {
    name: "fifteen_three_slide",
    tiles: 15,
    initial: "1 2 3 4\n5 6 0 8\n9 A 7 B\nD E F C\n",
    goal: "1 2 3 4\n5 6 7 8\n9 A B C\nD E F 0\n",
    optimal_depth: Some(3),
};

/// Two tiles swapped on a 2 x 2 board: the other parity class.
pub const UNSOLVABLE_2X2: Fixture = Fixture {
    name: "unsolvable_2x2",
    tiles: 3,
    initial: "2 1\n3 0\n",
    goal: "1 2\n3 0\n",
    optimal_depth: None,
};

/// Every built-in fixture.
pub const ALL: [Fixture; 6] = [
    CLASSIC,
    THREE_SLIDE,
    IDENTITY,
    EIGHT_SLIDE,
    FIFTEEN_THREE_SLIDE,
    UNSOLVABLE_2X2,
];

/// Look up a fixture by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Fixture> {
    ALL.iter().copied().find(|f| f.name == name)
}

impl Fixture {
    /// Default configuration sized for this fixture.
    #[must_use]
    pub fn config(&self) -> PuzzleConfig {
        PuzzleConfig {
            tiles: self.tiles,
            ..PuzzleConfig::default()
        }
    }

    /// Parse both grids.
    ///
    /// # Errors
    ///
    /// Returns [`RunError`] if the tile count or either grid text is invalid.
    pub fn grids(&self) -> Result<(GridState, GridState), RunError> {
        let dimension = self.config().dimension()?;
        Ok((
            parse_grid(self.initial, dimension)?,
            parse_grid(self.goal, dimension)?,
        ))
    }
}

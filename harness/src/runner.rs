//! Harness runner: load, validate, search, and package a report.
//!
//! # Pipeline
//!
//! ```text
//! PuzzleConfig::dimension() → load_grid() × 2 → size check
//!   → search() → report JSON → canonical_json_bytes() → canonical_hash()
//! ```
//!
//! The runner owns no search logic; it delegates to `tessera_search`.

use std::path::Path;

use tessera_kernel::carrier::grid::GridState;
use tessera_kernel::proof::canon::{canonical_json_bytes, CanonError};
use tessera_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_REPORT};
use tessera_search::error::SearchError;
use tessera_search::search::{search, SearchResult};

use crate::config::{ConfigError, PuzzleConfig};
use crate::loader::{load_grid, LoadError};

/// Report schema identifier embedded in every report.
pub const REPORT_SCHEMA_VERSION: &str = "tessera.search_report.v1";

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Configuration is unusable or disagrees with the loaded grids.
    Config(ConfigError),
    /// An input grid could not be loaded.
    Load(LoadError),
    /// Search pre-flight validation failed.
    Search(SearchError),
    /// Report serialization failed.
    Canon(CanonError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Load(e) => write!(f, "load error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::Canon(e) => write!(f, "report serialization error: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Load(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Canon(e) => Some(e),
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<LoadError> for RunError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

/// Outcome of one harness run.
#[derive(Debug)]
pub struct RunReport {
    /// The initial grid searched from.
    pub initial: GridState,
    /// The goal grid.
    pub goal: GridState,
    /// Search result with path, moves, and audit graph.
    pub result: SearchResult,
    /// Canonical JSON bytes of the report.
    pub report_bytes: Vec<u8>,
    /// Domain-separated digest of `report_bytes`.
    pub report_digest: ContentHash,
}

/// Search from `initial` to `goal` under `config`.
///
/// # Errors
///
/// Returns [`RunError`] if the grids do not match the configured size, the
/// search rejects its inputs, or the report cannot be serialized. Exhaustion
/// and budget termination are reported in the result, not as errors.
pub fn run_puzzle(
    initial: &GridState,
    goal: &GridState,
    config: &PuzzleConfig,
) -> Result<RunReport, RunError> {
    let dimension = config.dimension()?;
    for grid in [initial, goal] {
        if grid.dimension() != dimension {
            return Err(RunError::Config(ConfigError::GridSizeMismatch {
                tiles: config.tiles,
                dimension: grid.dimension(),
            }));
        }
    }

    let result = search(initial, goal, config.heuristic, &config.policy)?;
    let report_bytes = canonical_json_bytes(&report_json(initial, goal, &result))?;
    let report_digest = canonical_hash(DOMAIN_SEARCH_REPORT, &report_bytes);

    Ok(RunReport {
        initial: initial.clone(),
        goal: goal.clone(),
        result,
        report_bytes,
        report_digest,
    })
}

/// Load both grids from disk and run.
///
/// # Errors
///
/// As [`run_puzzle`], plus [`RunError::Load`] for unreadable or malformed
/// files.
pub fn run_files(
    initial_path: &Path,
    goal_path: &Path,
    config: &PuzzleConfig,
) -> Result<RunReport, RunError> {
    let dimension = config.dimension()?;
    let initial = load_grid(initial_path, dimension)?;
    let goal = load_grid(goal_path, dimension)?;
    run_puzzle(&initial, &goal, config)
}

fn grid_json(grid: &GridState) -> serde_json::Value {
    serde_json::Value::Array(
        grid.rows()
            .map(|row| row.iter().map(|t| t.as_char().to_string()).collect::<String>())
            .map(serde_json::Value::String)
            .collect(),
    )
}

fn report_json(
    initial: &GridState,
    goal: &GridState,
    result: &SearchResult,
) -> serde_json::Value {
    serde_json::json!({
        "goal": grid_json(goal),
        "heuristic": result.heuristic.name(),
        "initial": grid_json(initial),
        "moves": result.moves.iter().map(|m| m.name()).collect::<Vec<_>>(),
        "path": result.path.iter().map(grid_json).collect::<Vec<_>>(),
        "schema_version": REPORT_SCHEMA_VERSION,
        "search_graph": result.graph.to_json_value(),
        "solved": result.is_solved(),
    })
}

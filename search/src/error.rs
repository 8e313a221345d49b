//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, frontier exhausted, budget exceeded, parity mismatch) are
//! expressed via [`crate::graph::TerminationReason`] and always produce a
//! `SearchGraph` audit trail.

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before the driver leaves `Ready`. No
/// `SearchGraph` is produced because no search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Initial and goal grids have different side lengths.
    DimensionMismatch { initial: usize, goal: usize },
    /// Initial and goal grids do not contain the same symbols.
    SymbolSetMismatch { initial: String, goal: String },
    /// The policy is internally inconsistent.
    InvalidPolicy { detail: String },
    /// A numeric heuristic selector other than 1 or 2.
    UnknownHeuristic { code: u8 },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionMismatch { initial, goal } => write!(
                f,
                "initial grid is {initial}x{initial} but goal grid is {goal}x{goal}"
            ),
            Self::SymbolSetMismatch { initial, goal } => write!(
                f,
                "initial symbols [{initial}] differ from goal symbols [{goal}]"
            ),
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::UnknownHeuristic { code } => {
                write!(f, "unknown heuristic {code} (expected 1 or 2)")
            }
        }
    }
}

impl std::error::Error for SearchError {}

//! Search policy types.

use crate::error::SearchError;

/// Budget, dedup, and audit configuration for one search run.
///
/// The default reproduces the classic tree search: no duplicate detection,
/// no budget, no parity pre-check, no per-expansion event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Duplicate-state handling.
    pub dedup: DedupPolicy,
    /// Hard cap on node expansions (`None` = unbounded).
    pub max_expansions: Option<u64>,
    /// Refuse to search when the goal is in the other parity class.
    pub parity_precheck: bool,
    /// Record one `ExpandEvent` per expansion in the search graph.
    pub record_expansions: bool,
}

impl SearchPolicy {
    /// Validate that the policy options are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero
    /// (the root could never be goal-tested).
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            dedup: DedupPolicy::Off,
            max_expansions: None,
            parity_precheck: false,
            record_expansions: false,
        }
    }
}

/// Duplicate-state policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DedupPolicy {
    /// Every generated child enters the frontier; the same state may be
    /// expanded repeatedly along different paths.
    Off,
    /// Track the best known depth per state fingerprint. A child is
    /// discarded unless it reaches its state in strictly fewer slides, and a
    /// popped node whose depth was since beaten is skipped unexpanded.
    BestDepth,
}

impl DedupPolicy {
    /// Stable identifier used in reports and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::BestDepth => "best_depth",
        }
    }
}

//! `SearchGraph`: the audit trail of one search run.
//!
//! Metadata (policy echo, counters, termination reason) is always present.
//! The ordered `ExpandEvent` list is recorded only when the policy asks for
//! it, since an unbounded tree search can expand millions of nodes.

use tessera_kernel::operators::slide::Slide;
use tessera_kernel::proof::canon::{canonical_json_bytes, CanonError};

use crate::heuristic::Heuristic;
use crate::policy::DedupPolicy;

/// The complete search audit trail.
#[derive(Debug, Clone)]
pub struct SearchGraph {
    /// Ordered expansion events (empty unless `record_expansions` is set).
    pub expansions: Vec<ExpandEvent>,
    /// Aggregate metadata.
    pub metadata: SearchGraphMetadata,
}

/// A single frontier-pop + expansion event.
#[derive(Debug, Clone)]
pub struct ExpandEvent {
    /// Total order of goal-tested pops (0-based).
    pub expansion_order: u64,
    /// Hex fingerprint of the popped node's state.
    pub state_fingerprint: String,
    /// The frontier key at time of pop.
    pub pop_key: FrontierPopKey,
    /// Whether the popped node passed the goal test.
    pub is_goal: bool,
    /// Children in expansion order (empty for the goal pop).
    pub children: Vec<ChildRecord>,
}

/// The frontier ordering key recorded at pop time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierPopKey {
    pub score: u32,
    pub depth: u32,
    pub creation_order: u64,
}

/// A generated child and what the frontier did with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildRecord {
    pub slide: Slide,
    pub state_fingerprint: String,
    pub score: u32,
    pub creation_order: u64,
    pub outcome: ChildOutcome,
}

/// Frontier decision for a generated child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildOutcome {
    /// Inserted into the frontier.
    Queued,
    /// Dropped: the state was already queued at `best_depth` or shallower.
    DuplicateSuppressed { best_depth: u32 },
}

/// Aggregate metadata with policy echo.
#[derive(Debug, Clone)]
pub struct SearchGraphMetadata {
    // Run bindings
    pub heuristic: Heuristic,
    pub dimension: usize,
    pub root_state_fingerprint: String,
    pub goal_state_fingerprint: String,

    // Counters
    pub nodes_generated: u64,
    pub nodes_expanded: u64,
    pub explored: u64,
    pub duplicates_suppressed: u64,
    pub stale_skipped: u64,
    pub frontier_high_water: u64,
    /// Distinct states recorded by best-depth dedup (0 when dedup is off).
    pub distinct_states: u64,
    pub termination_reason: TerminationReason,

    // Policy echo
    pub dedup: DedupPolicy,
    pub max_expansions: Option<u64>,
    pub parity_precheck: bool,
}

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A popped node passed the goal test at this depth.
    GoalReached { depth: u32 },
    /// Frontier emptied without finding the goal.
    FrontierExhausted,
    /// `max_expansions` was reached with nodes still queued.
    ExpansionBudgetExceeded { limit: u64 },
    /// The parity pre-check proved the goal unreachable.
    ParityMismatch,
}

impl TerminationReason {
    /// Stable identifier used in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded { .. } => "expansion_budget_exceeded",
            Self::ParityMismatch => "parity_mismatch",
        }
    }
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

impl SearchGraph {
    /// Serialize the graph to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Convert to a `serde_json::Value` for canonical serialization.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
        })
    }
}

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "children": e.children.iter().map(child_record_to_json).collect::<Vec<_>>(),
        "expansion_order": e.expansion_order,
        "is_goal": e.is_goal,
        "pop_key": {
            "creation_order": e.pop_key.creation_order,
            "depth": e.pop_key.depth,
            "score": e.pop_key.score,
        },
        "state_fingerprint": e.state_fingerprint,
    })
}

fn child_record_to_json(c: &ChildRecord) -> serde_json::Value {
    serde_json::json!({
        "creation_order": c.creation_order,
        "outcome": child_outcome_to_json(c.outcome),
        "score": c.score,
        "slide": c.slide.name(),
        "state_fingerprint": c.state_fingerprint,
    })
}

fn child_outcome_to_json(o: ChildOutcome) -> serde_json::Value {
    match o {
        ChildOutcome::Queued => serde_json::json!({"type": "queued"}),
        ChildOutcome::DuplicateSuppressed { best_depth } => {
            serde_json::json!({"best_depth": best_depth, "type": "duplicate_suppressed"})
        }
    }
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "dedup": m.dedup.name(),
        "dimension": m.dimension,
        "distinct_states": m.distinct_states,
        "explored": m.explored,
        "frontier_high_water": m.frontier_high_water,
        "goal_state_fingerprint": m.goal_state_fingerprint,
        "heuristic": m.heuristic.name(),
        "max_expansions": m.max_expansions,
        "nodes_expanded": m.nodes_expanded,
        "nodes_generated": m.nodes_generated,
        "parity_precheck": m.parity_precheck,
        "root_state_fingerprint": m.root_state_fingerprint,
        "stale_skipped": m.stale_skipped,
        "termination_reason": termination_reason_to_json(m.termination_reason),
        "total_duplicates_suppressed": m.duplicates_suppressed,
    })
}

fn termination_reason_to_json(r: TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached { depth } => {
            serde_json::json!({"depth": depth, "type": r.name()})
        }
        TerminationReason::ExpansionBudgetExceeded { limit } => {
            serde_json::json!({"limit": limit, "type": r.name()})
        }
        TerminationReason::FrontierExhausted | TerminationReason::ParityMismatch => {
            serde_json::json!({"type": r.name()})
        }
    }
}

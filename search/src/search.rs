//! Search entry point and the best-first driver.
//!
//! # State machine
//!
//! ```text
//! Ready ──start──▶ Running ──pop/goal-test/expand──▶ Running
//!   │                 │
//!   │ parity          ├── goal test passes ──────▶ Terminated(GoalReached)
//!   │ mismatch        ├── frontier empty ────────▶ Terminated(FrontierExhausted)
//!   ▼                 └── budget reached ────────▶ Terminated(ExpansionBudgetExceeded)
//! Terminated(ParityMismatch)
//! ```
//!
//! One call to [`SearchDriver::step`] performs one transition. Exhaustion
//! and budget termination are outcomes, not errors.

use std::collections::BTreeSet;
use std::rc::Rc;

use tessera_kernel::carrier::grid::GridState;
use tessera_kernel::carrier::tile::Tile;
use tessera_kernel::operators::parity::is_reachable;
use tessera_kernel::operators::slide::Slide;
use tessera_kernel::proof::hash::grid_fingerprint;

use crate::error::SearchError;
use crate::expand::expand;
use crate::frontier::{BestFirstFrontier, PushOutcome};
use crate::graph::{
    ChildOutcome, ChildRecord, ExpandEvent, FrontierPopKey, SearchGraph, SearchGraphMetadata,
    TerminationReason,
};
use crate::heuristic::Heuristic;
use crate::node::{reconstruct_moves, reconstruct_path, SearchNode};
use crate::policy::SearchPolicy;

/// Where the driver is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Initial and goal loaded, frontier empty.
    Ready,
    /// Frontier non-empty; popping and expanding.
    Running,
    /// Terminal.
    Terminated(TerminationReason),
}

/// Result of a search execution.
///
/// Always contains a complete `SearchGraph` audit trail regardless of how
/// the search terminated.
#[derive(Debug)]
pub struct SearchResult {
    /// The heuristic the run used.
    pub heuristic: Heuristic,
    /// Root-to-goal states (empty unless solved).
    pub path: Vec<GridState>,
    /// The slides between consecutive path states.
    pub moves: Vec<Slide>,
    /// The audit trail.
    pub graph: SearchGraph,
}

impl SearchResult {
    /// Why the search stopped.
    #[must_use]
    pub fn termination_reason(&self) -> TerminationReason {
        self.graph.metadata.termination_reason
    }

    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(
            self.graph.metadata.termination_reason,
            TerminationReason::GoalReached { .. }
        )
    }

    /// Number of slides in the solution, if solved.
    #[must_use]
    pub fn solution_depth(&self) -> Option<u32> {
        match self.graph.metadata.termination_reason {
            TerminationReason::GoalReached { depth } => Some(depth),
            _ => None,
        }
    }

    /// Root plus every child produced by expansion.
    #[must_use]
    pub fn nodes_generated(&self) -> u64 {
        self.graph.metadata.nodes_generated
    }

    /// Nodes popped and goal-tested (the goal pop included).
    #[must_use]
    pub fn nodes_expanded(&self) -> u64 {
        self.graph.metadata.nodes_expanded
    }
}

/// Best-first search driver over one (initial, goal, heuristic, policy) run.
///
/// The frontier and explored bookkeeping are owned exclusively by the
/// driver.
pub struct SearchDriver {
    initial: GridState,
    goal: GridState,
    heuristic: Heuristic,
    policy: SearchPolicy,
    frontier: BestFirstFrontier,
    phase: SearchPhase,
    next_creation_order: u64,
    nodes_generated: u64,
    nodes_expanded: u64,
    explored: u64,
    duplicates_suppressed: u64,
    expansions: Vec<ExpandEvent>,
    goal_node: Option<Rc<SearchNode>>,
}

impl SearchDriver {
    /// Validate inputs and build a driver in the `Ready` phase.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidPolicy`] if the policy fails validation.
    /// - [`SearchError::DimensionMismatch`] if the grids differ in size.
    /// - [`SearchError::SymbolSetMismatch`] if the grids hold different symbols.
    pub fn new(
        initial: GridState,
        goal: GridState,
        heuristic: Heuristic,
        policy: SearchPolicy,
    ) -> Result<Self, SearchError> {
        policy.validate()?;
        if initial.dimension() != goal.dimension() {
            return Err(SearchError::DimensionMismatch {
                initial: initial.dimension(),
                goal: goal.dimension(),
            });
        }
        let (initial_symbols, goal_symbols) = (initial.symbol_set(), goal.symbol_set());
        if initial_symbols != goal_symbols {
            let render = |set: &BTreeSet<Tile>| set.iter().map(|t| t.as_char()).collect::<String>();
            return Err(SearchError::SymbolSetMismatch {
                initial: render(&initial_symbols),
                goal: render(&goal_symbols),
            });
        }

        Ok(Self {
            initial,
            goal,
            heuristic,
            frontier: BestFirstFrontier::new(policy.dedup),
            policy,
            phase: SearchPhase::Ready,
            next_creation_order: 0,
            nodes_generated: 0,
            nodes_expanded: 0,
            explored: 0,
            duplicates_suppressed: 0,
            expansions: Vec::new(),
            goal_node: None,
        })
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Nodes currently queued (stale entries included).
    #[must_use]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Perform one transition and return the new phase.
    ///
    /// Calling `step` on a terminated driver is a no-op.
    pub fn step(&mut self) -> SearchPhase {
        match self.phase {
            SearchPhase::Ready => self.start(),
            SearchPhase::Running => self.iterate(),
            SearchPhase::Terminated(_) => {}
        }
        self.phase
    }

    /// Step until terminal and return the result.
    #[must_use]
    pub fn run(mut self) -> SearchResult {
        loop {
            if let SearchPhase::Terminated(reason) = self.step() {
                return self.finish(reason);
            }
        }
    }

    /// Consume a terminated driver into its result; `None` if still live.
    #[must_use]
    pub fn into_result(self) -> Option<SearchResult> {
        match self.phase {
            SearchPhase::Terminated(reason) => Some(self.finish(reason)),
            SearchPhase::Ready | SearchPhase::Running => None,
        }
    }

    fn start(&mut self) {
        self.nodes_generated = 1;
        if self.policy.parity_precheck && !is_reachable(&self.initial, &self.goal) {
            self.phase = SearchPhase::Terminated(TerminationReason::ParityMismatch);
            return;
        }
        let root = SearchNode::root(self.initial.clone(), &self.goal, self.heuristic);
        self.next_creation_order = 1;
        let _ = self.frontier.push(Rc::new(root));
        self.phase = SearchPhase::Running;
    }

    fn iterate(&mut self) {
        if self.frontier.is_empty() {
            self.phase = SearchPhase::Terminated(TerminationReason::FrontierExhausted);
            return;
        }
        if let Some(limit) = self.policy.max_expansions {
            if self.nodes_expanded >= limit {
                self.phase =
                    SearchPhase::Terminated(TerminationReason::ExpansionBudgetExceeded { limit });
                return;
            }
        }
        // Only stale entries may remain even though the heap was non-empty.
        let Some(current) = self.frontier.pop() else {
            self.phase = SearchPhase::Terminated(TerminationReason::FrontierExhausted);
            return;
        };

        let expansion_order = self.nodes_expanded;
        self.nodes_expanded += 1;
        let pop_key = FrontierPopKey {
            score: current.score(),
            depth: current.depth,
            creation_order: current.creation_order,
        };

        if self.is_goal(&current.state) {
            if self.policy.record_expansions {
                self.expansions.push(ExpandEvent {
                    expansion_order,
                    state_fingerprint: current.fingerprint.hex_digest().to_string(),
                    pop_key,
                    is_goal: true,
                    children: Vec::new(),
                });
            }
            self.phase = SearchPhase::Terminated(TerminationReason::GoalReached {
                depth: current.depth,
            });
            self.goal_node = Some(current);
            return;
        }

        let children = expand(
            &current,
            &self.goal,
            self.heuristic,
            &mut self.next_creation_order,
        );
        let mut records = Vec::new();
        for child in children {
            self.nodes_generated += 1;
            let record = if self.policy.record_expansions {
                child.producing_slide.map(|slide| ChildRecord {
                    slide,
                    state_fingerprint: child.fingerprint.hex_digest().to_string(),
                    score: child.score(),
                    creation_order: child.creation_order,
                    outcome: ChildOutcome::Queued,
                })
            } else {
                None
            };
            let outcome = match self.frontier.push(Rc::new(child)) {
                PushOutcome::Queued => ChildOutcome::Queued,
                PushOutcome::DuplicateSuppressed { best_depth } => {
                    self.duplicates_suppressed += 1;
                    ChildOutcome::DuplicateSuppressed { best_depth }
                }
            };
            if let Some(mut record) = record {
                record.outcome = outcome;
                records.push(record);
            }
        }
        self.explored += 1;

        if self.policy.record_expansions {
            self.expansions.push(ExpandEvent {
                expansion_order,
                state_fingerprint: current.fingerprint.hex_digest().to_string(),
                pop_key,
                is_goal: false,
                children: records,
            });
        }
    }

    fn is_goal(&self, state: &GridState) -> bool {
        self.heuristic.estimate(state, &self.goal) == 0
    }

    fn finish(self, termination_reason: TerminationReason) -> SearchResult {
        let (path, moves) = match &self.goal_node {
            Some(goal) => (reconstruct_path(goal), reconstruct_moves(goal)),
            None => (Vec::new(), Vec::new()),
        };
        let metadata = SearchGraphMetadata {
            heuristic: self.heuristic,
            dimension: self.initial.dimension(),
            root_state_fingerprint: grid_fingerprint(&self.initial).hex_digest().to_string(),
            goal_state_fingerprint: grid_fingerprint(&self.goal).hex_digest().to_string(),
            nodes_generated: self.nodes_generated,
            nodes_expanded: self.nodes_expanded,
            explored: self.explored,
            duplicates_suppressed: self.duplicates_suppressed,
            stale_skipped: self.frontier.stale_skipped(),
            frontier_high_water: self.frontier.high_water(),
            distinct_states: u64::try_from(self.frontier.distinct_states()).unwrap_or(u64::MAX),
            termination_reason,
            dedup: self.policy.dedup,
            max_expansions: self.policy.max_expansions,
            parity_precheck: self.policy.parity_precheck,
        };
        SearchResult {
            heuristic: self.heuristic,
            path,
            moves,
            graph: SearchGraph {
                expansions: self.expansions,
                metadata,
            },
        }
    }
}

/// Run best-first search from `initial` to `goal`.
///
/// All runtime terminations return `Ok(SearchResult)`; inspect
/// [`SearchResult::termination_reason`] for the outcome.
///
/// # Errors
///
/// Returns [`SearchError`] only for pre-flight validation failures.
pub fn search(
    initial: &GridState,
    goal: &GridState,
    heuristic: Heuristic,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    let driver = SearchDriver::new(initial.clone(), goal.clone(), heuristic, policy.clone())?;
    Ok(driver.run())
}

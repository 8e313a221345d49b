//! Search nodes and the frontier ordering key.
//!
//! Nodes form a tree rooted at the initial state. Each non-root node holds a
//! shared `Rc` reference to the one node that generated it; a parent may be
//! shared by up to four children. A node is freed once no child, frontier
//! entry, or reconstructed path still refers to it.

use std::rc::Rc;

use tessera_kernel::carrier::grid::GridState;
use tessera_kernel::operators::slide::Slide;
use tessera_kernel::proof::hash::{grid_fingerprint, ContentHash};

use crate::heuristic::Heuristic;

/// An immutable node in the search tree.
///
/// Ordering for frontier extraction uses `(score, creation_order)` where
/// `score = g + h`. Lower is better; ties go to the older node.
#[derive(Debug)]
pub struct SearchNode {
    /// Full immutable state at this node.
    pub state: GridState,
    /// Canonical hash of the state's identity bytes.
    pub fingerprint: ContentHash,
    /// Slides from the root (g-cost).
    pub depth: u32,
    /// Heuristic estimate assigned once at creation (h-cost).
    pub h_cost: u32,
    /// Driver-assigned counter; the stable tie-break.
    pub creation_order: u64,
    /// The slide that produced this node from its parent.
    pub producing_slide: Option<Slide>,
    /// Generating node (`None` for root).
    pub parent: Option<Rc<SearchNode>>,
}

impl SearchNode {
    /// Build the root node (depth 0, creation order 0).
    #[must_use]
    pub fn root(state: GridState, goal: &GridState, heuristic: Heuristic) -> Self {
        let h_cost = heuristic.estimate(&state, goal);
        Self {
            fingerprint: grid_fingerprint(&state),
            state,
            depth: 0,
            h_cost,
            creation_order: 0,
            producing_slide: None,
            parent: None,
        }
    }

    /// Build a child of `parent` reached by `slide`, scoring it immediately.
    #[must_use]
    pub fn child(
        parent: &Rc<Self>,
        state: GridState,
        slide: Slide,
        goal: &GridState,
        heuristic: Heuristic,
        creation_order: u64,
    ) -> Self {
        let h_cost = heuristic.estimate(&state, goal);
        Self {
            fingerprint: grid_fingerprint(&state),
            state,
            depth: parent.depth + 1,
            h_cost,
            creation_order,
            producing_slide: Some(slide),
            parent: Some(Rc::clone(parent)),
        }
    }

    /// g-cost: the stored depth.
    #[must_use]
    pub const fn g_cost(&self) -> u32 {
        self.depth
    }

    /// f-score: `g + h`, the frontier ordering key.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.depth.saturating_add(self.h_cost)
    }
}

/// Walk parent links from `goal` to the root and return the states in
/// root-to-goal order.
///
/// The result has `goal.depth + 1` entries.
#[must_use]
pub fn reconstruct_path(goal: &Rc<SearchNode>) -> Vec<GridState> {
    let mut path = Vec::with_capacity(goal.depth as usize + 1);
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node.state.clone());
        current = node.parent.as_ref();
    }
    path.reverse();
    path
}

/// The slides along the root-to-`goal` path, in order.
#[must_use]
pub fn reconstruct_moves(goal: &Rc<SearchNode>) -> Vec<Slide> {
    let mut moves = Vec::with_capacity(goal.depth as usize);
    let mut current = Some(goal);
    while let Some(node) = current {
        if let Some(slide) = node.producing_slide {
            moves.push(slide);
        }
        current = node.parent.as_ref();
    }
    moves.reverse();
    moves
}

/// The frontier ordering key: `(score, creation_order)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub score: u32,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.score
            .cmp(&other.score)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl From<&SearchNode> for FrontierKey {
    fn from(node: &SearchNode) -> Self {
        Self {
            score: node.score(),
            creation_order: node.creation_order,
        }
    }
}

//! Expansion rule: every node one blank slide away from a given node.

use std::rc::Rc;

use tessera_kernel::carrier::grid::GridState;
use tessera_kernel::operators::slide::legal_slides;

use crate::heuristic::Heuristic;
use crate::node::SearchNode;

/// Expand `node` into its children.
///
/// Children come out in [`Slide::ORDER`](tessera_kernel::operators::slide::Slide::ORDER)
/// (right, up, left, down) with out-of-bounds slides dropped. Each child
/// is scored on creation and takes the next value of `next_creation_order`.
///
/// No child is ever pruned here; duplicate handling belongs to the frontier.
#[must_use]
pub fn expand(
    node: &Rc<SearchNode>,
    goal: &GridState,
    heuristic: Heuristic,
    next_creation_order: &mut u64,
) -> Vec<SearchNode> {
    legal_slides(&node.state)
        .into_iter()
        .map(|(slide, state)| {
            let order = *next_creation_order;
            *next_creation_order += 1;
            SearchNode::child(node, state, slide, goal, heuristic, order)
        })
        .collect()
}

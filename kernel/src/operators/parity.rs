//! Reachability pre-check for slide sequences.
//!
//! The sliding-tile state space splits into two classes that no sequence of
//! slides can connect. With tiles numbered by their goal position, read
//! row-major with the blank removed:
//!
//! - odd `n`: a slide never changes the inversion parity;
//! - even `n`: a vertical slide flips the inversion parity and moves the
//!   blank one row, so `inversions + blank_row` keeps its parity.
//!
//! Two grids are mutually reachable iff that quantity has the same parity
//! for both. The goal's own sequence has zero inversions.

use crate::carrier::grid::GridState;

/// Number of pairs out of order in `seq`.
#[must_use]
pub fn inversions(seq: &[usize]) -> usize {
    seq.iter()
        .enumerate()
        .map(|(i, &a)| seq[i + 1..].iter().filter(|&&b| b < a).count())
        .sum()
}

/// Whether `goal` is reachable from `initial` by slides.
///
/// Grids of different dimension or with different symbol sets are never
/// reachable from one another.
#[must_use]
pub fn is_reachable(initial: &GridState, goal: &GridState) -> bool {
    if initial.dimension() != goal.dimension() || initial.symbol_set() != goal.symbol_set() {
        return false;
    }

    let mut seq = Vec::with_capacity(initial.cells().len());
    for tile in initial.cells().iter().filter(|t| !t.is_blank()) {
        let Some((r, c)) = goal.locate(*tile) else {
            return false;
        };
        seq.push(r * goal.dimension() + c);
    }

    let mut parity = inversions(&seq);
    if goal.dimension() % 2 == 0 {
        parity += initial.blank().0.abs_diff(goal.blank().0);
    }
    parity % 2 == 0
}

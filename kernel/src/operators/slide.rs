//! `Slide`: the single move operator of the puzzle.
//!
//! A slide moves the blank one cell in a direction, exchanging it with the
//! tile already there. Directions name the blank's movement, not the tile's.
//!
//! # Enumeration order
//!
//! [`Slide::ORDER`] is right, up, left, down. Expansion must follow this
//! order exactly: it decides which of several equal-score children the
//! frontier yields first.

use std::fmt;

use crate::carrier::grid::GridState;

/// One blank-tile move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slide {
    /// Blank moves to `(r, c + 1)`.
    Right,
    /// Blank moves to `(r - 1, c)`.
    Up,
    /// Blank moves to `(r, c - 1)`.
    Left,
    /// Blank moves to `(r + 1, c)`.
    Down,
}

impl Slide {
    /// Fixed candidate order used by expansion.
    pub const ORDER: [Self; 4] = [Self::Right, Self::Up, Self::Left, Self::Down];

    /// Row and column delta applied to the blank.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Right => (0, 1),
            Self::Up => (-1, 0),
            Self::Left => (0, -1),
            Self::Down => (1, 0),
        }
    }

    /// The slide that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Left => Self::Right,
            Self::Down => Self::Up,
        }
    }

    /// Stable lowercase identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Up => "up",
            Self::Left => "left",
            Self::Down => "down",
        }
    }

    /// Destination of the blank from `(row, col)` on an `n` x `n` grid, or
    /// `None` if it would leave the grid.
    #[must_use]
    pub fn target(self, (row, col): (usize, usize), dimension: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.offset();
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < dimension && c < dimension).then_some((r, c))
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apply `slide` to `state`.
///
/// Returns `None` when the blank is on the edge the slide would cross.
#[must_use]
pub fn apply_slide(state: &GridState, slide: Slide) -> Option<GridState> {
    let (r, c) = state.blank();
    let (tr, tc) = slide.target((r, c), state.dimension())?;
    Some(state.swapped(r, c, tr, tc))
}

/// Every legal slide from `state`, in [`Slide::ORDER`], paired with its
/// resulting grid.
#[must_use]
pub fn legal_slides(state: &GridState) -> Vec<(Slide, GridState)> {
    Slide::ORDER
        .iter()
        .filter_map(|&slide| apply_slide(state, slide).map(|next| (slide, next)))
        .collect()
}

//! `Tile`: a single cell symbol in a grid.
//!
//! # Symbol alphabet
//!
//! A tile is one printable ASCII character (`'!'..='~'`). The symbol `'0'`
//! is reserved for the blank. Grids produced by [`Tile::from_index`] use
//! the ordered alphabet `0-9`, `A-Z`, `a-z` (62 symbols, blank first).
//!
//! # Canonical form
//!
//! The canonical representation is the single ASCII byte. Hashing and
//! identity encoding always use [`Tile::as_byte`].

use std::fmt;

/// Ordered alphabet used when tiles are generated from an index.
const INDEXED_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// One grid cell symbol.
///
/// Derives `Ord` so tiles sort by their ASCII byte (used for deterministic
/// symbol-set comparison).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(u8);

impl Tile {
    /// The blank cell.
    pub const BLANK: Self = Self(b'0');

    /// Construct from a character.
    ///
    /// Returns `None` unless `c` is a printable, non-space ASCII character.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_graphic() {
            u8::try_from(c).ok().map(Self)
        } else {
            None
        }
    }

    /// Construct the `index`-th symbol of the indexed alphabet.
    ///
    /// Index 0 is the blank. Returns `None` past the end of the alphabet.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        INDEXED_ALPHABET.get(index).copied().map(Self)
    }

    /// Whether this tile is the blank.
    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.0 == Self::BLANK.0
    }

    /// The raw ASCII byte.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    /// The tile as a character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile({})", self.as_char())
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

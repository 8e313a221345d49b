//! Operators module: the slide operator and reachability under slides.
//!
//! Depends on `carrier`. Does not import from `proof`.

pub mod parity;
pub mod slide;

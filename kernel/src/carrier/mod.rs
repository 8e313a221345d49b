//! Carrier module: `Tile` symbols and the immutable `GridState`.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod grid;
pub mod tile;

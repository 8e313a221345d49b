//! Tessera Harness: puzzle-level orchestration around the search crate.
//!
//! The harness loads grids, checks them against the configured tile count,
//! runs the search, and packages the result as a canonical JSON report
//! with a content digest. It does NOT implement search logic.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod fixtures;
pub mod loader;
pub mod render;
pub mod runner;

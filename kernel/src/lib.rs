//! Tessera Kernel: the deterministic core of the sliding-tile solver.
//!
//! # API Surface
//!
//! - [`carrier::grid::GridState`] -- immutable, validated n x n tile placement
//! - [`operators::slide::apply_slide`] -- move the blank one cell, producing a new grid
//! - [`operators::parity::is_reachable`] -- optional solvability pre-check
//! - [`proof::hash::grid_fingerprint`] -- canonical state fingerprint
//! - [`proof::canon::canonical_json_bytes`] -- canonical report serialization
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators`, `carrier` ← `proof`
//!
//! `operators` and `proof` never import each other.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;

//! Tessera Search: A* over sliding-tile grids with an auditable search graph.
//!
//! This crate depends only on `tessera_kernel`; it does NOT depend on
//! `tessera_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! tessera_kernel  ←  tessera_search  ←  tessera_harness
//! (grids, slides)    (frontier, nodes)   (loader, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`Heuristic`](heuristic::Heuristic) — misplaced tiles or Manhattan distance
//! - [`SearchNode`](node::SearchNode) — immutable node with a shared parent link
//! - [`BestFirstFrontier`](frontier::BestFirstFrontier) — `(score, creation_order)` min-heap
//! - [`SearchPolicy`](policy::SearchPolicy) — dedup, budget, and audit configuration
//! - [`SearchDriver`](search::SearchDriver) — the Ready/Running/Terminated state machine
//! - [`SearchGraph`](graph::SearchGraph) — expansion-event audit log

#![forbid(unsafe_code)]

pub mod error;
pub mod expand;
pub mod frontier;
pub mod graph;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod search;

//! Best-first frontier with optional best-depth duplicate detection.
//!
//! A `BinaryHeap` keyed on `(score, creation_order)` gives the same pop
//! order as appending children and stably re-sorting by score after every
//! expansion: lowest score first, earliest-inserted first among ties.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::rc::Rc;

use tessera_kernel::proof::hash::ContentHash;

use crate::node::{FrontierKey, SearchNode};
use crate::policy::DedupPolicy;

/// A frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest score first).
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: Rc<SearchNode>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// What happened to a node offered to the frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// The node is now in the frontier.
    Queued,
    /// A node for the same state at equal or lower depth was seen first.
    DuplicateSuppressed { best_depth: u32 },
}

/// Best-first frontier manager.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the best node
/// - Under [`DedupPolicy::BestDepth`], a map from state fingerprint to the
///   lowest depth at which that state has been queued
pub struct BestFirstFrontier {
    heap: BinaryHeap<FrontierEntry>,
    dedup: DedupPolicy,
    best_depth: HashMap<ContentHash, u32>,
    high_water: u64,
    stale_skipped: u64,
}

impl BestFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new(dedup: DedupPolicy) -> Self {
        Self {
            heap: BinaryHeap::new(),
            dedup,
            best_depth: HashMap::new(),
            high_water: 0,
            stale_skipped: 0,
        }
    }

    /// Offer a node to the frontier.
    pub fn push(&mut self, node: Rc<SearchNode>) -> PushOutcome {
        if self.dedup == DedupPolicy::BestDepth {
            match self.best_depth.get(&node.fingerprint) {
                Some(&best) if best <= node.depth => {
                    return PushOutcome::DuplicateSuppressed { best_depth: best };
                }
                _ => {
                    self.best_depth.insert(node.fingerprint.clone(), node.depth);
                }
            }
        }
        self.heap.push(FrontierEntry {
            key: Reverse(FrontierKey::from(node.as_ref())),
            node,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        PushOutcome::Queued
    }

    /// Pop the best (lowest score, then oldest) node.
    ///
    /// Under [`DedupPolicy::BestDepth`], entries superseded by a shallower
    /// node for the same state are dropped and counted, never returned.
    #[must_use]
    pub fn pop(&mut self) -> Option<Rc<SearchNode>> {
        while let Some(entry) = self.heap.pop() {
            if self.is_stale(&entry.node) {
                self.stale_skipped += 1;
                continue;
            }
            return Some(entry.node);
        }
        None
    }

    fn is_stale(&self, node: &SearchNode) -> bool {
        self.dedup == DedupPolicy::BestDepth
            && self
                .best_depth
                .get(&node.fingerprint)
                .is_some_and(|&best| best < node.depth)
    }

    /// Current frontier size (stale entries included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Entries dropped on pop because a shallower path was found later.
    #[must_use]
    pub fn stale_skipped(&self) -> u64 {
        self.stale_skipped
    }

    /// Distinct states seen under best-depth dedup (0 when dedup is off).
    #[must_use]
    pub fn distinct_states(&self) -> usize {
        self.best_depth.len()
    }
}

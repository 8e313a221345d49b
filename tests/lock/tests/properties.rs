//! Heuristic, expansion, and parity properties over enumerated state spaces.
//!
//! States are enumerated breadth-first from the goal, so every state tested
//! is reachable and the set is identical on every run.

use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use tessera_kernel::carrier::grid::GridState;
use tessera_kernel::carrier::tile::Tile;
use tessera_kernel::operators::parity::is_reachable;
use tessera_kernel::operators::slide::legal_slides;
use tessera_search::expand::expand;
use tessera_search::graph::TerminationReason;
use tessera_search::heuristic::{manhattan_distance, misplaced_tiles, Heuristic};
use tessera_search::node::SearchNode;
use tessera_search::policy::{DedupPolicy, SearchPolicy};
use tessera_search::search::search;

/// Up to `limit` states reachable from `start`, in BFS order.
fn reachable(start: &GridState, limit: usize) -> Vec<GridState> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::from([start.clone()]);
    seen.insert(start.clone());
    while let Some(state) = queue.pop_front() {
        order.push(state.clone());
        if order.len() == limit {
            break;
        }
        for (_, next) in legal_slides(&state) {
            if seen.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }
    order
}

/// Every permutation of `0..n*n` as a grid.
fn all_permutations(dimension: usize) -> Vec<GridState> {
    fn permute(prefix: &mut Vec<Tile>, rest: &mut Vec<Tile>, out: &mut Vec<Vec<Tile>>) {
        if rest.is_empty() {
            out.push(prefix.clone());
            return;
        }
        for i in 0..rest.len() {
            let tile = rest.remove(i);
            prefix.push(tile);
            permute(prefix, rest, out);
            prefix.pop();
            rest.insert(i, tile);
        }
    }
    let mut rest: Vec<Tile> = (0..dimension * dimension)
        .map(|i| Tile::from_index(i).unwrap())
        .collect();
    let mut out = Vec::new();
    permute(&mut Vec::new(), &mut rest, &mut out);
    out.into_iter()
        .map(|cells| GridState::from_cells(dimension, cells).unwrap())
        .collect()
}

#[test]
fn heuristics_vanish_on_identical_grids() {
    let goal = GridState::ordered(3).unwrap();
    for state in reachable(&goal, 2000) {
        for heuristic in Heuristic::ALL {
            assert_eq!(heuristic.estimate(&state, &state), 0, "{state:?}");
        }
    }
}

#[test]
fn manhattan_dominates_misplaced() {
    for dimension in [3, 4] {
        let goal = GridState::ordered(dimension).unwrap();
        for state in reachable(&goal, 3000) {
            assert!(
                manhattan_distance(&state, &goal) >= misplaced_tiles(&state, &goal),
                "{state:?}"
            );
        }
    }
}

#[test]
fn heuristics_are_zero_only_at_goal() {
    let goal = GridState::ordered(3).unwrap();
    for state in reachable(&goal, 2000).into_iter().skip(1) {
        for heuristic in Heuristic::ALL {
            assert!(heuristic.estimate(&state, &goal) > 0, "{state:?}");
        }
    }
}

#[test]
fn expansion_yields_two_to_four_children_one_deeper() {
    for dimension in [2, 3, 4] {
        let goal = GridState::ordered(dimension).unwrap();
        for state in reachable(&goal, 500) {
            let node = Rc::new(SearchNode::root(state, &goal, Heuristic::Manhattan));
            let mut next = 1;
            let children = expand(&node, &goal, Heuristic::Manhattan, &mut next);
            assert!((2..=4).contains(&children.len()), "{:?}", node.state);
            for child in &children {
                assert_eq!(child.depth, node.depth + 1);
                assert_ne!(child.state, node.state);
            }
        }
    }
}

#[test]
fn parity_agrees_with_exhaustive_search_on_2x2() {
    let goal = GridState::ordered(2).unwrap();
    let policy = SearchPolicy {
        dedup: DedupPolicy::BestDepth,
        ..SearchPolicy::default()
    };
    let mut solvable = 0;
    for initial in all_permutations(2) {
        let result = search(&initial, &goal, Heuristic::Manhattan, &policy).unwrap();
        let reachable = is_reachable(&initial, &goal);
        assert_eq!(result.is_solved(), reachable, "{initial:?}");
        if !reachable {
            assert_eq!(
                result.termination_reason(),
                TerminationReason::FrontierExhausted
            );
        }
        solvable += usize::from(reachable);
    }
    assert_eq!(solvable, 12);
}

#[test]
fn parity_agrees_with_reachability_on_3x3_sample() {
    let goal = GridState::ordered(3).unwrap();
    let near: HashSet<GridState> = reachable(&goal, 5000).into_iter().collect();
    for state in &near {
        assert!(is_reachable(state, &goal), "{state:?}");
    }
    // Swapping two non-blank tiles flips the class.
    for state in near.iter().take(200) {
        let (br, bc) = state.blank();
        let cells: Vec<(usize, usize)> = (0..3)
            .flat_map(|r| (0..3).map(move |c| (r, c)))
            .filter(|&p| p != (br, bc))
            .take(2)
            .collect();
        let swapped = state.swapped(cells[0].0, cells[0].1, cells[1].0, cells[1].1);
        assert!(!is_reachable(&swapped, &goal), "{swapped:?}");
    }
}

#[test]
fn optimal_depth_matches_bfs_distance() {
    let goal = GridState::ordered(3).unwrap();
    // BFS order is non-decreasing in distance; recompute distance per layer.
    let mut distance = std::collections::HashMap::from([(goal.clone(), 0u32)]);
    for state in reachable(&goal, 400) {
        let d = distance[&state];
        for (_, next) in legal_slides(&state) {
            distance.entry(next).or_insert(d + 1);
        }
        for heuristic in Heuristic::ALL {
            let result = search(&state, &goal, heuristic, &SearchPolicy::default()).unwrap();
            assert_eq!(result.solution_depth(), Some(d), "{state:?} / {heuristic}");
        }
    }
}

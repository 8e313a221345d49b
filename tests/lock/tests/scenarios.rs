//! End-to-end solve scenarios over the built-in fixtures.

use tessera_harness::fixtures::{self, Fixture};
use tessera_harness::runner::run_puzzle;
use tessera_kernel::operators::slide::apply_slide;
use tessera_search::graph::TerminationReason;
use tessera_search::heuristic::Heuristic;
use tessera_search::policy::{DedupPolicy, SearchPolicy};
use tessera_search::search::search;

fn solvable() -> impl Iterator<Item = Fixture> {
    fixtures::ALL.into_iter().filter(|f| f.optimal_depth.is_some())
}

#[test]
fn every_solvable_fixture_reaches_optimal_depth_under_both_heuristics() {
    for fixture in solvable() {
        let (initial, goal) = fixture.grids().unwrap();
        for heuristic in Heuristic::ALL {
            let result = search(&initial, &goal, heuristic, &SearchPolicy::default()).unwrap();
            assert_eq!(
                result.solution_depth(),
                fixture.optimal_depth,
                "{} / {heuristic}",
                fixture.name
            );
        }
    }
}

#[test]
fn solution_paths_replay_from_initial_to_goal() {
    for fixture in solvable() {
        let (initial, goal) = fixture.grids().unwrap();
        let result = search(&initial, &goal, Heuristic::Manhattan, &SearchPolicy::default())
            .unwrap();
        let depth = result.solution_depth().unwrap();
        assert_eq!(result.path.len(), 1 + depth as usize, "{}", fixture.name);
        assert_eq!(result.moves.len(), depth as usize);
        assert_eq!(result.path.first(), Some(&initial));
        assert_eq!(result.path.last(), Some(&goal));

        let mut state = initial.clone();
        for (slide, expected) in result.moves.iter().zip(&result.path[1..]) {
            state = apply_slide(&state, *slide).unwrap();
            assert_eq!(&state, expected, "{}", fixture.name);
        }
    }
}

#[test]
fn classic_fixture_counts_are_stable() {
    let (initial, goal) = fixtures::CLASSIC.grids().unwrap();
    for heuristic in Heuristic::ALL {
        let result = search(&initial, &goal, heuristic, &SearchPolicy::default()).unwrap();
        // Root, four children of the centre blank, three children of the
        // bottom-centre blank; the goal is the third pop.
        assert_eq!(result.nodes_generated(), 8, "{heuristic}");
        assert_eq!(result.nodes_expanded(), 3, "{heuristic}");
    }
}

#[test]
fn identity_fixture_solves_on_first_pop() {
    let (initial, goal) = fixtures::IDENTITY.grids().unwrap();
    for heuristic in Heuristic::ALL {
        let result = search(&initial, &goal, heuristic, &SearchPolicy::default()).unwrap();
        assert!(result.is_solved());
        assert_eq!(result.nodes_generated(), 1);
        assert_eq!(result.nodes_expanded(), 1);
        assert_eq!(result.path.len(), 1);
    }
}

#[test]
fn manhattan_expands_no_more_than_misplaced_on_longer_instance() {
    let (initial, goal) = fixtures::EIGHT_SLIDE.grids().unwrap();
    let policy = SearchPolicy::default();
    let misplaced = search(&initial, &goal, Heuristic::MisplacedTiles, &policy).unwrap();
    let manhattan = search(&initial, &goal, Heuristic::Manhattan, &policy).unwrap();
    assert!(manhattan.nodes_expanded() <= misplaced.nodes_expanded());
}

#[test]
fn unsolvable_fixture_exhausts_under_best_depth() {
    let (initial, goal) = fixtures::UNSOLVABLE_2X2.grids().unwrap();
    let policy = SearchPolicy {
        dedup: DedupPolicy::BestDepth,
        ..SearchPolicy::default()
    };
    for heuristic in Heuristic::ALL {
        let result = search(&initial, &goal, heuristic, &policy).unwrap();
        assert_eq!(
            result.termination_reason(),
            TerminationReason::FrontierExhausted,
            "{heuristic}"
        );
        assert!(result.path.is_empty());
    }
}

#[test]
fn unsolvable_fixture_stops_at_budget_without_dedup() {
    let (initial, goal) = fixtures::UNSOLVABLE_2X2.grids().unwrap();
    let policy = SearchPolicy {
        max_expansions: Some(500),
        ..SearchPolicy::default()
    };
    let result = search(&initial, &goal, Heuristic::MisplacedTiles, &policy).unwrap();
    assert_eq!(
        result.termination_reason(),
        TerminationReason::ExpansionBudgetExceeded { limit: 500 }
    );
    assert_eq!(result.nodes_expanded(), 500);
}

#[test]
fn parity_check_short_circuits_unsolvable_fixture() {
    let fixture = fixtures::UNSOLVABLE_2X2;
    let (initial, goal) = fixture.grids().unwrap();
    let mut config = fixture.config();
    config.policy.parity_precheck = true;
    let report = run_puzzle(&initial, &goal, &config).unwrap();
    assert_eq!(
        report.result.termination_reason(),
        TerminationReason::ParityMismatch
    );
    assert_eq!(report.result.nodes_expanded(), 0);
}

#[test]
fn best_depth_never_expands_more_than_baseline() {
    for fixture in solvable() {
        let (initial, goal) = fixture.grids().unwrap();
        for heuristic in Heuristic::ALL {
            let baseline =
                search(&initial, &goal, heuristic, &SearchPolicy::default()).unwrap();
            let dedup = search(
                &initial,
                &goal,
                heuristic,
                &SearchPolicy {
                    dedup: DedupPolicy::BestDepth,
                    ..SearchPolicy::default()
                },
            )
            .unwrap();
            assert_eq!(dedup.solution_depth(), baseline.solution_depth());
            assert!(
                dedup.nodes_expanded() <= baseline.nodes_expanded(),
                "{} / {heuristic}",
                fixture.name
            );
        }
    }
}

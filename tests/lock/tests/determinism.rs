//! In-process determinism: repeated runs produce identical reports.

use tessera_harness::fixtures;
use tessera_harness::runner::run_puzzle;
use tessera_kernel::proof::canon::canonical_json_bytes;
use tessera_search::heuristic::Heuristic;
use tessera_search::policy::DedupPolicy;

const N: usize = 5;

#[test]
fn report_bytes_identical_across_runs() {
    for fixture in fixtures::ALL.into_iter().filter(|f| f.optimal_depth.is_some()) {
        let (initial, goal) = fixture.grids().unwrap();
        for heuristic in Heuristic::ALL {
            let mut config = fixture.config().with_heuristic(heuristic);
            config.policy.record_expansions = true;
            let first = run_puzzle(&initial, &goal, &config).unwrap();
            for _ in 1..N {
                let again = run_puzzle(&initial, &goal, &config).unwrap();
                assert_eq!(again.report_bytes, first.report_bytes, "{}", fixture.name);
                assert_eq!(again.report_digest, first.report_digest);
                assert_eq!(again.result.path, first.result.path);
            }
        }
    }
}

#[test]
fn report_bytes_are_already_canonical() {
    let (initial, goal) = fixtures::EIGHT_SLIDE.grids().unwrap();
    let mut config = fixtures::EIGHT_SLIDE.config();
    config.policy.record_expansions = true;
    config.policy.dedup = DedupPolicy::BestDepth;
    let report = run_puzzle(&initial, &goal, &config).unwrap();
    let reparsed: serde_json::Value = serde_json::from_slice(&report.report_bytes).unwrap();
    assert_eq!(canonical_json_bytes(&reparsed).unwrap(), report.report_bytes);
}

#[test]
fn recorded_events_cover_every_expansion() {
    let (initial, goal) = fixtures::EIGHT_SLIDE.grids().unwrap();
    let mut config = fixtures::EIGHT_SLIDE.config();
    config.policy.record_expansions = true;
    let report = run_puzzle(&initial, &goal, &config).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&report.report_bytes).unwrap();
    let events = parsed["search_graph"]["expansions"].as_array().unwrap();
    assert_eq!(
        events.len() as u64,
        parsed["search_graph"]["metadata"]["nodes_expanded"]
            .as_u64()
            .unwrap()
    );
    assert_eq!(events.last().unwrap()["is_goal"], true);
}

#[test]
fn policy_is_echoed_in_report() {
    let (initial, goal) = fixtures::UNSOLVABLE_2X2.grids().unwrap();
    let mut config = fixtures::UNSOLVABLE_2X2.config();
    config.policy.dedup = DedupPolicy::BestDepth;
    config.policy.max_expansions = Some(1000);
    let report = run_puzzle(&initial, &goal, &config).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&report.report_bytes).unwrap();
    let meta = &parsed["search_graph"]["metadata"];
    assert_eq!(meta["dedup"], "best_depth");
    assert_eq!(meta["max_expansions"], 1000);
    assert_eq!(meta["parity_precheck"], false);
    assert_eq!(meta["termination_reason"]["type"], "frontier_exhausted");
    assert_eq!(meta["dimension"], 2);
}

//! File-based runs: loader output feeds the same search as in-memory grids.

use tessera_harness::fixtures;
use tessera_harness::loader::LoadError;
use tessera_harness::runner::{run_files, run_puzzle, RunError};
use tessera_kernel::carrier::grid::GridError;

#[test]
fn file_run_matches_in_memory_run_for_every_fixture() {
    let dir = tempfile::tempdir().unwrap();
    for fixture in fixtures::ALL.into_iter().filter(|f| f.optimal_depth.is_some()) {
        let initial_path = dir.path().join(format!("{}_initial.txt", fixture.name));
        let goal_path = dir.path().join(format!("{}_goal.txt", fixture.name));
        std::fs::write(&initial_path, fixture.initial).unwrap();
        std::fs::write(&goal_path, fixture.goal).unwrap();

        let config = fixture.config();
        let from_files = run_files(&initial_path, &goal_path, &config).unwrap();
        let (initial, goal) = fixture.grids().unwrap();
        let in_memory = run_puzzle(&initial, &goal, &config).unwrap();
        assert_eq!(from_files.report_digest, in_memory.report_digest, "{}", fixture.name);
    }
}

#[test]
fn windows_line_endings_and_trailing_blank_lines_load() {
    let dir = tempfile::tempdir().unwrap();
    let initial = dir.path().join("initial.txt");
    let goal = dir.path().join("goal.txt");
    std::fs::write(&initial, "1 2 3\r\n4 0 6\r\n7 5 8\r\n\r\n").unwrap();
    std::fs::write(&goal, fixtures::CLASSIC.goal).unwrap();
    let report = run_files(&initial, &goal, &fixtures::CLASSIC.config()).unwrap();
    assert_eq!(report.result.solution_depth(), Some(2));
}

#[test]
fn malformed_file_is_rejected_before_search() {
    let dir = tempfile::tempdir().unwrap();
    let initial = dir.path().join("initial.txt");
    let goal = dir.path().join("goal.txt");
    std::fs::write(&initial, "1 2 3\n4 0 6\n7 5 5\n").unwrap();
    std::fs::write(&goal, fixtures::CLASSIC.goal).unwrap();
    let err = run_files(&initial, &goal, &fixtures::CLASSIC.config()).unwrap_err();
    assert_eq!(
        err,
        RunError::Load(LoadError::Grid(GridError::DuplicateSymbol { symbol: '5' }))
    );
}

#[test]
fn mismatched_symbol_sets_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let initial = dir.path().join("initial.txt");
    let goal = dir.path().join("goal.txt");
    std::fs::write(&initial, "1 2 3\n4 0 6\n7 5 9\n").unwrap();
    std::fs::write(&goal, fixtures::CLASSIC.goal).unwrap();
    let err = run_files(&initial, &goal, &fixtures::CLASSIC.config()).unwrap_err();
    assert!(matches!(err, RunError::Search(_)), "got {err:?}");
}

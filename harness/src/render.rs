//! Console rendering of run reports.

use std::fmt::Write as _;

use tessera_search::graph::TerminationReason;
use tessera_search::heuristic::Heuristic;

use crate::runner::RunReport;

const RULE: &str = "=====================";

/// Banner printed before each heuristic's run.
#[must_use]
pub fn heuristic_banner(heuristic: Heuristic) -> String {
    format!("Using heuristic {}: ({})", heuristic.code(), heuristic.label())
}

/// Render a report as console text.
///
/// A solved run prints the full path, one grid per block; any other outcome
/// prints a one-line reason. Both end with the node counters and a rule.
#[must_use]
pub fn render_report(report: &RunReport) -> String {
    let result = &report.result;
    let mut out = String::new();
    match result.termination_reason() {
        TerminationReason::GoalReached { .. } => {
            out.push_str("Goal State Reached!!!\n");
            out.push_str("===   PATH   ===\n");
            for grid in &result.path {
                let _ = writeln!(out, "{grid}");
                out.push('\n');
            }
        }
        TerminationReason::FrontierExhausted => {
            out.push_str("No solution found: frontier exhausted\n");
        }
        TerminationReason::ExpansionBudgetExceeded { limit } => {
            let _ = writeln!(out, "No solution found: expansion budget of {limit} reached");
        }
        TerminationReason::ParityMismatch => {
            out.push_str("No solution found: goal is in the other parity class\n");
        }
    }
    let _ = writeln!(out, "No of Nodes Generated : {}", result.nodes_generated());
    let _ = writeln!(out, "No of Nodes Expanded : {}", result.nodes_expanded());
    out.push_str(RULE);
    out.push('\n');
    out
}

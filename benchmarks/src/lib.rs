//! Shared helpers for tessera benchmark suites.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tessera_harness::fixtures::Fixture;
use tessera_kernel::carrier::grid::GridState;
use tessera_kernel::operators::slide::{legal_slides, Slide};

/// Parse a fixture's grids.
///
/// # Panics
///
/// Panics if the fixture is malformed. Benchmark setup failures are fatal.
#[must_use]
pub fn fixture_grids(fixture: &Fixture) -> (GridState, GridState) {
    fixture.grids().expect("built-in fixture parses")
}

/// Walk `steps` slides away from the ordered `dimension` grid, never undoing
/// the previous slide. The walk is a fixed function of `seed`.
///
/// # Panics
///
/// Panics if `dimension` is outside the supported range.
#[must_use]
pub fn scrambled(dimension: usize, steps: usize, seed: u64) -> GridState {
    let mut state = GridState::ordered(dimension).expect("supported dimension");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut previous: Option<Slide> = None;
    for _ in 0..steps {
        let mut options: Vec<(Slide, GridState)> = legal_slides(&state)
            .into_iter()
            .filter(|(slide, _)| previous != Some(slide.inverse()))
            .collect();
        let pick = rng.gen_range(0..options.len());
        let (slide, next) = options.swap_remove(pick);
        previous = Some(slide);
        state = next;
    }
    state
}

//! Monte Carlo sampling of the turn transition matrix.
//!
//! Every square is used as a starting point for the same number of turns.
//! Start squares are visited in order and each start runs all its samples
//! before the next, so a seeded generator gives the same matrix every time.

use fastrand::Rng;
use tracing::debug;

use crate::constants::BOARD_SIZE;
use crate::matrix::CountMatrix;
use crate::movement::take_turn;

/// Sample `samples` turns from each square and count where they end.
pub fn sample_transitions(samples: usize, rng: &mut Rng) -> CountMatrix {
    let mut counts = CountMatrix::new(BOARD_SIZE);

    for start in 0..BOARD_SIZE {
        for _ in 0..samples {
            let end = take_turn(start, rng);
            counts.increment(start, end);
        }
        debug!(start, samples, "sampled start square");
    }

    counts
}

//! The full estimation pipeline: sample, normalize, rank, sort.

use fastrand::Rng;
use tracing::{debug, info};

use crate::board::square_name;
use crate::config::SimConfig;
use crate::matrix::{CountMatrix, ProbabilityMatrix, normalize};
use crate::pagerank::{page_rank, residual, step};
use crate::report::{RankEntry, rank_squares};
use crate::sampler::sample_transitions;

/// Every intermediate product of one run.
#[derive(Clone, Debug)]
pub struct Estimate {
    pub counts: CountMatrix,
    pub matrix: ProbabilityMatrix,
    pub ranks: Vec<f64>,
    pub entries: Vec<RankEntry>,
}

/// Sample turns and normalize them, stopping before power iteration.
pub fn transition_matrix(cfg: &SimConfig, rng: &mut Rng) -> (CountMatrix, ProbabilityMatrix) {
    info!(samples = cfg.samples, "sampling transitions");
    let counts = sample_transitions(cfg.samples, rng);

    let matrix = normalize(&counts);
    debug!(total = counts.total(), "normalized transition matrix");
    (counts, matrix)
}

/// Run the pipeline with the given parameters and random source.
pub fn estimate(cfg: &SimConfig, rng: &mut Rng) -> Estimate {
    let (counts, matrix) = transition_matrix(cfg, rng);

    info!(iterations = cfg.iterations, damping = cfg.damping, "running power iteration");
    let ranks = page_rank(&matrix, cfg.iterations, cfg.damping);
    debug!(
        residual = residual(&ranks, &step(&matrix, &ranks, cfg.damping)),
        mass = ranks.iter().sum::<f64>(),
        "rank vector"
    );

    let entries = rank_squares(&ranks);
    if let Some(top) = entries.first() {
        info!(square = top.square, name = %square_name(top.square), rank = top.rank, "most visited");
    }

    Estimate {
        counts,
        matrix,
        ranks,
        entries,
    }
}

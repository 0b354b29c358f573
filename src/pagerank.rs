//! PageRank power iteration over a transition matrix.
//!
//! Each step computes a fresh rank vector from the previous one:
//!
//! ```text
//! new[i] = (1 - d) / N + d * sum_j matrix[j][i] * old[j]
//! ```
//!
//! Contribution flows from row `j` (a start square) into column `i` (an end
//! square), weighted by `j`'s current rank. The iteration count is a fixed
//! budget; convergence is not checked. Zero rows leak rank, so the result is
//! not renormalized and may sum to less than 1.

use crate::matrix::ProbabilityMatrix;

/// Run `iterations` power-iteration steps from the uniform vector.
pub fn page_rank(matrix: &ProbabilityMatrix, iterations: usize, damping: f64) -> Vec<f64> {
    let n = matrix.size();
    let mut rank = vec![1.0 / n as f64; n];

    for _ in 0..iterations {
        rank = step(matrix, &rank, damping);
    }

    rank
}

/// One power-iteration step. Returns a new vector; `rank` is left untouched.
pub fn step(matrix: &ProbabilityMatrix, rank: &[f64], damping: f64) -> Vec<f64> {
    let n = matrix.size();
    let teleport = (1.0 - damping) / n as f64;

    (0..n)
        .map(|i| {
            let inflow: f64 = (0..n).map(|j| matrix.get(j, i) * rank[j]).sum();
            teleport + damping * inflow
        })
        .collect()
}

/// L1 distance between two rank vectors.
pub fn residual(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

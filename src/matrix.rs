//! Square matrices for transition counts and probabilities.
//!
//! Both matrices are stored row-major in a flat `Vec`. Row `i` describes
//! turns that start on square `i`; column `j` is where they end.

use std::fmt;

/// Transition counts: cell `(i, j)` is the number of sampled turns from `i` that ended on `j`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountMatrix {
    n: usize,
    cells: Vec<u32>,
}

impl CountMatrix {
    /// An `n x n` matrix of zeros.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![0; n * n],
        }
    }

    /// Build from explicit rows. Panics if the rows are not square.
    pub fn from_rows(rows: &[Vec<u32>]) -> Self {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for row in rows {
            assert_eq!(row.len(), n, "count matrix must be square");
            cells.extend_from_slice(row);
        }
        Self { n, cells }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Record one observed transition `from -> to`.
    #[inline]
    pub fn increment(&mut self, from: usize, to: usize) {
        self.cells[from * self.n + to] += 1;
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> u32 {
        self.cells[from * self.n + to]
    }

    pub fn row(&self, i: usize) -> &[u32] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    pub fn row_sum(&self, i: usize) -> u64 {
        self.row(i).iter().map(|&c| c as u64).sum()
    }

    /// Total number of recorded transitions.
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&c| c as u64).sum()
    }
}

/// Transition probabilities: each row sums to 1, or is all zeros if it had no samples.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl ProbabilityMatrix {
    /// An `n x n` matrix of zeros.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            cells: vec![0.0; n * n],
        }
    }

    /// The `n x n` identity: every square transitions only to itself.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m.cells[i * n + i] = 1.0;
        }
        m
    }

    /// Build from explicit rows. Panics if the rows are not square.
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for row in rows {
            assert_eq!(row.len(), n, "probability matrix must be square");
            cells.extend_from_slice(row);
        }
        Self { n, cells }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.cells[from * self.n + to]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }
}

impl fmt::Display for ProbabilityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n {
            let row: Vec<String> = self.row(i).iter().map(|p| format!("{p:.3}")).collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

/// Divide each row of `counts` by its sum.
///
/// A row with no samples becomes a row of zeros rather than a uniform or
/// undefined distribution.
pub fn normalize(counts: &CountMatrix) -> ProbabilityMatrix {
    let n = counts.size();
    let mut out = ProbabilityMatrix::zeros(n);

    for i in 0..n {
        let sum = counts.row_sum(i);
        if sum == 0 {
            continue;
        }
        for (j, &c) in counts.row(i).iter().enumerate() {
            out.cells[i * n + j] = c as f64 / sum as f64;
        }
    }

    out
}

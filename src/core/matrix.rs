// matrix.rs - Symmetric distance matrix construction

use crate::core::distance::{Distance, DistanceEngine};
use crate::data::SampleTable;
use crate::error::{CgmlstError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::Instant;

/// Square, symmetric matrix of pairwise distances with a zero diagonal.
///
/// Stored row-major in one buffer: cell `(row, col)` lives at `row * size + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<Distance>,
}

impl DistanceMatrix {
    /// Allocate an all-zero `size × size` matrix, failing instead of aborting on OOM
    pub fn zeroed(size: usize) -> Result<Self> {
        let cells = size.checked_mul(size).ok_or(CgmlstError::Allocation { kb: usize::MAX })?;
        let mut values = Vec::new();
        values.try_reserve_exact(cells).map_err(|_| CgmlstError::Allocation {
            kb: cells.saturating_mul(std::mem::size_of::<Distance>()) >> 10,
        })?;
        values.resize(cells, 0);
        Ok(Self { size, values })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Distance {
        self.values[row * self.size + col]
    }

    pub fn row(&self, row: usize) -> &[Distance] {
        &self.values[row * self.size..(row + 1) * self.size]
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|j| (0..j).all(|i| self.get(i, j) == self.get(j, i)))
    }

    /// Copy the lower triangle onto the upper one
    fn mirror_lower(&mut self) {
        let n = self.size;
        for j in 1..n {
            for i in 0..j {
                self.values[i * n + j] = self.values[j * n + i];
            }
        }
    }
}

fn progress_bar(rows: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(rows as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows ({percent}%) ETA: {eta}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}

/// Calculate the full distance matrix for a table.
///
/// Only pairs `i < j` are compared, `n·(n-1)/2` engine calls in total. Rows
/// are processed in parallel on the current rayon pool; each task fills the
/// lower-triangle part of its own row, and the upper triangle is mirrored
/// after all rows are done.
pub fn calculate_distance_matrix(
    table: &SampleTable,
    engine: &DistanceEngine,
    quiet: bool,
) -> Result<DistanceMatrix> {
    let n = table.len();
    let mut matrix = DistanceMatrix::zeroed(n)?;
    if n < 2 {
        return Ok(matrix);
    }

    let start = Instant::now();
    let total_comparisons = n * (n - 1) / 2;
    log::info!(
        "🔄 Computing distance matrix ({} × {} = {} comparisons)...",
        n,
        n,
        total_comparisons
    );

    let pb = progress_bar(n, quiet);
    let samples = table.samples();

    matrix
        .values
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(j, row)| {
            let current = &samples[j].alleles;
            for (i, cell) in row.iter_mut().enumerate().take(j) {
                *cell = engine.distance(current, &samples[i].alleles);
            }
            pb.inc(1);
        });

    pb.finish_and_clear();
    matrix.mirror_lower();

    log::info!(
        "✅ Distance matrix computed in {:.2}s",
        start.elapsed().as_secs_f64()
    );
    Ok(matrix)
}

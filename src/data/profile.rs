// profile.rs - Allelic profile and sample table data structures

use crate::encoding::{Allele, MISSING};
use rayon::prelude::*;

/// Missing-data summary for a loaded table
#[derive(Debug, Clone, PartialEq)]
pub struct TableStatistics {
    pub total_cells: usize,
    pub missing_cells: usize,
    pub complete_samples: usize,
}

impl TableStatistics {
    pub fn missing_percent(&self) -> f64 {
        if self.total_cells == 0 {
            0.0
        } else {
            100.0 * self.missing_cells as f64 / self.total_cells as f64
        }
    }
}

/// Represents a single sample's allelic profile
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub id: String,
    pub alleles: Vec<Allele>,
}

/// All samples of one run. Every profile has exactly `ncol` alleles.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    samples: Vec<Sample>,
    ncol: usize,
}

impl SampleTable {
    /// Create an empty table for profiles of `ncol` loci
    pub fn new(ncol: usize) -> Self {
        Self {
            samples: Vec::new(),
            ncol,
        }
    }

    /// Append a profile. Callers check the width; the loader reports the line.
    pub(crate) fn push(&mut self, sample: Sample) {
        debug_assert_eq!(sample.alleles.len(), self.ncol);
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of loci per profile
    pub fn ncol(&self) -> usize {
        self.ncol
    }

    pub fn sample_ids(&self) -> Vec<&str> {
        self.samples.iter().map(|s| s.id.as_str()).collect()
    }

    /// Count missing calls across the table
    pub fn statistics(&self) -> TableStatistics {
        let missing_per_sample: Vec<usize> = self
            .samples
            .par_iter()
            .map(|sample| sample.alleles.iter().filter(|&&a| a == MISSING).count())
            .collect();

        TableStatistics {
            total_cells: self.samples.len() * self.ncol,
            missing_cells: missing_per_sample.iter().sum(),
            complete_samples: missing_per_sample.iter().filter(|&&m| m == 0).count(),
        }
    }

    /// Log dimensions and missing data
    pub fn log_statistics(&self) {
        let stats = self.statistics();
        log::info!(
            "📏 Dimensions: {} samples × {} loci = {} total cells",
            self.len(),
            self.ncol,
            stats.total_cells
        );
        log::info!(
            "📊 Missing data: {:.2}% ({} cells)",
            stats.missing_percent(),
            stats.missing_cells
        );
        if !self.is_empty() {
            log::info!(
                "✅ Complete samples: {} ({:.1}%)",
                stats.complete_samples,
                100.0 * stats.complete_samples as f64 / self.len() as f64
            );
        }
        if stats.missing_percent() > 30.0 {
            log::info!(
                "🔴 Very high missing data ({:.2}%), distances will be based on few loci",
                stats.missing_percent()
            );
        }
    }
}

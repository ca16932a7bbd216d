// lib.rs - cgmlst-dists library root

//! # cgmlst-dists - Pairwise cgMLST distance matrix from allele call tables
//!
//! Reads a table of core-genome MLST allele calls (one sample per row, one
//! locus per column) and counts, for every pair of samples, the loci where
//! both samples have a call and the calls differ.
//!
//! ## Features
//!
//! - **QC-code tolerant**: `LNF`, `NIPH`, `ASM`, `PLOT3`... count as missing,
//!   `INF-12` counts as allele 12
//! - **Hashed profiles**: hexadecimal allele digests instead of integers
//! - **Saturating distance**: stop counting at a cutoff to save time
//! - **Parallel**: rows are computed on a rayon thread pool
//! - **Triangular output**: lower, upper or full matrix, tab or comma separated
//!
//! ## Basic Usage
//!
//! ```rust
//! use cgmlst_dists::prelude::*;
//!
//! let calls = "ID\tg1\tg2\tg3\nA\t1\t2\t3\nB\t1\t5\t3\nC\tLNF\t2\t9\n";
//! let table = SampleTable::from_tsv_reader(calls.as_bytes(), LoadOptions::default())?;
//!
//! let engine = DistanceEngine::default();
//! let matrix = calculate_distance_matrix(&table, &engine, true)?;
//! assert_eq!(matrix.get(1, 2), 2);
//!
//! let mut out = Vec::new();
//! write_matrix(&mut out, &table.sample_ids(), &matrix, Layout::Full, Separator::Tab)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod encoding;
pub mod error;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, Config, RunSettings};
    pub use crate::core::{allele_distance, calculate_distance_matrix, Distance};
    pub use crate::core::{DistanceEngine, DistanceMatrix};
    pub use crate::data::{LoadOptions, Sample, SampleTable};
    pub use crate::encoding::{Allele, AlleleEncoder, AlleleEncoding, MISSING};
    pub use crate::error::{CgmlstError, Result};
    pub use crate::output::{write_matrix, write_matrix_to, Layout, Separator};
}

// Re-export main types at the root level for convenience
pub use crate::core::{DistanceEngine, DistanceMatrix};
pub use crate::data::SampleTable;
pub use crate::error::{CgmlstError, Result};

/// Program name, also the first token of the output header
pub const EXENAME: &str = "cgmlst-dists";

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("{} {}", EXENAME, VERSION)
}

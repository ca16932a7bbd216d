// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::Distance;
use crate::encoding::AlleleEncoding;
use crate::error::{CgmlstError, Result};
use crate::output::{Layout, Separator};
use std::path::PathBuf;

/// Everything the pipeline needs, resolved from CLI and config
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub layout: Layout,
    pub separator: Separator,
    pub encoding: AlleleEncoding,
    pub max_distance: Distance,
    pub threads: Option<usize>,
    pub max_samples: Option<usize>,
    pub quiet: bool,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<RunSettings> {
    let input = args
        .input
        .as_ref()
        .ok_or_else(|| CgmlstError::InvalidArgument("Please provide an allele call table".to_string()))?;

    let layout = Layout::from_code(args.mode)?;

    if args.threads == Some(0) {
        return Err(CgmlstError::InvalidArgument(
            "Number of threads must be at least 1".to_string(),
        ));
    }
    if args.max_samples == Some(0) {
        return Err(CgmlstError::InvalidArgument(
            "--max-samples must be at least 1".to_string(),
        ));
    }

    Ok(RunSettings {
        input: PathBuf::from(input),
        output: args.output.as_ref().map(PathBuf::from),
        layout,
        separator: Separator::from_csv_flag(args.csv),
        encoding: AlleleEncoding::from_hash_flag(args.hashes),
        // no pair can differ at more loci than a Distance holds
        max_distance: args
            .max_distance
            .map_or(Distance::MAX, |x| Distance::try_from(x).unwrap_or(Distance::MAX)),
        threads: args.threads,
        max_samples: args.max_samples,
        quiet: args.quiet,
    })
}

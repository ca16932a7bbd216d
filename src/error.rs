// error.rs - Error types shared by the whole pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CgmlstError {
    #[error("can not open file '{}'", path.display())]
    Open {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("failed to read allele table: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to write distance matrix to {target}: {source}")]
    Write {
        #[source]
        source: std::io::Error,
        target: String,
    },

    #[error("allele table is empty")]
    EmptyInput,

    #[error("header line has no locus columns")]
    NoLoci,

    #[error("empty sample ID at line {line}")]
    EmptySampleId { line: u64 },

    #[error("line {line} has {found} allele columns, expected {expected}")]
    ColumnCount {
        line: u64,
        found: usize,
        expected: usize,
    },

    #[error("more than {limit} samples in input (raise --max-samples)")]
    TooManySamples { limit: usize },

    #[error("could not allocate {kb} kb RAM for the distance matrix")]
    Allocation { kb: usize },

    #[error("failed to start thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, CgmlstError>;

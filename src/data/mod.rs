// mod.rs - Data structures module

pub mod loaders;
pub mod profile;

// Re-export main types for convenience
pub use loaders::LoadOptions;
pub use profile::{Sample, SampleTable, TableStatistics};

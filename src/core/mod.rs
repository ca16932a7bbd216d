// mod.rs - Core logic module

pub mod distance;
pub mod matrix;

// Re-export main types for convenience
pub use distance::{allele_distance, Distance, DistanceEngine};
pub use matrix::{calculate_distance_matrix, DistanceMatrix};

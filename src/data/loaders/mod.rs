// mod.rs - Allele table loaders

pub mod tsv;

pub use tsv::LoadOptions;

// config.rs - Configuration file support

use crate::error::{CgmlstError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    // Input/Output
    pub input: Option<String>,
    pub output: Option<String>,

    // Core settings
    pub mode: Option<u8>,
    pub max_distance: Option<u64>,
    pub hashes: Option<bool>,
    pub csv: Option<bool>,

    // Performance / limits
    pub threads: Option<usize>,
    pub max_samples: Option<usize>,

    // Flags
    pub quiet: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CgmlstError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CgmlstError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            CgmlstError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# cgmlst-dists.toml - Configuration file for cgmlst-dists
# Command line arguments override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Allele call table (tab separated, header line first)
input = "/path/to/results_alleles.tsv"

# Write the matrix here instead of stdout
# output = "distances.tsv"

# =============================================================================
# CORE SETTINGS
# =============================================================================

# Output layout: 1 = lower triangle, 2 = upper triangle, 3 = full
mode = 3

# Stop counting beyond this distance (omit for unbounded)
# max_distance = 50

# Allele calls are hexadecimal hashes instead of integers
hashes = false

# Use comma instead of tab in output
csv = false

# =============================================================================
# PERFORMANCE / LIMITS
# =============================================================================

# Number of threads (omit for auto-detection)
# threads = 8

# Refuse inputs with more samples than this
# max_samples = 100000

# =============================================================================
# FLAGS
# =============================================================================

# Do not print progress information
quiet = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config = Config::from_toml(&Config::generate_sample()).unwrap();
        assert_eq!(config.input.as_deref(), Some("/path/to/results_alleles.tsv"));
        assert_eq!(config.mode, Some(3));
        assert_eq!(config.hashes, Some(false));
        assert_eq!(config.max_distance, None);
        assert_eq!(config.threads, None);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_toml("modee = 3\n").unwrap_err();
        assert!(matches!(err, CgmlstError::Config(_)));
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(Config::from_toml("").unwrap(), Config::new());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/cgmlst-dists.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}

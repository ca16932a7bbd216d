// merge.rs - Merge configuration file with CLI arguments

use crate::cli::args::DEFAULT_MODE;
use crate::cli::{Args, Config};
use crate::error::Result;

impl Args {
    /// Merge with configuration from file.
    /// CLI arguments take precedence over config file values.
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.input.is_none() {
            self.input = config.input;
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Core settings (only override defaults, not explicit CLI values)
        if self.mode == DEFAULT_MODE {
            if let Some(mode) = config.mode {
                self.mode = mode;
            }
        }
        if self.max_distance.is_none() {
            self.max_distance = config.max_distance;
        }

        // Performance / limits
        if self.threads.is_none() {
            self.threads = config.threads;
        }
        if self.max_samples.is_none() {
            self.max_samples = config.max_samples;
        }

        // Flags (CLI switches win, config can only turn them on)
        self.hashes |= config.hashes.unwrap_or(false);
        self.csv |= config.csv.unwrap_or(false);
        self.quiet |= config.quiet.unwrap_or(false);

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["cgmlst-dists"], args).unwrap()
    }

    #[test]
    fn test_config_fills_gaps() {
        let config = Config {
            input: Some("from_config.tsv".to_string()),
            mode: Some(1),
            max_distance: Some(10),
            hashes: Some(true),
            threads: Some(2),
            ..Config::default()
        };
        let args = parse(&[]).merge_with_config(config);
        assert_eq!(args.input.as_deref(), Some("from_config.tsv"));
        assert_eq!(args.mode, 1);
        assert_eq!(args.max_distance, Some(10));
        assert!(args.hashes);
        assert_eq!(args.threads, Some(2));
        assert!(!args.csv);
    }

    #[test]
    fn test_cli_wins() {
        let config = Config {
            input: Some("from_config.tsv".to_string()),
            mode: Some(1),
            max_distance: Some(10),
            ..Config::default()
        };
        let args = parse(&["-m", "2", "-x", "5", "cli.tsv"]).merge_with_config(config);
        assert_eq!(args.input.as_deref(), Some("cli.tsv"));
        assert_eq!(args.mode, 2);
        assert_eq!(args.max_distance, Some(5));
    }
}

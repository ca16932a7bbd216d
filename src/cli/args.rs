// args.rs - Command line arguments definition

use argh::FromArgs;

pub const DEFAULT_MODE: u8 = 3;

#[derive(FromArgs, Debug)]
/// Pairwise cgMLST distance matrix from allele call tables
pub struct Args {
    /// allele call table (e.g. chewbbaca results_alleles.tsv)
    #[argh(positional)]
    pub input: Option<String>,

    /// quiet mode; do not print progress information
    #[argh(switch, short = 'q')]
    pub quiet: bool,

    /// use comma instead of tab in output
    #[argh(switch, short = 'c')]
    pub csv: bool,

    /// output: 1=lower-tri 2=upper-tri 3=full (default: 3)
    #[argh(option, short = 'm', default = "DEFAULT_MODE")]
    pub mode: u8,

    /// stop counting beyond this distance (default: unbounded)
    #[argh(option, short = 'x')]
    pub max_distance: Option<u64>,

    /// allele calls are hexadecimal hashes instead of integers
    #[argh(switch, short = 'H')]
    pub hashes: bool,

    /// number of threads (default: auto-detect)
    #[argh(option, short = 't')]
    pub threads: Option<usize>,

    /// refuse inputs with more than this many samples
    #[argh(option)]
    pub max_samples: Option<usize>,

    /// write the matrix to this file instead of stdout
    #[argh(option, short = 'o')]
    pub output: Option<String>,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// load and check the table, report statistics, then exit
    #[argh(switch)]
    pub dry_run: bool,

    /// print version and exit
    #[argh(switch, short = 'v')]
    pub version: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, argh::EarlyExit> {
        Args::from_args(&["cgmlst-dists"], args)
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["calls.tsv"]).unwrap();
        assert_eq!(args.input.as_deref(), Some("calls.tsv"));
        assert_eq!(args.mode, DEFAULT_MODE);
        assert!(!args.quiet && !args.csv && !args.hashes);
        assert!(args.max_distance.is_none());
        assert!(args.threads.is_none());
    }

    #[test]
    fn test_short_flags() {
        let args = parse(&["-q", "-c", "-m", "1", "-x", "20", "-H", "-t", "4", "calls.tsv"]).unwrap();
        assert!(args.quiet);
        assert!(args.csv);
        assert!(args.hashes);
        assert_eq!(args.mode, 1);
        assert_eq!(args.max_distance, Some(20));
        assert_eq!(args.threads, Some(4));
    }

    #[test]
    fn test_rejects_bad_number() {
        assert!(parse(&["-m", "full", "calls.tsv"]).is_err());
    }
}

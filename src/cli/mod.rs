// mod.rs - CLI module

pub mod args;
pub mod config;
pub mod merge;
pub mod validation;

// Re-export main types for convenience
pub use args::Args;
pub use config::Config;
pub use validation::{validate_args, RunSettings};

/// Set up logging on stderr. `quiet` keeps only warnings and errors;
/// `RUST_LOG` overrides either level.
pub fn init_logging(quiet: bool) {
    use std::io::Write;

    let level = if quiet { "warn" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init();
}

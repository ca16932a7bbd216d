// main.rs - CLI entry point

use cgmlst_dists::cli::init_logging;
use cgmlst_dists::prelude::*;
use cgmlst_dists::get_info;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<()> {
    let mut args: Args = argh::from_env();

    if args.version {
        println!("{}", get_info());
        return Ok(());
    }

    if args.generate_config {
        println!("{}", Config::generate_sample());
        eprintln!("💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let settings = validate_args(&args)?;
    init_logging(settings.quiet);

    log::info!("🚀 This is {}", get_info());
    if let Some(config_path) = &args.config {
        log::info!("📄 Loaded configuration from: {}", config_path);
    }
    log::info!("🔨 Alleles: {}", settings.encoding.encoder().description());
    match settings.threads {
        Some(n) => log::info!("🧵 Threads: {}", n),
        None => log::info!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads()),
    }
    if settings.max_distance < Distance::MAX {
        log::info!("✂️  Distances capped at {}", settings.max_distance);
    }

    let total_start = Instant::now();

    log::info!("📊 Loading allele calls: {}", settings.input.display());
    let table = SampleTable::from_tsv(
        &settings.input,
        LoadOptions {
            encoding: settings.encoding,
            max_samples: settings.max_samples,
        },
    )?;
    log::info!(
        "✅ Loaded {} samples x {} allele calls",
        table.len(),
        table.ncol()
    );
    table.log_statistics();

    if args.dry_run {
        log::info!("✅ Dry run completed successfully");
        return Ok(());
    }

    let engine = DistanceEngine::new(settings.max_distance);
    let matrix = match settings.threads {
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
            pool.install(|| calculate_distance_matrix(&table, &engine, settings.quiet))?
        }
        None => calculate_distance_matrix(&table, &engine, settings.quiet)?,
    };

    let target = settings
        .output
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());
    log::info!("💾 Writing distance matrix to {}...", target);
    write_matrix_to(
        settings.output.as_deref(),
        &table.sample_ids(),
        &matrix,
        settings.layout,
        settings.separator,
    )?;

    log::info!("✅ Done in {:.2}s", total_start.elapsed().as_secs_f64());
    Ok(())
}

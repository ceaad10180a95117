// Clickstream Dataset Generator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/clickstream-dataset-generator
// ```
//
// Or with custom parameters:
//
// ```console
// $ ./target/release/clickstream-dataset-generator --user-count 100 --session-count 500 --event-count 2000 --seed 7
// ```

use clap::Parser;
use clickstream_dataset_generator::pipeline::{GenerationPipeline, LoggingConfig};
use clickstream_dataset_generator::types::{CliArgs, GeneratorConfig};
use std::process;
use tracing::{error, info, Level};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = GeneratorConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting clickstream dataset generator");

    // Load configuration from CLI arguments and optional config file
    let dry_run = args.dry_run;
    let config = match GeneratorConfig::from_cli_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no data will be generated.");
        print_configuration_summary(&config);
        return;
    }

    print_startup_banner(&config);

    let pipeline = match GenerationPipeline::new(config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            error!("Failed to initialize pipeline: {}", e);
            process::exit(1);
        }
    };

    match pipeline.run() {
        Ok(statistics) => {
            println!("{}", statistics);
            info!("Dataset generation completed successfully");
        }
        Err(e) => {
            error!("Dataset generation failed: {}", e);
            process::exit(1);
        }
    }
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &GeneratorConfig) {
    eprintln!("Clickstream Dataset Generator");
    eprintln!("=============================");
    eprintln!("Synthesizes linked user, session and event tables for analytics testing");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &GeneratorConfig) {
    eprintln!("Configuration:");
    eprintln!("  Users: {}", config.user_count);
    eprintln!("  Sessions: {}", config.session_count);
    eprintln!("  Event Cap: {}", config.event_count);
    eprintln!("  Session Window: {} days", config.window_days);
    eprintln!("  Signup Lookback: {} days", config.signup_lookback_days);
    eprintln!("  Seed: {}", config.seed);
    eprintln!("  Output Directory: {}", config.output_dir.display());
    eprintln!("  Reference Time: {}", config.reference_time.format("%Y-%m-%d %H:%M:%S"));
    eprintln!();
}

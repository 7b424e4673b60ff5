use anyhow::{Context, Result};
use clap::Parser;
use navdata_sql::cli::Args;
use navdata_sql::config::NavdataConfig;
use navdata_sql::processor::NavdataConverter;
use std::fs::OpenOptions;
use std::process;
use std::sync::Mutex;
use tracing::debug;

fn main() {
    let args = Args::parse();

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        let shutdown_signal = async {
            if tokio::signal::ctrl_c().await.is_err() {
                // no signal handler available, never interrupt
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            result = run(args) => result,
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(anyhow::anyhow!("Conversion interrupted by user"))
            }
        }
    });

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = NavdataConfig::load(args.config_file.as_deref())
        .context("Failed to load configuration")?;
    let config = args.apply_to(config);
    setup_logging(&config)?;

    let converter = NavdataConverter::new(config)
        .context("Invalid configuration")?
        .with_tables(args.selected_tables())
        .with_progress(!args.quiet);

    let summary = converter.convert().await.context("Conversion failed")?;
    if !args.quiet {
        summary.print();
    }
    Ok(())
}

/// Log to stderr, mirrored into the configured log file when there is one
fn setup_logging(config: &NavdataConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let level = &config.logging.level;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("navdata_sql={}", level)));

    let log_file = &config.logging.log_file;
    let file_layer = if log_file.is_empty() {
        None
    } else {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(|| format!("Failed to open log file {}", log_file))?;
        Some(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
    };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_timer(fmt::time::uptime())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    debug!("Logging initialized at level: {}", level);
    Ok(())
}

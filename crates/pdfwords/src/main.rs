mod cli;

use anyhow::Context;
use clap::Parser;
use log::info;
use tracing_subscriber::EnvFilter;

use pdfwords::config::{resolve_config, validate_config, ReportFormat};
use pdfwords::pipeline::{LogProgress, Pipeline, PipelineConfig};
use pdfwords::report::{limit_entries, render_json, render_text};

use cli::Cli;

/// Routes `tracing` events and `log` records to stderr, leaving stdout for
/// the report.
fn init_logging(default_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;
    tracing_log::LogTracer::init().context("Failed to bridge log records into tracing")?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level())?;

    info!("Starting pdfwords v{}", env!("CARGO_PKG_VERSION"));

    let mut config = resolve_config(cli.config.as_deref())?;
    cli.apply(&mut config);
    validate_config(&config)?;

    let pipeline_config = PipelineConfig::from_config(&config)?;
    let input_directory = pipeline_config.input_directory.clone();

    let pipeline = Pipeline::from_config(pipeline_config);
    let outcome = pipeline
        .run(&LogProgress)
        .with_context(|| format!("Failed to scan {}", input_directory.display()))?;

    let ranked = outcome.ranked();
    let entries = limit_entries(&ranked, config.report.limit);

    match config.report.format {
        ReportFormat::Text => print!("{}", render_text(&outcome.stats, entries)),
        ReportFormat::Json => println!(
            "{}",
            render_json(&input_directory, &outcome, entries).context("Failed to render report")?
        ),
    }

    Ok(())
}

//! `gpx-merge` - merge all GPX files within a directory into one GPX file

use clap::Parser;
use gpx_merge_lib::{MergeConfig, Merger, Result};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Merges all trackpoints in GPX files within a directory and writes out the
/// merged GPX
#[derive(Parser, Debug)]
#[command(name = "gpx-merge", version)]
struct Cli {
    /// Input directory containing GPX files
    #[arg(short, long)]
    input: PathBuf,

    /// Output GPX file with merged trackpoints
    /// (default: <current dir>/<input basename>_merged.gpx)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep every Nth trackpoint of each segment (1 keeps all points)
    #[arg(short, long, default_value_t = 1)]
    skip_interval: usize,
}

fn run(cli: Cli) -> Result<()> {
    let config = MergeConfig::new(cli.input, cli.output, cli.skip_interval)?;
    let report = Merger::new(config).run()?;

    tracing::info!(
        files = report.files_merged,
        tracks = report.tracks_written,
        points_read = report.points_read,
        points_written = report.points_written,
        output = %report.output_path.display(),
        "merge complete"
    );
    Ok(())
}

fn main() -> ExitCode {
    // Logs go to stderr; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

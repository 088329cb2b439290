use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use levelgen::{ConfigSource, RunOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "levelgen", version, about = "Generate component level time tables")]
struct Cli {
    #[arg(long, help = "Read components from this file instead of the bundled config")]
    config: Option<PathBuf>,
    #[arg(long, help = "Write level files here instead of ./output next to the executable")]
    output_dir: Option<PathBuf>,
    #[arg(long, default_value_t = false, help = "Indent the generated JSON")]
    pretty: bool,
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        RunOptions {
            config: cli.config.map(ConfigSource::File).unwrap_or_default(),
            output_dir: cli.output_dir,
            pretty: cli.pretty,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let options = RunOptions::from(Cli::parse());

    match levelgen::run(&options) {
        Ok(report) if report.is_clean() => {
            tracing::info!(written = report.written.len(), "generation complete");
            ExitCode::SUCCESS
        }
        Ok(report) => {
            let failed: Vec<&str> = report.failed.iter().map(|f| f.component.as_str()).collect();
            tracing::warn!(
                written = report.written.len(),
                failed = ?failed,
                "generation finished with failures"
            );
            ExitCode::from(2)
        }
        Err(error) => {
            tracing::error!(%error, "generation aborted");
            ExitCode::FAILURE
        }
    }
}

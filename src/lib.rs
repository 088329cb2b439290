//! Level Gen - per-level upgrade time tables for ship components
//!
//! Reads a component config (base time plus level range per component) and
//! writes one `<COMPONENT>_LEVELS.json` file per component listing the time
//! needed to reach every level in its range.

pub mod batch;
pub mod config;
pub mod error;
pub mod level;
pub mod output;

pub use crate::batch::{run_batch, BatchReport, ComponentFailure};
pub use crate::config::{load_components, ComponentSpec, ComponentsConfig, ConfigSource, RunOptions};
pub use crate::error::{LevelGenError, Result};
pub use crate::level::{generate, LevelEntry, LevelTable};
pub use crate::output::{JsonFileSink, TableSink};

use crate::output::{create_output_directory, resolve_output_directory, DEFAULT_OUTPUT_DIR};

/// Run a full generation pass.
///
/// The output directory is provisioned before the config is read; failing
/// either is fatal. Per-component failures are collected in the report.
pub fn run(options: &RunOptions) -> Result<BatchReport> {
    let output_dir = match &options.output_dir {
        Some(dir) => dir.clone(),
        None => resolve_output_directory(DEFAULT_OUTPUT_DIR)?,
    };
    create_output_directory(&output_dir)?;

    let components = load_components(&options.config)?;
    tracing::info!(
        resource = %options.config.resource_name(),
        components = components.len(),
        "loaded component config"
    );

    let mut sink = JsonFileSink::new(output_dir).pretty(options.pretty);
    Ok(run_batch(&components, &mut sink))
}

//! Batch driver
//!
//! Generates and writes one level table per configured component. A
//! component that fails to parse or write is logged and skipped; the rest
//! of the batch still runs.

use crate::config::ComponentsConfig;
use crate::error::LevelGenError;
use crate::level::generate_for;
use crate::output::{level_file_name, TableSink};

/// A component that produced no output
#[derive(Debug)]
pub struct ComponentFailure {
    pub component: String,
    pub error: LevelGenError,
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// File names written, in processing order
    pub written: Vec<String>,
    pub failed: Vec<ComponentFailure>,
}

impl BatchReport {
    /// True when every component was written
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Generate and write a level table for every component in `config`
pub fn run_batch<S: TableSink + ?Sized>(config: &ComponentsConfig, sink: &mut S) -> BatchReport {
    let mut report = BatchReport::default();

    for (name, spec) in config.specs() {
        let spec = match spec {
            Ok(spec) => spec,
            Err(error) => {
                tracing::error!(component = name, %error, "skipping component");
                report.failed.push(ComponentFailure {
                    component: name.to_string(),
                    error,
                });
                continue;
            }
        };

        if spec.max_level < spec.min_level {
            tracing::warn!(
                component = name,
                min_level = spec.min_level,
                max_level = spec.max_level,
                "inverted level range, writing empty table"
            );
        }

        let table = generate_for(&spec);
        tracing::debug!(component = name, levels = table.len(), "generated level table");

        let file_name = level_file_name(name);
        match sink.write(&table, &file_name) {
            Ok(()) => report.written.push(file_name),
            Err(error) => {
                tracing::error!(component = name, %error, "failed to write level table");
                report.failed.push(ComponentFailure {
                    component: name.to_string(),
                    error,
                });
            }
        }
    }

    report
}

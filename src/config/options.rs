//! Run options

use std::path::PathBuf;

use super::ConfigSource;

/// Options for a single generation run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config: ConfigSource,
    /// Already-resolved output directory. `None` means `output` next to
    /// the running executable.
    pub output_dir: Option<PathBuf>,
    /// Indent the generated JSON
    pub pretty: bool,
}

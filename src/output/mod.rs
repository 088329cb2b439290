//! Output module
//!
//! Resolves and provisions the output directory and writes level tables
//! into it.

mod sink;

pub use sink::*;

use crate::error::{LevelGenError, Result};
use std::io;
use std::path::{Path, PathBuf};

/// Default name of the output directory, next to the executable
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// File name for a component's level table
pub fn level_file_name(component: &str) -> String {
    format!("{}_LEVELS.json", component)
}

/// `subdir` inside the directory that holds the running executable
pub fn resolve_output_directory(subdir: &str) -> Result<PathBuf> {
    let unavailable = |source: io::Error| LevelGenError::OutputDirectoryUnavailable {
        path: PathBuf::from(subdir),
        source,
    };

    let exe = std::env::current_exe().map_err(unavailable)?;
    let parent = exe.parent().ok_or_else(|| {
        unavailable(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })?;

    Ok(parent.join(subdir))
}

/// Create `path` and any missing parents. An existing directory is fine.
pub fn create_output_directory(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|source| LevelGenError::OutputDirectoryUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    if !path.is_dir() {
        return Err(LevelGenError::OutputDirectoryUnavailable {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::Other, "not a directory"),
        });
    }

    tracing::debug!(path = %path.display(), "output directory ready");
    Ok(())
}

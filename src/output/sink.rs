//! Level table sinks

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::{LevelGenError, Result};
use crate::level::LevelTable;

/// Destination for generated level tables
pub trait TableSink {
    fn write(&mut self, table: &LevelTable, file_name: &str) -> Result<()>;
}

/// Writes each table as a JSON file inside a directory
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    dir: PathBuf,
    pretty: bool,
}

impl JsonFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Serialize into a temp file beside `path`, then rename over it.
    /// A failed write leaves any previous file untouched.
    fn write_file<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> io::Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            if self.pretty {
                serde_json::to_writer_pretty(&mut writer, value)?;
            } else {
                serde_json::to_writer(&mut writer, value)?;
            }
            writer.flush()?;
        }
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl TableSink for JsonFileSink {
    fn write(&mut self, table: &LevelTable, file_name: &str) -> Result<()> {
        let path = self.dir.join(file_name);
        self.write_file(&path, table)
            .map_err(|source| LevelGenError::WriteFailure {
                path: path.clone(),
                source,
            })?;

        tracing::info!(path = %path.display(), levels = table.len(), "wrote level file");
        Ok(())
    }
}

//! JSONL file sink for labeled data.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Sink;
use crate::error::Result;
use crate::model::LabeledDatum;

/// Stores labeled data as JSON Lines, one `LabeledDatum` per line
#[derive(Debug, Clone)]
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back every record in the file. A missing file reads as empty.
    pub fn read_all(&self) -> Result<Vec<LabeledDatum>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut items = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                items.push(serde_json::from_str(&line)?);
            }
        }
        Ok(items)
    }

    fn open(&self, overwrite: bool) -> Result<File> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        options.create(true);
        if overwrite {
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }
        Ok(options.open(&self.path)?)
    }
}

impl Sink for JsonlSink {
    fn write(&self, items: &[LabeledDatum], overwrite: bool) -> Result<()> {
        // Serialize everything up front so a bad record leaves the file untouched
        let mut buffer = String::new();
        for item in items {
            buffer.push_str(&serde_json::to_string(item)?);
            buffer.push('\n');
        }

        let mut file = self.open(overwrite)?;
        file.write_all(buffer.as_bytes())?;
        file.flush()?;

        log::info!(
            "Wrote {} labeled item(s) to {} (overwrite: {})",
            items.len(),
            self.path.display(),
            overwrite
        );
        Ok(())
    }
}

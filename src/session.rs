// src/session.rs

use crate::remap::{self, ConversionSummary, RemappedTable};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// File name the audience CSV is always saved under.
pub const OUTPUT_FILE_NAME: &str = "meta_audience.csv";
/// MIME type of the saved file.
pub const OUTPUT_MIME_TYPE: &str = "text/csv";

/// One upload → convert → download cycle.
///
/// Holds the selected export, the last converted table and its CSV text.
/// Each piece is only replaced by a fresh upload or a fresh conversion.
#[derive(Debug, Default)]
pub struct Session {
    file: Option<PathBuf>,
    converted: RemappedTable,
    csv: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `path` as the export to convert.
    pub fn upload(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        info!(file = %path.display(), "selected export");
        self.file = Some(path);
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Convert the selected export. Returns `None` without touching any state
    /// when nothing has been uploaded.
    #[instrument(skip(self))]
    pub async fn convert(&mut self) -> Result<Option<ConversionSummary>> {
        let Some(path) = self.file.as_ref() else {
            debug!("convert requested with no file selected");
            return Ok(None);
        };

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("reading export {}", path.display()))?;
        let text = String::from_utf8_lossy(&bytes);

        let (table, csv, summary) = remap::convert(&text);
        self.converted = table;
        self.csv = csv;
        Ok(Some(summary))
    }

    /// The complete converted table, header included. Empty before the first
    /// conversion.
    pub fn converted(&self) -> &RemappedTable {
        &self.converted
    }

    pub fn csv(&self) -> &str {
        &self.csv
    }

    /// Write the converted CSV to `dir/meta_audience.csv`. Returns `None`
    /// when there is nothing converted yet.
    pub fn download(&self, dir: &Path) -> Result<Option<PathBuf>> {
        if self.csv.is_empty() {
            debug!("download requested with nothing converted");
            return Ok(None);
        }

        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {:?}", dir))?;
        let out = dir.join(OUTPUT_FILE_NAME);
        std::fs::write(&out, self.csv.as_bytes())
            .with_context(|| format!("writing {}", out.display()))?;
        info!(
            path = %out.display(),
            mime = OUTPUT_MIME_TYPE,
            bytes = self.csv.len(),
            "saved audience file"
        );
        Ok(Some(out))
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use crate::envelope::Envelope;
use crate::error::{Result, SealpadError};
use crate::fs::write_atomic;

use super::template::{embed_envelope, extract_envelope, DEFAULT_TEMPLATE};
use super::DocumentStore;

/// On-disk layout of a vault file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// The bare envelope JSON.
    Json,
    /// A self-contained HTML document with the envelope embedded.
    Html,
}

impl DocumentFormat {
    /// Pick the format from the file extension (`.html`/`.htm` → HTML).
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("html") | Some("htm") => DocumentFormat::Html,
            _ => DocumentFormat::Json,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Html => "html",
        }
    }
}

/// File-backed document store with atomic replacement on persist.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    format: DocumentFormat,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = DocumentFormat::from_path(&path);
        Self { path, format }
    }

    pub fn with_format(path: impl Into<PathBuf>, format: DocumentFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    fn read_document(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SealpadError::Persistence(format!(
                "Failed to read {}: {}",
                self.path.display(),
                err
            ))),
        }
    }

    fn render(&self, envelope: &Envelope) -> Result<String> {
        let json = envelope.to_json()?;
        match self.format {
            DocumentFormat::Json => Ok(format!("{}\n", json)),
            DocumentFormat::Html => {
                let template = self
                    .read_document()?
                    .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string());
                embed_envelope(&template, &json)
            }
        }
    }
}

impl DocumentStore for FileStore {
    fn load_envelope(&self) -> Result<Option<Envelope>> {
        let Some(document) = self.read_document()? else {
            return Ok(None);
        };

        let json = match self.format {
            DocumentFormat::Json => Some(document.trim()).filter(|body| !body.is_empty()),
            DocumentFormat::Html => extract_envelope(&document)?,
        };

        json.map(Envelope::from_json).transpose()
    }

    fn persist(&mut self, envelope: &Envelope) -> Result<()> {
        let document = self.render(envelope)?;
        write_atomic(&self.path, document.as_bytes()).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "vault write failed");
            SealpadError::Persistence(format!(
                "Failed to write {}: {}",
                self.path.display(),
                e
            ))
        })?;
        tracing::info!(
            path = %self.path.display(),
            format = self.format.name(),
            "vault persisted"
        );
        Ok(())
    }
}

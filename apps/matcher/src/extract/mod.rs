//! Résumé text extraction.
//!
//! The set of accepted formats is closed: a file is either a PDF or a DOCX,
//! chosen from its extension, and anything else is rejected before parsing.

pub mod docx;
pub mod pdf;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolves the format from a client-supplied filename (extension, case-insensitive).
    pub fn from_filename(filename: &str) -> Result<Self, AppError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => Ok(DocumentFormat::Pdf),
            Some("docx") => Ok(DocumentFormat::Docx),
            _ => Err(AppError::UnsupportedFormat(filename.to_string())),
        }
    }

    /// Extracts the document at `path` on the calling thread.
    pub fn extract(self, path: &Path) -> Result<String, AppError> {
        match self {
            DocumentFormat::Pdf => pdf::extract_pdf_text(path),
            DocumentFormat::Docx => docx::extract_docx_text(path),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => f.write_str("pdf"),
            DocumentFormat::Docx => f.write_str("docx"),
        }
    }
}

/// Runs extraction on the blocking pool. A panic inside a parser is reported
/// as an extraction failure.
pub async fn extract_text(format: DocumentFormat, path: PathBuf) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || format.extract(&path))
        .await
        .map_err(|e| {
            if e.is_panic() {
                AppError::Extraction(format!("The {format} parser crashed on this file"))
            } else {
                AppError::Internal(anyhow::anyhow!("Extraction task failed: {e}"))
            }
        })?
}

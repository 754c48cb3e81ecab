use std::path::Path;

use crate::errors::AppError;

/// Extracts the text of every page in order and concatenates the pages with
/// no separator. Pages without a text layer contribute nothing.
pub fn extract_pdf_text(path: &Path) -> Result<String, AppError> {
    let bytes = std::fs::read(path)?;

    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes).map_err(|e| {
        AppError::Extraction(format!(
            "Failed to extract text from PDF '{}': {e}",
            path.display()
        ))
    })?;

    tracing::debug!(pages = pages.len(), "Extracted PDF text");
    Ok(pages.concat())
}

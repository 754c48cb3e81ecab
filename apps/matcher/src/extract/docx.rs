use std::path::Path;

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::errors::AppError;

/// Extracts body paragraphs in document order, joined with `\n`.
///
/// Only top-level paragraphs are read: tables, headers and footers are skipped.
/// Empty paragraphs are kept as empty lines.
pub fn extract_docx_text(path: &Path) -> Result<String, AppError> {
    let bytes = std::fs::read(path)?;

    let docx = docx_rs::read_docx(&bytes).map_err(|e| {
        AppError::Extraction(format!(
            "Failed to read DOCX '{}': {e}",
            path.display()
        ))
    })?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    tracing::debug!(paragraphs = paragraphs.len(), "Extracted DOCX text");
    Ok(paragraphs.join("\n"))
}

/// Paragraph → Run → Text. Runs of one paragraph are concatenated directly.
fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&para.children, &mut text);
    text
}

/// Hyperlinks wrap their own runs, so they are walked like the paragraph itself.
fn push_children_text(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, text),
            _ => {}
        }
    }
}

use axum::body::Bytes;
use axum::extract::multipart::{Multipart, MultipartError};

use crate::errors::AppError;

/// Multipart field carrying the résumé file.
pub const RESUME_FIELD: &str = "resume";
/// Multipart field carrying the job-description text.
pub const JD_FIELD: &str = "jd";

/// A validated form submission. Both fields are present; the job
/// description may still be empty text.
#[derive(Debug)]
pub struct Submission {
    pub filename: String,
    pub file: Bytes,
    pub jd_text: String,
}

impl Submission {
    /// Reads the whole multipart body and checks the required fields before
    /// anything touches the disk. Unknown fields are ignored.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut resume: Option<(String, Bytes)> = None;
        let mut jd_text: Option<String> = None;

        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some(RESUME_FIELD) => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await.map_err(malformed)?;
                    resume = Some((filename, bytes));
                }
                Some(JD_FIELD) => {
                    jd_text = Some(field.text().await.map_err(malformed)?);
                }
                _ => {}
            }
        }

        let (filename, file) = resume
            .filter(|(filename, _)| !filename.is_empty())
            .ok_or(AppError::MissingField(RESUME_FIELD))?;
        let jd_text = jd_text.ok_or(AppError::MissingField(JD_FIELD))?;

        Ok(Submission {
            filename,
            file,
            jd_text,
        })
    }
}

fn malformed(e: MultipartError) -> AppError {
    AppError::Validation(format!("Malformed form submission: {e}"))
}

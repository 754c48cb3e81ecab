//! Axum route handlers for the résumé match form and its JSON twin.

use axum::{
    extract::{Multipart, State},
    response::Html,
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::extract::{extract_text, DocumentFormat};
use crate::matching::submission::{Submission, RESUME_FIELD};
use crate::render::{render_page, PageError};
use crate::scoring::ScoringResult;
use crate::state::AppState;
use crate::uploads::stored_name;

/// GET /
pub async fn handle_form() -> Html<String> {
    Html(render_page(None))
}

/// POST /
///
/// Scores the uploaded résumé and renders the form again with the result.
pub async fn handle_submit(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, PageError> {
    let submission = Submission::from_multipart(multipart).await?;
    let result = score_submission(&state, submission).await?;
    Ok(Html(render_page(Some(&result))))
}

/// POST /api/v1/score
///
/// Same form contract as `POST /`, answered with the scoring result as JSON.
pub async fn handle_score(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScoringResult>, AppError> {
    let submission = Submission::from_multipart(multipart).await?;
    let result = score_submission(&state, submission).await?;
    Ok(Json(result))
}

/// Format check → save → extract → score. The format is resolved from the
/// name that will be stored, before anything is written.
pub async fn score_submission(
    state: &AppState,
    submission: Submission,
) -> Result<ScoringResult, AppError> {
    let name =
        stored_name(&submission.filename).ok_or(AppError::MissingField(RESUME_FIELD))?;
    let format = DocumentFormat::from_filename(name)?;
    let path = state.uploads.save(name, &submission.file).await?;

    let resume_text = extract_text(format, path).await?;
    let result = state.scorer.score(&resume_text, &submission.jd_text);

    info!(
        %format,
        score = result.score,
        matched = result.matched.len(),
        missing = result.missing.len(),
        "Scored résumé"
    );
    Ok(result)
}

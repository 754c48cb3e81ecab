//! Match scoring: compares résumé vocabulary against a job description.
//!
//! Default: `KeywordScorer` (bag-of-words presence, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, so handlers never depend on a
//! concrete backend.

pub mod normalize;
pub mod vectorizer;

use serde::{Deserialize, Serialize};

use crate::scoring::normalize::normalize_text;
use crate::scoring::vectorizer::TermCounts;

/// Maximum number of matched and missing terms reported back.
pub const MAX_LISTED_TERMS: usize = 20;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of comparing one résumé with one job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Matched share of the job-description vocabulary, 0 – 100, rounded down.
    pub score: u32,
    /// JD terms also present in the résumé, vocabulary order, at most 20.
    pub matched: Vec<String>,
    /// JD terms absent from the résumé, vocabulary order, at most 20.
    pub missing: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores extracted résumé text against job-description text.
///
/// Carried in `AppState` as `Arc<dyn MatchScorer>`.
pub trait MatchScorer: Send + Sync {
    fn score(&self, resume_text: &str, jd_text: &str) -> ScoringResult;
}

/// Bag-of-words scorer.
///
/// Algorithm:
/// 1. Normalize both texts and build their shared vocabulary (alphabetical).
/// 2. Skip terms that never occur in the job description.
/// 3. A JD term that occurs in the résumé is matched, otherwise missing.
/// 4. score = ⌊100 × matched / (matched + missing)⌋, or 0 with no JD terms.
pub struct KeywordScorer;

impl MatchScorer for KeywordScorer {
    fn score(&self, resume_text: &str, jd_text: &str) -> ScoringResult {
        compute_keyword_match(resume_text, jd_text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core keyword match algorithm
// ────────────────────────────────────────────────────────────────────────────

pub fn compute_keyword_match(resume_text: &str, jd_text: &str) -> ScoringResult {
    let resume = normalize_text(resume_text);
    let jd = normalize_text(jd_text);
    let counts = TermCounts::build(&resume, &jd);

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for (term, resume_count, jd_count) in counts.iter() {
        if jd_count == 0 {
            continue;
        }
        if resume_count > 0 {
            matched.push(term);
        } else {
            missing.push(term);
        }
    }

    let score = percentage(matched.len(), matched.len() + missing.len());

    tracing::debug!(
        vocabulary = counts.vocabulary_len(),
        matched = matched.len(),
        missing = missing.len(),
        score,
        "Computed keyword match"
    );

    ScoringResult {
        score,
        matched: first_terms(&matched),
        missing: first_terms(&missing),
    }
}

/// Integer percentage rounded down; 0 when `total` is 0.
fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part * 100 / total) as u32
}

fn first_terms(terms: &[&str]) -> Vec<String> {
    terms
        .iter()
        .take(MAX_LISTED_TERMS)
        .map(|t| t.to_string())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

//! HTML rendering for the upload form, the result block and error pages.

use axum::response::{Html, IntoResponse, Response};

use crate::errors::AppError;
use crate::scoring::ScoringResult;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Résumé Match</title>
<style>
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }
textarea { width: 100%; height: 12rem; }
.score { font-size: 2rem; }
.matched li { color: #1a7f37; }
.missing li { color: #cf222e; }
.error { border: 1px solid #cf222e; padding: 1rem; }
</style>
</head>
<body>
<h1>Résumé Match</h1>
"#;

const PAGE_FOOT: &str = "</body>\n</html>\n";

const FORM: &str = r#"<form method="post" action="/" enctype="multipart/form-data">
<p><label>Résumé (.pdf or .docx)<br><input type="file" name="resume" accept=".pdf,.docx" required></label></p>
<p><label>Job description<br><textarea name="jd" required></textarea></label></p>
<p><button type="submit">Score</button></p>
</form>
"#;

/// The form, followed by the result when one is available.
pub fn render_page(result: Option<&ScoringResult>) -> String {
    let mut html = String::from(PAGE_HEAD);
    html.push_str(FORM);
    if let Some(result) = result {
        html.push_str(&render_result(result));
    }
    html.push_str(PAGE_FOOT);
    html
}

fn render_result(result: &ScoringResult) -> String {
    format!(
        "<section class=\"result\">\n<p class=\"score\">ATS score: {}%</p>\n\
         <h2>Matched keywords</h2>\n{}<h2>Missing keywords</h2>\n{}</section>\n",
        result.score,
        render_terms("matched", &result.matched),
        render_terms("missing", &result.missing),
    )
}

fn render_terms(class: &str, terms: &[String]) -> String {
    if terms.is_empty() {
        return format!("<p class=\"{class}\">None</p>\n");
    }
    let items: String = terms
        .iter()
        .map(|t| format!("<li>{}</li>", escape_html(t)))
        .collect();
    format!("<ul class=\"{class}\">{items}</ul>\n")
}

pub fn render_error_page(code: &str, message: &str) -> String {
    let mut html = String::from(PAGE_HEAD);
    html.push_str(&format!(
        "<div class=\"error\"><strong>{}</strong>: {}</div>\n",
        escape_html(code),
        escape_html(message)
    ));
    html.push_str(FORM);
    html.push_str(PAGE_FOOT);
    html
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `AppError` rendered as an HTML page, for the form routes.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        PageError(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.0.parts();
        (status, Html(render_error_page(code, &message))).into_response()
    }
}

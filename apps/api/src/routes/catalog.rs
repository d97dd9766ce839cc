//! Read-only endpoints: landing page, style listing, sample resume.

use axum::{extract::State, response::Html, Json};
use serde::Serialize;
use tracing::debug;

use crate::state::AppState;
use crate::styles::StyleSummary;

/// Returned by `/api/sample-resume` when no sample file is configured or readable.
pub const EMBEDDED_SAMPLE_RESUME: &str = include_str!("../../data/sample_resume.yaml");

const FALLBACK_INDEX: &str = "<h1>Resume Builder</h1>\
    <p>API running. See <a href='/api/health'>/api/health</a> and \
    <a href='/api/styles'>/api/styles</a>.</p>";

#[derive(Debug, Serialize)]
pub struct StylesResponse {
    pub styles: Vec<StyleSummary>,
}

#[derive(Debug, Serialize)]
pub struct SampleResumeResponse {
    pub sample_yaml: String,
}

/// GET /
pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let index_path = state.config.static_dir.join("index.html");
    match tokio::fs::read_to_string(&index_path).await {
        Ok(page) => Html(page),
        Err(e) => {
            debug!("No index page at {}: {e}", index_path.display());
            Html(FALLBACK_INDEX.to_string())
        }
    }
}

/// GET /api/styles
pub async fn styles_handler(State(state): State<AppState>) -> Json<StylesResponse> {
    Json(StylesResponse {
        styles: state.styles.list().iter().map(StyleSummary::from).collect(),
    })
}

/// GET /api/sample-resume
pub async fn sample_resume_handler(State(state): State<AppState>) -> Json<SampleResumeResponse> {
    let sample_yaml = match &state.config.sample_resume_path {
        Some(path) => tokio::fs::read_to_string(path).await.unwrap_or_else(|e| {
            debug!("Sample resume {} unreadable: {e}", path.display());
            EMBEDDED_SAMPLE_RESUME.to_string()
        }),
        None => EMBEDDED_SAMPLE_RESUME.to_string(),
    };

    Json(SampleResumeResponse { sample_yaml })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ResumeDocument;

    #[test]
    fn test_embedded_sample_is_a_complete_resume() {
        let doc = ResumeDocument::parse(EMBEDDED_SAMPLE_RESUME).unwrap();
        assert_eq!(doc.personal_information.full_name(), "John Doe");
        assert_eq!(doc.sections().len(), 8);
        assert_eq!(
            doc.experience_details.as_ref().unwrap()[0].responsibilities.len(),
            3
        );
    }
}

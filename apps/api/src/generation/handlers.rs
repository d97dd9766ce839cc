//! Axum route handlers for the generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::kind::DocumentKind;
use crate::generation::pipeline::{self, GenerationRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub html: String,
}

async fn respond(
    state: &AppState,
    kind: DocumentKind,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = payload?;
    let html = pipeline::run(state, kind, request).await?;
    Ok(Json(GenerateResponse {
        success: true,
        html,
    }))
}

/// POST /api/generate/resume
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    respond(&state, DocumentKind::BaseResume, payload).await
}

/// POST /api/generate/resume-tailored
///
/// Same as the plain resume, tailored to `job_description` (required).
pub async fn handle_generate_tailored(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    respond(&state, DocumentKind::TailoredResume, payload).await
}

/// POST /api/generate/cover-letter
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    respond(&state, DocumentKind::CoverLetter, payload).await
}

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::kind::DocumentKind;
use crate::llm_client::LlmError;
use crate::models::resume::ResumeParseError;
use crate::render::placeholders::PlaceholderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Job description required for {0}")]
    MissingJobDescription(DocumentKind),

    #[error("OpenAI API key required")]
    MissingApiKey,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("No prompt template for {kind} at {location}")]
    TemplateNotFound { kind: DocumentKind, location: String },

    #[error("Generation failed: {0}")]
    Generation(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ResumeParseError> for AppError {
    fn from(e: ResumeParseError) -> Self {
        AppError::InvalidInput(e.to_string())
    }
}

impl From<PlaceholderError> for AppError {
    fn from(e: PlaceholderError) -> Self {
        AppError::Configuration(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_)
            | AppError::MissingJobDescription(_)
            | AppError::MissingApiKey => StatusCode::BAD_REQUEST,
            AppError::Configuration(_)
            | AppError::TemplateNotFound { .. }
            | AppError::Generation(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::MissingJobDescription(_) => "MISSING_JOB_DESCRIPTION",
            AppError::MissingApiKey => "MISSING_API_KEY",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::TemplateNotFound { .. } => "TEMPLATE_NOT_FOUND",
            AppError::Generation(_) => "GENERATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                self.to_string()
            }
            AppError::TemplateNotFound { .. } => {
                tracing::error!("{self}");
                self.to_string()
            }
            AppError::Generation(e) => {
                tracing::error!("LLM error: {e}");
                self.to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
            _ => self.to_string(),
        };

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        assert_eq!(
            AppError::InvalidInput("bad yaml".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MissingJobDescription(DocumentKind::CoverLetter).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::MissingApiKey.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_deployment_and_upstream_errors_map_to_500() {
        assert_eq!(
            AppError::Configuration("no styles".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::TemplateNotFound {
                kind: DocumentKind::BaseResume,
                location: "/tmp/x".into(),
            }
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Generation(LlmError::EmptyContent).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_template_not_found_names_kind_and_location() {
        let err = AppError::TemplateNotFound {
            kind: DocumentKind::TailoredResume,
            location: "prompts/resume-tailored/prompt.txt".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("tailored resume"));
        assert!(msg.contains("prompts/resume-tailored/prompt.txt"));
    }

    #[test]
    fn test_parse_error_becomes_invalid_input() {
        let err: AppError = ResumeParseError::Empty.into();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}

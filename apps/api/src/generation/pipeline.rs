//! Generation pipeline — the linear flow every generation endpoint runs.
//!
//! Flow: validate input → resolve style → load template → parse resume →
//!       invoke model → assemble page.
//!
//! Any step may fail and end the request. Nothing is retried and nothing is
//! persisted between requests.

use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::generator::generate;
use crate::generation::kind::DocumentKind;
use crate::models::resume::ResumeDocument;
use crate::render::page::assemble;
use crate::state::AppState;

/// Request body shared by all generation endpoints.
/// Missing text fields deserialize as empty so validation can report them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub resume_yaml: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

/// Picks the request key, then the configured default. Blank keys count as absent.
pub fn resolve_api_key<'a>(
    request_key: Option<&'a str>,
    default_key: Option<&'a str>,
) -> Result<&'a str, AppError> {
    request_key
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .or_else(|| default_key.map(str::trim).filter(|k| !k.is_empty()))
        .ok_or(AppError::MissingApiKey)
}

/// Checks everything that can be checked before touching templates or the model.
fn validate<'a>(
    kind: DocumentKind,
    request: &'a GenerationRequest,
    default_key: Option<&'a str>,
) -> Result<&'a str, AppError> {
    if request.resume_yaml.trim().is_empty() {
        return Err(AppError::InvalidInput("resume_yaml cannot be empty".to_string()));
    }

    if kind.requires_job_description()
        && request
            .job_description
            .as_deref()
            .map_or(true, |jd| jd.trim().is_empty())
    {
        return Err(AppError::MissingJobDescription(kind));
    }

    resolve_api_key(request.api_key.as_deref(), default_key)
}

/// Runs the full pipeline and returns a standalone HTML document.
pub async fn run(
    state: &AppState,
    kind: DocumentKind,
    request: GenerationRequest,
) -> Result<String, AppError> {
    let api_key = validate(kind, &request, state.config.openai_api_key.as_deref())?;

    let style = state.styles.resolve(request.style.as_deref().unwrap_or(""))?;
    info!(
        "Generating {} with style '{}' (requested {:?})",
        kind, style.name, request.style
    );

    let template = state.templates.load(kind).await?;

    let doc = ResumeDocument::parse(&request.resume_yaml)?;
    info!("Parsed resume sections: {}", doc.sections().join(", "));

    let fragment = generate(
        kind,
        &doc,
        &template,
        api_key,
        request.job_description.as_deref(),
        state.completion.as_ref(),
    )
    .await?;

    let fragment = match kind {
        DocumentKind::CoverLetter => fragment.ensure_body(),
        DocumentKind::BaseResume | DocumentKind::TailoredResume => fragment,
    };

    let html = assemble(&fragment, style)?;
    info!("Generated {} ({} bytes)", kind, html.len());

    Ok(html)
}

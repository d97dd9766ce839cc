//! Document generator — turns a parsed resume plus a prompt template into a
//! single completion call and returns the model's HTML fragment untouched.

use tracing::info;

use crate::errors::AppError;
use crate::generation::kind::DocumentKind;
use crate::generation::templates::{PromptTemplate, JOB_DESCRIPTION_SLOT, RESUME_SLOT};
use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, HTML_ONLY_INSTRUCTION};
use crate::llm_client::CompletionService;
use crate::models::resume::ResumeDocument;
use crate::render::page::HtmlFragment;
use crate::render::placeholders::substitute;

/// A fully rendered prompt, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltPrompt {
    pub system: String,
    pub user: String,
}

/// Builds the system and user prompt for one generation call.
///
/// The job description is inserted verbatim for job-tailored kinds and
/// ignored for the plain resume.
pub fn build_prompt(
    kind: DocumentKind,
    doc: &ResumeDocument,
    template: &PromptTemplate,
    job_description: Option<&str>,
) -> Result<BuiltPrompt, AppError> {
    let resume_yaml = doc
        .to_prompt_yaml()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize resume: {e}")))?;

    let user = if kind.requires_job_description() {
        let job_description = job_description
            .filter(|jd| !jd.trim().is_empty())
            .ok_or(AppError::MissingJobDescription(kind))?;
        substitute(
            &template.body,
            &[
                (RESUME_SLOT, resume_yaml.as_str()),
                (JOB_DESCRIPTION_SLOT, job_description),
            ],
        )?
    } else {
        substitute(&template.body, &[(RESUME_SLOT, resume_yaml.as_str())])?
    };

    let system = format!(
        "{}\n\n{}\n\n{}",
        template.system.trim(),
        HTML_ONLY_INSTRUCTION,
        GROUNDING_INSTRUCTION
    );

    Ok(BuiltPrompt { system, user })
}

/// Makes exactly one completion call. Every upstream failure surfaces as
/// `AppError::Generation`; nothing is retried.
pub async fn generate(
    kind: DocumentKind,
    doc: &ResumeDocument,
    template: &PromptTemplate,
    api_key: &str,
    job_description: Option<&str>,
    completion: &dyn CompletionService,
) -> Result<HtmlFragment, AppError> {
    let prompt = build_prompt(kind, doc, template, job_description)?;

    info!(
        "Requesting {} for {} ({} prompt chars)",
        kind,
        doc.personal_information.full_name(),
        prompt.user.len()
    );

    let html = completion
        .complete(api_key, &prompt.system, &prompt.user)
        .await?;

    Ok(HtmlFragment::new(html))
}

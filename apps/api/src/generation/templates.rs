//! Prompt template loader — resolves the template for a `DocumentKind` from a
//! source fixed at startup and caches it for the life of the process.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use tokio::sync::OnceCell;
use tracing::info;

use crate::errors::AppError;
use crate::generation::kind::DocumentKind;
use crate::generation::prompts::{
    COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_SYSTEM, RESUME_PROMPT_TEMPLATE, RESUME_SYSTEM,
    TAILORED_RESUME_PROMPT_TEMPLATE, TAILORED_RESUME_SYSTEM,
};

pub const RESUME_SLOT: &str = "{resume_yaml}";
pub const JOB_DESCRIPTION_SLOT: &str = "{job_description}";

const SYSTEM_FILE: &str = "system.txt";
const PROMPT_FILE: &str = "prompt.txt";

/// The text fragments used to build one model prompt. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptTemplate {
    pub kind: DocumentKind,
    pub system: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSource {
    /// Templates compiled into the binary.
    Embedded,
    /// `<root>/<kind slug>/system.txt` and `<root>/<kind slug>/prompt.txt`.
    Directory(PathBuf),
}

/// Per-kind template cache. Clones share the same cache.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    source: TemplateSource,
    cache: Arc<[OnceCell<Arc<PromptTemplate>>; 3]>,
}

impl TemplateLibrary {
    pub fn new(source: TemplateSource) -> Self {
        Self {
            source,
            cache: Arc::new([OnceCell::new(), OnceCell::new(), OnceCell::new()]),
        }
    }

    pub fn from_config(prompts_dir: Option<&Path>) -> Self {
        match prompts_dir {
            Some(dir) => Self::new(TemplateSource::Directory(dir.to_path_buf())),
            None => Self::new(TemplateSource::Embedded),
        }
    }

    /// Returns the template for `kind`, reading it on first use.
    /// A failed read is not cached; the next call tries again.
    pub async fn load(&self, kind: DocumentKind) -> Result<Arc<PromptTemplate>, AppError> {
        self.cache[kind.index()]
            .get_or_try_init(|| self.read(kind))
            .await
            .cloned()
    }

    async fn read(&self, kind: DocumentKind) -> Result<Arc<PromptTemplate>, AppError> {
        let template = match &self.source {
            TemplateSource::Embedded => {
                let (system, body) = embedded(kind);
                PromptTemplate {
                    kind,
                    system: system.to_string(),
                    body: body.to_string(),
                }
            }
            TemplateSource::Directory(root) => {
                let dir = root.join(kind.slug());
                PromptTemplate {
                    kind,
                    system: read_part(kind, &dir.join(SYSTEM_FILE)).await?,
                    body: read_part(kind, &dir.join(PROMPT_FILE)).await?,
                }
            }
        };

        validate(&template)?;
        info!("Loaded {} prompt template from {:?}", kind, self.source);
        Ok(Arc::new(template))
    }
}

fn embedded(kind: DocumentKind) -> (&'static str, &'static str) {
    match kind {
        DocumentKind::BaseResume => (RESUME_SYSTEM, RESUME_PROMPT_TEMPLATE),
        DocumentKind::TailoredResume => (TAILORED_RESUME_SYSTEM, TAILORED_RESUME_PROMPT_TEMPLATE),
        DocumentKind::CoverLetter => (COVER_LETTER_SYSTEM, COVER_LETTER_PROMPT_TEMPLATE),
    }
}

async fn read_part(kind: DocumentKind, path: &Path) -> Result<String, AppError> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(AppError::TemplateNotFound {
            kind,
            location: path.display().to_string(),
        }),
        Err(e) => Err(AppError::Internal(
            anyhow::Error::new(e)
                .context(format!("Failed to read prompt template {}", path.display())),
        )),
    }
}

/// Rejects templates that could never produce a usable prompt.
fn validate(template: &PromptTemplate) -> Result<(), AppError> {
    let mut required = vec![RESUME_SLOT];
    if template.kind.requires_job_description() {
        required.push(JOB_DESCRIPTION_SLOT);
    }

    if let Some(missing) = required.iter().find(|slot| !template.body.contains(**slot)) {
        return Err(AppError::Configuration(format!(
            "{} prompt template does not contain {missing}",
            template.kind
        )));
    }

    if template.system.trim().is_empty() {
        return Err(AppError::Configuration(format!(
            "{} system prompt is empty",
            template.kind
        )));
    }

    Ok(())
}

/// Eagerly loads every kind so misconfiguration is reported at startup.
pub async fn preload(library: &TemplateLibrary) -> anyhow::Result<()> {
    for kind in DocumentKind::ALL {
        library
            .load(kind)
            .await
            .with_context(|| format!("Prompt template for {kind} is unusable"))?;
    }
    Ok(())
}

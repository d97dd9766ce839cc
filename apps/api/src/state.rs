use std::sync::Arc;

use crate::config::Config;
use crate::generation::templates::TemplateLibrary;
use crate::llm_client::CompletionService;
use crate::styles::StyleRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub styles: Arc<StyleRegistry>,
    /// Prompt templates, cached per document kind after first load.
    pub templates: TemplateLibrary,
    /// Pluggable completion backend. Default: `LlmClient`.
    pub completion: Arc<dyn CompletionService>,
}

#[cfg(test)]
impl AppState {
    /// Built-in styles, embedded templates and no default API key.
    pub fn for_tests(completion: Arc<dyn CompletionService>) -> Self {
        use crate::generation::templates::TemplateSource;

        let config = Config::from_lookup(|_| None).expect("default config parses");
        AppState {
            config: Arc::new(config),
            styles: Arc::new(StyleRegistry::builtin()),
            templates: TemplateLibrary::new(TemplateSource::Embedded),
            completion,
        }
    }
}

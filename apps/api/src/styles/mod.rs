//! Style registry — the fixed, ordered set of stylesheets a page can be rendered with.
//!
//! Populated once at startup (built-in table or a directory of `.css` files)
//! and read-only afterwards.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;

mod builtin;

#[derive(Debug, Clone, PartialEq)]
pub struct StyleEntry {
    pub name: String,
    /// Raw CSS text, inserted into the page verbatim.
    pub stylesheet: String,
    pub attribution: String,
}

impl StyleEntry {
    pub fn new(
        name: impl Into<String>,
        stylesheet: impl Into<String>,
        attribution: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            stylesheet: stylesheet.into(),
            attribution: attribution.into(),
        }
    }
}

/// Public listing shape for `GET /api/styles`.
#[derive(Debug, Clone, Serialize)]
pub struct StyleSummary {
    pub name: String,
    pub author: String,
}

impl From<&StyleEntry> for StyleSummary {
    fn from(entry: &StyleEntry) -> Self {
        Self {
            name: entry.name.clone(),
            author: entry.attribution.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StyleRegistry {
    entries: Vec<StyleEntry>,
}

impl StyleRegistry {
    pub fn new(entries: Vec<StyleEntry>) -> Self {
        Self { entries }
    }

    /// The compiled-in table. The first entry is the fallback style.
    pub fn builtin() -> Self {
        Self::new(vec![
            StyleEntry::new("Professional", builtin::PROFESSIONAL_CSS, "AIHawk"),
            StyleEntry::new("Modern", builtin::MODERN_CSS, "AIHawk"),
            StyleEntry::new("Classic", builtin::CLASSIC_CSS, "AIHawk"),
        ])
    }

    /// Loads the registry from `styles_dir` when configured, otherwise the built-in table.
    pub fn load(styles_dir: Option<&Path>) -> Result<Self> {
        let registry = match styles_dir {
            Some(dir) => Self::from_dir(dir)?,
            None => Self::builtin(),
        };

        if registry.entries.is_empty() {
            warn!("Style registry is empty; generation requests will fail");
        } else {
            info!(
                "Style registry loaded: {}",
                registry
                    .entries
                    .iter()
                    .map(|s| s.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        Ok(registry)
    }

    /// Reads every `*.css` file in `dir`, ordered by file name.
    ///
    /// A first line of the form `/* Name $https://author.link */` supplies the
    /// display name and attribution; otherwise the file stem is the name.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut paths = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read styles directory {}", dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.is_file() && path.extension().map_or(false, |ext| ext == "css")
            })
            .collect::<Vec<_>>();
        paths.sort();

        let mut entries = Vec::with_capacity(paths.len());
        for path in paths {
            let stylesheet = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read stylesheet {}", path.display()))?;

            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();

            let (name, attribution) = stylesheet
                .lines()
                .next()
                .and_then(parse_header)
                .unwrap_or((stem, String::new()));

            entries.push(StyleEntry {
                name,
                stylesheet,
                attribution,
            });
        }

        Ok(Self::new(entries))
    }

    /// All registered styles in registration order.
    pub fn list(&self) -> &[StyleEntry] {
        &self.entries
    }

    /// Case-insensitive substring match on the style name.
    /// Unknown names fall back to the first registered style.
    pub fn resolve(&self, requested: &str) -> Result<&StyleEntry, AppError> {
        let fallback = self
            .entries
            .first()
            .ok_or_else(|| AppError::Configuration("no styles are registered".to_string()))?;

        let needle = requested.trim().to_lowercase();
        let matched = self
            .entries
            .iter()
            .find(|entry| entry.name.to_lowercase().contains(&needle));

        Ok(matched.unwrap_or(fallback))
    }
}

/// Parses `/* Name $attribution */`.
fn parse_header(line: &str) -> Option<(String, String)> {
    let inner = line.trim().strip_prefix("/*")?.strip_suffix("*/")?;
    let (name, attribution) = match inner.split_once('$') {
        Some((name, attribution)) => (name.trim(), attribution.trim()),
        None => (inner.trim(), ""),
    };
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), attribution.to_string()))
}

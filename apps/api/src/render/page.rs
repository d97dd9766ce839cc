use crate::render::placeholders::{substitute, PlaceholderError};
use crate::styles::StyleEntry;

const STYLE_SLOT: &str = "{style_css}";
const BODY_SLOT: &str = "{body}";

/// Standalone page shell. The fragment supplies its own `<body>` element.
pub const PAGE_SKELETON: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume</title>
    <style>{style_css}</style>
</head>
{body}
</html>"#;

/// Body-level HTML returned by the completion service. Never sanitized.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlFragment(String);

impl HtmlFragment {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wraps the fragment in `<body>` unless it already carries one.
    pub fn ensure_body(self) -> Self {
        if self.0.to_ascii_lowercase().contains("<body") {
            self
        } else {
            Self(format!("<body>{}</body>", self.0))
        }
    }
}

/// Wraps a fragment and a stylesheet into a full HTML document.
pub fn assemble(fragment: &HtmlFragment, style: &StyleEntry) -> Result<String, PlaceholderError> {
    assemble_with(PAGE_SKELETON, fragment, style)
}

pub fn assemble_with(
    skeleton: &str,
    fragment: &HtmlFragment,
    style: &StyleEntry,
) -> Result<String, PlaceholderError> {
    substitute(
        skeleton,
        &[
            (STYLE_SLOT, style.stylesheet.as_str()),
            (BODY_SLOT, fragment.as_str()),
        ],
    )
}

use std::fmt;

/// The three documents the service can produce. Determines which prompt
/// template and which validation rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    BaseResume,
    TailoredResume,
    CoverLetter,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::BaseResume,
        DocumentKind::TailoredResume,
        DocumentKind::CoverLetter,
    ];

    /// Stable identifier used in routes and template directory names.
    pub fn slug(self) -> &'static str {
        match self {
            DocumentKind::BaseResume => "resume",
            DocumentKind::TailoredResume => "resume-tailored",
            DocumentKind::CoverLetter => "cover-letter",
        }
    }

    pub fn requires_job_description(self) -> bool {
        !matches!(self, DocumentKind::BaseResume)
    }

    /// Position in `ALL`, used to index per-kind caches.
    pub(crate) fn index(self) -> usize {
        match self {
            DocumentKind::BaseResume => 0,
            DocumentKind::TailoredResume => 1,
            DocumentKind::CoverLetter => 2,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DocumentKind::BaseResume => "resume",
            DocumentKind::TailoredResume => "tailored resume",
            DocumentKind::CoverLetter => "cover letter",
        };
        f.write_str(label)
    }
}

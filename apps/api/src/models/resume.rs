//! Resume document model — the structured form of the YAML a user submits.
//!
//! Every section except `personal_information` is optional. Unknown top-level
//! keys are ignored. Field values are opaque text: no format validation.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;
use thiserror::Error;

const PERSONAL_INFORMATION: &str = "personal_information";

#[derive(Debug, Error)]
pub enum ResumeParseError {
    #[error("resume YAML is empty")]
    Empty,

    #[error("resume YAML is malformed: {0}")]
    Syntax(String),

    #[error("resume YAML must be a mapping at the top level")]
    NotAMapping,

    #[error("resume YAML is missing required section 'personal_information'")]
    MissingPersonalInformation,

    #[error("resume YAML has an invalid section: {0}")]
    InvalidSection(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInformation {
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub phone_prefix: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl PersonalInformation {
    /// "Name Surname", skipping whichever part is missing.
    pub fn full_name(&self) -> String {
        [self.name.as_deref(), self.surname.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationDetail {
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[serde(
        default,
        alias = "education_level",
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub level: Option<String>,
    #[serde(
        default,
        alias = "year_of_completion",
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub completion_year: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub final_evaluation_grade: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceDetail {
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(
        default,
        alias = "employment_period",
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub period: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(
        default,
        alias = "key_responsibilities",
        deserialize_with = "text_items",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub responsibilities: Vec<String>,
    #[serde(
        default,
        alias = "skills_acquired",
        deserialize_with = "text_items",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Language {
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<String>,
}

/// Shared shape for achievements and certifications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parsed resume. Constructed once per request and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub personal_information: PersonalInformation,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub education_details: Option<Vec<EducationDetail>>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub experience_details: Option<Vec<ExperienceDetail>>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub projects: Option<Vec<Project>>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub achievements: Option<Vec<Credential>>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub certifications: Option<Vec<Credential>>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub languages: Option<Vec<Language>>,
    #[serde(
        default,
        deserialize_with = "optional_text_items",
        skip_serializing_if = "is_absent"
    )]
    pub interests: Option<Vec<String>>,
}

impl ResumeDocument {
    /// Parses request-supplied YAML into a `ResumeDocument`.
    pub fn parse(yaml_text: &str) -> Result<Self, ResumeParseError> {
        if yaml_text.trim().is_empty() {
            return Err(ResumeParseError::Empty);
        }

        let value: Value = serde_yaml::from_str(yaml_text)
            .map_err(|e| ResumeParseError::Syntax(e.to_string()))?;

        let mapping = value.as_mapping().ok_or(ResumeParseError::NotAMapping)?;
        match mapping.get(PERSONAL_INFORMATION) {
            None | Some(Value::Null) => return Err(ResumeParseError::MissingPersonalInformation),
            Some(_) => {}
        }

        serde_yaml::from_value(value).map_err(|e| ResumeParseError::InvalidSection(e.to_string()))
    }

    /// Top-level sections present in the source document, in canonical order.
    pub fn sections(&self) -> Vec<&'static str> {
        let optional = [
            ("education_details", self.education_details.is_some()),
            ("experience_details", self.experience_details.is_some()),
            ("projects", self.projects.is_some()),
            ("achievements", self.achievements.is_some()),
            ("certifications", self.certifications.is_some()),
            ("languages", self.languages.is_some()),
            ("interests", self.interests.is_some()),
        ];

        std::iter::once(PERSONAL_INFORMATION)
            .chain(
                optional
                    .into_iter()
                    .filter(|(_, present)| *present)
                    .map(|(name, _)| name),
            )
            .collect()
    }

    /// Renders the document as YAML for inclusion in a model prompt.
    /// Absent and empty sections are omitted.
    pub fn to_prompt_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

fn is_absent<T>(section: &Option<Vec<T>>) -> bool {
    section.as_ref().map_or(true, Vec::is_empty)
}

const NESTED_TEXT: &str = "expected text, found a nested list or mapping";

/// Accepts any YAML scalar (years, zip codes and phone numbers are often
/// written unquoted) and keeps it as text.
fn scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value) => scalar_text(&value).map_err(D::Error::custom),
        None => Ok(None),
    }
}

fn scalar_text(value: &Value) -> Result<Option<String>, &'static str> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => Err(NESTED_TEXT),
    }
}

/// A list entry written either as plain text or as a mapping such as
/// `- responsibility: "Led the migration"`. Mapping values are joined in
/// document order.
fn item_text(value: &Value) -> Result<Option<String>, &'static str> {
    let Value::Mapping(map) = value else {
        return scalar_text(value);
    };

    let mut parts = Vec::with_capacity(map.len());
    for value in map.values() {
        parts.extend(scalar_text(value)?);
    }
    Ok((!parts.is_empty()).then(|| parts.join("; ")))
}

fn text_items<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text_items(deserializer)?.unwrap_or_default())
}

fn optional_text_items<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(items) = Option::<Vec<Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let mut texts = Vec::with_capacity(items.len());
    for item in &items {
        texts.extend(item_text(item).map_err(D::Error::custom)?);
    }
    Ok(Some(texts))
}

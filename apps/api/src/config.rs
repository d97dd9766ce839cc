use std::path::PathBuf;

use anyhow::{bail, Context, Result};

pub const DEFAULT_LLM_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TEMPERATURE: f32 = 0.4;
const DEFAULT_PORT: u16 = 8000;

/// Application configuration loaded from environment variables.
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fallback key used when a request does not carry its own.
    pub openai_api_key: Option<String>,
    pub llm_api_url: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    /// Directory of `.css` files. `None` selects the built-in style table.
    pub styles_dir: Option<PathBuf>,
    /// Directory of per-kind prompt templates. `None` selects the embedded set.
    pub prompts_dir: Option<PathBuf>,
    pub static_dir: PathBuf,
    pub sample_resume_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parses configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match optional("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        let llm_temperature = match optional("LLM_TEMPERATURE") {
            Some(raw) => raw
                .trim()
                .parse::<f32>()
                .with_context(|| format!("LLM_TEMPERATURE must be a number, got '{raw}'"))?,
            None => DEFAULT_TEMPERATURE,
        };
        if !(0.0..=2.0).contains(&llm_temperature) {
            bail!("LLM_TEMPERATURE must be between 0 and 2, got {llm_temperature}");
        }

        Ok(Config {
            openai_api_key: optional("OPENAI_API_KEY"),
            llm_api_url: optional("LLM_API_URL").unwrap_or_else(|| DEFAULT_LLM_API_URL.to_string()),
            llm_model: optional("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            llm_temperature,
            styles_dir: optional("STYLES_DIR").map(PathBuf::from),
            prompts_dir: optional("PROMPTS_DIR").map(PathBuf::from),
            static_dir: optional("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
            sample_resume_path: optional("SAMPLE_RESUME_PATH").map(PathBuf::from),
            port,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

use anyhow::{Context, Result};

const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/resume_app";
const DEFAULT_INFERENCE_API_URL: &str = "http://localhost:11434/api/generate";
const DEFAULT_INFERENCE_MODEL: &str = "qwen2.5:7b-instruct";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

/// Application configuration loaded from environment variables.
/// Every setting has a fallback default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub inference_api_url: String,
    pub inference_model: String,
    pub cors_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            database_url: var("DATABASE_URL", DEFAULT_DATABASE_URL),
            inference_api_url: var("INFERENCE_API_URL", DEFAULT_INFERENCE_API_URL),
            inference_model: var("INFERENCE_MODEL", DEFAULT_INFERENCE_MODEL),
            cors_origins: parse_origins(&var("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)),
            port: var("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG", "info"),
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::matching::KeywordPolicy;

const DEFAULT_MATCH_THRESHOLD: f64 = 80.0;
const DEFAULT_ADVICE_TIMEOUT_SECS: u64 = 20;

/// Application configuration loaded from environment variables.
/// Invalid values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// A catalog skill matches when its partial ratio is strictly above this.
    pub match_threshold: f64,
    /// Enables delegated advice when set.
    pub anthropic_api_key: Option<String>,
    pub advice_timeout_secs: u64,
    /// JSON registry file; the built-in registries are used when unset.
    pub registry_path: Option<PathBuf>,
    pub keyword_policy: KeywordPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key → value source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let optional = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let match_threshold = match optional("SKILL_MATCH_THRESHOLD") {
            Some(raw) => raw
                .parse::<f64>()
                .context("SKILL_MATCH_THRESHOLD must be a number")?,
            None => DEFAULT_MATCH_THRESHOLD,
        };
        if !(0.0..=100.0).contains(&match_threshold) {
            bail!("SKILL_MATCH_THRESHOLD must be between 0 and 100, got {match_threshold}");
        }

        let keyword_policy = match optional("KEYWORD_POLICY") {
            Some(raw) => raw.parse::<KeywordPolicy>()?,
            None => KeywordPolicy::default(),
        };

        Ok(Config {
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            match_threshold,
            anthropic_api_key: optional("ANTHROPIC_API_KEY"),
            advice_timeout_secs: match optional("ADVICE_TIMEOUT_SECS") {
                Some(raw) => raw
                    .parse::<u64>()
                    .context("ADVICE_TIMEOUT_SECS must be a whole number of seconds")?,
                None => DEFAULT_ADVICE_TIMEOUT_SECS,
            },
            registry_path: optional("REGISTRY_PATH").map(PathBuf::from),
            keyword_policy,
        })
    }
}

#[cfg(test)]
impl Config {
    /// Defaults without touching the process environment.
    pub fn for_tests() -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            anthropic_api_key: None,
            advice_timeout_secs: 1,
            registry_path: None,
            keyword_policy: KeywordPolicy::Substring,
        }
    }
}

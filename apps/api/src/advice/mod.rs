//! Advice Provider — per-role advice text, static or model-generated.
//!
//! `AppState` holds an `Arc<dyn AdviceProvider>`, chosen once at startup:
//! `LlmAdvisor` when an API key is configured, `StaticAdvisor` otherwise.
//! Callers treat any `Err` as "use the static advice for this role".

pub mod prompts;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::advice::prompts::ADVICE_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};
use crate::registry::Registry;

#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("advice request failed: {0}")]
    Llm(#[from] LlmError),

    #[error("advice request timed out after {0:?}")]
    Timeout(Duration),
}

#[async_trait]
pub trait AdviceProvider: Send + Sync {
    async fn advise(
        &self,
        role: &str,
        have: &[String],
        missing: &[String],
    ) -> Result<String, AdviceError>;

    /// "static" or "llm", for startup logs.
    fn backend(&self) -> &'static str;
}

/// Returns the registry's fixed advice for the role. Never fails.
pub struct StaticAdvisor {
    registry: Arc<Registry>,
}

impl StaticAdvisor {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl AdviceProvider for StaticAdvisor {
    async fn advise(
        &self,
        role: &str,
        _have: &[String],
        _missing: &[String],
    ) -> Result<String, AdviceError> {
        Ok(self.registry.advice_for(role).to_string())
    }

    fn backend(&self) -> &'static str {
        "static"
    }
}

/// Asks the model for a roadmap. Each call is bounded by `timeout`.
pub struct LlmAdvisor {
    llm: LlmClient,
    timeout: Duration,
}

impl LlmAdvisor {
    pub fn new(llm: LlmClient, timeout: Duration) -> Self {
        Self { llm, timeout }
    }
}

#[async_trait]
impl AdviceProvider for LlmAdvisor {
    async fn advise(
        &self,
        role: &str,
        have: &[String],
        missing: &[String],
    ) -> Result<String, AdviceError> {
        let prompt = build_advice_prompt(role, have, missing);
        match tokio::time::timeout(self.timeout, self.llm.call_text(&prompt, ADVICE_SYSTEM)).await
        {
            Ok(result) => Ok(result?),
            Err(_) => Err(AdviceError::Timeout(self.timeout)),
        }
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Labels and role are inserted as-is; nothing in them is treated as a placeholder.
pub fn build_advice_prompt(role: &str, have: &[String], missing: &[String]) -> String {
    format!(
        "I have these skills: {}. I want to be a {role}. Missing: {}. \
         Give me a 6-month roadmap.",
        format_list(have),
        format_list(missing),
    )
}

fn format_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("'{s}'")).collect();
    format!("[{}]", quoted.join(", "))
}

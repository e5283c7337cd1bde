use std::sync::Arc;

use crate::advice::AdviceProvider;
use crate::config::Config;
use crate::registry::Registry;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub registry: Arc<Registry>,
    /// Pluggable advice backend. StaticAdvisor unless ANTHROPIC_API_KEY is set.
    pub advisor: Arc<dyn AdviceProvider>,
}

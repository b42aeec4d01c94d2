use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable persistence. Default: `PgStore`.
    pub store: Arc<dyn ResumeStore>,
    pub llm: LlmClient,
}

//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::GuideConfig;
use crate::knowledge::KnowledgeBase;
use crate::responder::Responder;
use crate::session::SessionRegistry;

/// Shared application state.
pub struct AppState {
    /// Keyword-matching answer engine over the static knowledge base.
    pub responder: Responder,
    /// Live conversation sessions.
    pub sessions: SessionRegistry,
    /// Runtime configuration.
    pub config: GuideConfig,
}

impl AppState {
    /// Create application state with env-driven configuration and the
    /// built-in Giza knowledge base.
    ///
    /// # Errors
    /// Returns an error if the knowledge base fails invariant validation.
    pub fn new() -> Result<Arc<Self>, Box<dyn std::error::Error + Send + Sync>> {
        Self::with_config(GuideConfig::from_env())
    }

    /// Create application state with an explicit configuration.
    ///
    /// # Errors
    /// Returns an error if the knowledge base fails invariant validation.
    pub fn with_config(
        config: GuideConfig,
    ) -> Result<Arc<Self>, Box<dyn std::error::Error + Send + Sync>> {
        let base = KnowledgeBase::giza()
            .map_err(|e| format!("Failed to build knowledge base: {e}"))?;

        Ok(Arc::new(Self {
            responder: Responder::new(base),
            sessions: SessionRegistry::new(),
            config,
        }))
    }
}

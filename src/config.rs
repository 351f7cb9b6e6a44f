//! Configuration for the guide server.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default server port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default artificial pause before a reply, in milliseconds.
///
/// Presentation pacing only: the lookup itself is instantaneous, and the
/// short pause keeps the chat from feeling like a vending machine.
pub const DEFAULT_RESPONSE_DELAY_MS: u64 = 400;

/// Runtime configuration for the guide server.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuideConfig {
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Artificial pause before each reply, in milliseconds.
    pub response_delay_ms: u64,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            response_delay_ms: DEFAULT_RESPONSE_DELAY_MS,
        }
    }
}

impl GuideConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by the `GIZA_GUIDE_PORT` and
    /// `GIZA_GUIDE_DELAY_MS` environment variables, where set and parseable.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(port) = std::env::var("GIZA_GUIDE_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
        {
            config.port = port;
        }
        if let Some(delay) = std::env::var("GIZA_GUIDE_DELAY_MS")
            .ok()
            .and_then(|d| d.parse().ok())
        {
            config.response_delay_ms = delay;
        }
        config
    }

    /// Set the server port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the reply pacing delay in milliseconds. Zero disables it.
    #[must_use]
    pub const fn with_response_delay_ms(mut self, delay_ms: u64) -> Self {
        self.response_delay_ms = delay_ms;
        self
    }

    /// The pacing delay as a [`Duration`].
    #[must_use]
    pub const fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GuideConfig::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.response_delay_ms, DEFAULT_RESPONSE_DELAY_MS);
    }

    #[test]
    fn test_builder_setters() {
        let config = GuideConfig::new().with_port(8080).with_response_delay_ms(0);
        assert_eq!(config.port, 8080);
        assert_eq!(config.response_delay(), Duration::ZERO);
    }

    // set_var is unsafe in edition 2024; this is the only test touching
    // the process environment, so there is no cross-test interference.
    #[test]
    #[allow(unsafe_code)]
    fn test_env_overrides() {
        unsafe {
            std::env::set_var("GIZA_GUIDE_PORT", "8123");
            std::env::set_var("GIZA_GUIDE_DELAY_MS", "not-a-number");
        }
        let config = GuideConfig::from_env();
        assert_eq!(config.port, 8123);
        // Unparseable value falls back to the default
        assert_eq!(config.response_delay_ms, DEFAULT_RESPONSE_DELAY_MS);

        unsafe {
            std::env::remove_var("GIZA_GUIDE_PORT");
            std::env::set_var("GIZA_GUIDE_DELAY_MS", "0");
        }
        let config = GuideConfig::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.response_delay_ms, 0);

        unsafe {
            std::env::remove_var("GIZA_GUIDE_DELAY_MS");
        }
    }
}

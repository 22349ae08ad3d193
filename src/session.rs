//! Request-scoped credentials.
//!
//! Every backend operation takes a [`SessionContext`] explicitly instead of
//! reading credentials from global state, so the notes view and upload form
//! can be driven in tests with a fake backend and made-up tokens.

use crate::config::ClientConfig;
use crate::error::{Result, TempoError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    token: String,
    api_key: Option<String>,
}

impl SessionContext {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let key = api_key.into();
        self.api_key = if key.trim().is_empty() { None } else { Some(key) };
        self
    }

    /// Build a context from loaded configuration. Fails when no session
    /// token is configured; the API key stays optional until an upload.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let token = config
            .session_token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or(TempoError::MissingSessionToken)?;

        let mut ctx = Self::new(token);
        if let Some(key) = &config.api_key {
            ctx = ctx.with_api_key(key.clone());
        }
        Ok(ctx)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key().ok_or(TempoError::MissingApiKey)
    }

    /// Whether upload actions should be offered at all.
    pub fn can_upload(&self) -> bool {
        self.api_key.is_some()
    }
}

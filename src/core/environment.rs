//! Ambient configuration lookup
//!
//! The basemap credential falls back to an environment variable when the
//! caller does not pass one. The lookup goes through [`Environment`] so tests
//! can supply values without touching the real process environment.

use std::collections::HashMap;

use crate::core::constants::MAPBOX_API_KEY_ENV;

/// Read access to environment variables
pub trait Environment: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed set of variables, mostly useful in tests
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    vars: HashMap<String, String>,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl Environment for StaticEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Explicit value first, then `MAPBOX_API_KEY`. Empty strings count as unset.
pub fn resolve_credential(explicit: Option<String>, env: &dyn Environment) -> Option<String> {
    explicit
        .filter(|key| !key.is_empty())
        .or_else(|| env.var(MAPBOX_API_KEY_ENV).filter(|key| !key.is_empty()))
}

//! Application state for the Stay Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::{Clock, SystemClock};
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded hotel configuration and the clock used to decide what
/// "today" is for date bounds.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl AppState {
    /// Creates a new application state that reads the system clock.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Creates a new application state with an explicit clock.
    pub fn with_clock<C>(config: ConfigLoader, clock: C) -> Self
    where
        C: Clock + Send + Sync + 'static,
    {
        Self {
            config: Arc::new(config),
            clock: Arc::new(clock),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the clock.
    pub fn clock(&self) -> &(dyn Clock + Send + Sync) {
        self.clock.as_ref()
    }
}

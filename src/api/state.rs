//! Application state for the salary rate API.
//!
//! This module defines the shared application state that is available
//! to all request handlers, including the clock that supplies "today" for
//! requests that do not pin a reference date.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::calculation::SalaryRateEngine;
use crate::config::ConfigLoader;

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Shared application state.
///
/// Contains resources that are shared across all request handlers:
/// the loaded configuration, the engine built from it, and the clock.
#[derive(Clone)]
pub struct AppState {
    /// The loaded service configuration.
    config: Arc<ConfigLoader>,
    /// The engine built from the configuration.
    engine: SalaryRateEngine,
    /// The clock consulted when a request has no `as_of` date.
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new application state reading the system clock.
    pub fn new(config: ConfigLoader) -> Self {
        let engine = SalaryRateEngine::from_config(config.engine());
        Self {
            config: Arc::new(config),
            engine,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the salary rate engine.
    pub fn engine(&self) -> &SalaryRateEngine {
        &self.engine
    }

    /// Returns today's date according to the state's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

//! Configuration types for the salary rate service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section and field
//! has a default, so an empty file yields the reference behavior.

use serde::{Deserialize, Serialize};

use crate::calculation::DEFAULT_PAYMENT_DATE_INCLUSION;

/// Settings for the salary rate engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Whether the window start (payment) day counts as an accrued day.
    pub payment_date_inclusion: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            payment_date_inclusion: DEFAULT_PAYMENT_DATE_INCLUSION,
        }
    }
}

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The socket address the API listens on.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Engine settings.
    pub engine: EngineConfig,
    /// Server settings.
    pub server: ServerConfig,
}

//! Configuration loading and management for the salary rate service.
//!
//! This module loads the start-up configuration from a YAML file: the engine's
//! payment-date inclusion setting and the HTTP server settings.
//!
//! # Example
//!
//! ```no_run
//! use salary_rate::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/salary-rate.yaml").unwrap();
//! println!("Listening on {}", config.server().bind_address);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, EngineConfig, ServerConfig};

//! MongoDB connector and utilities
//!
//! Builds driver clients from [`MongoConfig`] and checks server health.

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::{client_from_config, client_options, database_from_config};
pub use health::{HealthStatus, check_health_detailed};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};

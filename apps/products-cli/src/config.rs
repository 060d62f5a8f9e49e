//! Configuration for the products CLI

use core_config::{ConfigError, Environment, FromEnv};
use database::mongodb::MongoConfig;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb: MongoConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let mut mongodb = MongoConfig::from_env()?;

        if mongodb.app_name.is_none() {
            mongodb = mongodb.with_app_name(env!("CARGO_PKG_NAME"));
        }

        Ok(Self {
            mongodb,
            environment,
        })
    }
}

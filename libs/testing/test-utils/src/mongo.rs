//! MongoDB test infrastructure
//!
//! Provides a `TestMongo` helper that runs a MongoDB container for testing.

use database::mongodb::{Database, MongoConfig, database_from_config};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::mongo::Mongo;

/// Test MongoDB wrapper that ensures proper cleanup
///
/// The container is automatically stopped and removed when this struct is dropped.
///
/// # Example
///
/// ```no_run
/// use test_utils::TestMongo;
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let config = mongo.config("my_test");
/// // Build your context/repository from `config`
/// # }
/// ```
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    pub connection_string: String,
}

impl TestMongo {
    /// Start a MongoDB 7 container
    pub async fn new() -> Self {
        let container = Mongo::default()
            .with_tag("7")
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host_port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let connection_string = format!("mongodb://127.0.0.1:{}", host_port);

        tracing::info!(port = host_port, "Test MongoDB ready (mongo:7)");

        Self {
            container,
            connection_string,
        }
    }

    /// Connection settings for a database on this server
    ///
    /// Use a distinct database name per test to keep tests independent.
    pub fn config(&self, database: &str) -> MongoConfig {
        MongoConfig::with_database(self.connection_string.clone(), database)
            .with_app_name("test-utils")
    }

    /// Handle to a database on this server
    pub async fn database(&self, database: &str) -> Database {
        database_from_config(&self.config(database))
            .await
            .expect("Failed to create MongoDB client")
    }

    /// Get the connection string for manual client creation
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }
}

// Container is automatically cleaned up when TestMongo is dropped
impl Drop for TestMongo {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test MongoDB container");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    #[ignore] // Requires Docker
    async fn test_mongo_ping() {
        let mongo = TestMongo::new().await;
        let db = mongo.database("ping_test").await;

        let reply = db.run_command(doc! { "ping": 1 }).await.unwrap();

        assert_eq!(reply.get("ok").and_then(|ok| ok.as_f64()), Some(1.0));
    }

    #[tokio::test]
    #[ignore] // Requires Docker
    async fn test_config_points_at_container() {
        let mongo = TestMongo::new().await;
        let config = mongo.config("config_test");

        assert_eq!(config.url(), mongo.connection_string());
        assert_eq!(config.database(), "config_test");
    }
}

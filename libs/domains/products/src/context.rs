//! Connection context: one database handle, one typed collection

use database::mongodb::{client_from_config, Collection, Database, MongoConfig};

use crate::error::ProductResult;
use crate::models::Product;

/// Collection name, identical to the entity type's name
pub const PRODUCT_COLLECTION: &str = "Product";

/// Owns the handle to the catalog database
///
/// Cloning is cheap: the driver's `Database` is a reference-counted handle,
/// and all clones share one connection pool.
#[derive(Clone, Debug)]
pub struct ProductContext {
    database: Database,
}

impl ProductContext {
    /// Build a context from configuration
    ///
    /// The server is not contacted. Only a connection string the driver
    /// cannot parse fails here; everything else surfaces on first use.
    pub async fn new(config: &MongoConfig) -> ProductResult<Self> {
        let client = client_from_config(config).await?;

        Ok(Self::from_database(client.database(config.database())))
    }

    /// Wrap a database handle the caller already owns
    pub fn from_database(database: Database) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Typed handle to the `Product` collection
    pub fn products(&self) -> Collection<Product> {
        self.database.collection::<Product>(PRODUCT_COLLECTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_collection_named_after_entity() {
        let config = MongoConfig::with_database("mongodb://127.0.0.1:1", "shop");
        let context = ProductContext::new(&config).await.unwrap();

        let products = context.products();

        assert_eq!(products.name(), "Product");
        assert_eq!(products.namespace().db, "shop");
        assert_eq!(context.database().name(), "shop");
    }

    #[tokio::test]
    async fn test_malformed_url_fails_at_construction() {
        let config = MongoConfig::with_database("localhost:27017", "shop");

        assert!(ProductContext::new(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_empty_database_name_is_not_checked() {
        let config = MongoConfig::with_database("mongodb://127.0.0.1:1", "");

        let context = ProductContext::new(&config).await.unwrap();

        assert_eq!(context.database().name(), "");
    }
}

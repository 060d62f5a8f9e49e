//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    Collection,
};
use tracing::instrument;

use crate::context::ProductContext;
use crate::error::{ProductError, ProductResult};
use crate::models::{parse_id, Product, ID_KEY};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
#[derive(Clone, Debug)]
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a repository over the context's `Product` collection
    pub fn new(context: &ProductContext) -> Self {
        Self::with_collection(context.products())
    }

    /// Create a repository over any collection of products
    pub fn with_collection(collection: Collection<Product>) -> Self {
        Self { collection }
    }

    /// `{ _id: ObjectId(id) }`, or `InvalidId` when `id` is not an ObjectId
    fn id_filter(id: &str) -> ProductResult<Document> {
        let oid = parse_id(id).ok_or_else(|| ProductError::InvalidId(id.to_string()))?;
        let mut filter = Document::new();
        filter.insert(ID_KEY, oid);
        Ok(filter)
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let cursor = self.collection.find(doc! {}).await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        tracing::debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let filter = Self::id_filter(id)?;
        let product = self.collection.find_one(filter).await?;

        tracing::debug!(found = product.is_some(), "Looked up product");
        Ok(product)
    }

    #[instrument(skip(self, product), fields(product_id = ?product.id))]
    async fn insert(&self, product: Product) -> ProductResult<String> {
        if let Some(ref id) = product.id {
            parse_id(id).ok_or_else(|| ProductError::InvalidId(id.clone()))?;
        }

        let result = self.collection.insert_one(&product).await?;
        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => return Err(ProductError::UnexpectedId(other.to_string())),
        };

        tracing::info!(product_id = %id, "Product inserted");
        Ok(id)
    }

    #[instrument(skip(self, product), fields(product_id = ?product.id))]
    async fn replace(&self, product: Product) -> ProductResult<bool> {
        let id = product.id.as_deref().ok_or(ProductError::MissingId)?;
        let filter = Self::id_filter(id)?;

        let result = self.collection.replace_one(filter, &product).await?;
        let matched = result.matched_count > 0;

        tracing::info!(matched, "Product replaced");
        Ok(matched)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> ProductResult<bool> {
        let filter = Self::id_filter(id)?;
        let result = self.collection.delete_one(filter).await?;
        let deleted = result.deleted_count > 0;

        tracing::info!(deleted, "Product deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::mongodb::MongoConfig;
    use mongodb::bson::oid::ObjectId;

    // Nothing listens on port 1; the client is lazy, so building it succeeds
    async fn unreachable_repository() -> MongoProductRepository {
        let config = MongoConfig::with_database("mongodb://127.0.0.1:1", "shop");
        let context = ProductContext::new(&config).await.unwrap();
        MongoProductRepository::new(&context)
    }

    #[test]
    fn test_id_filter_uses_object_id() {
        let oid = ObjectId::new();
        let filter = MongoProductRepository::id_filter(&oid.to_hex()).unwrap();

        assert_eq!(filter, doc! { "_id": oid });
    }

    #[test]
    fn test_id_filter_rejects_malformed_id() {
        let result = MongoProductRepository::id_filter("widget-1");

        assert!(matches!(result, Err(ProductError::InvalidId(id)) if id == "widget-1"));
    }

    #[test]
    fn test_id_filter_normalises_hex_case() {
        let oid = ObjectId::new();
        let filter = MongoProductRepository::id_filter(&oid.to_hex().to_uppercase()).unwrap();

        // Hex case does not change the identifier; nothing else is fuzzy
        assert_eq!(filter.get_object_id("_id").unwrap(), oid);
        assert_eq!(filter.len(), 1);
    }

    #[tokio::test]
    async fn test_insert_rejects_malformed_preset_id() {
        let repo = unreachable_repository().await;
        let product = Product::new("Widget", Default::default(), 1).with_id("widget-1");

        let result = repo.insert(product).await;

        assert!(matches!(result, Err(ProductError::InvalidId(id)) if id == "widget-1"));
    }

    #[tokio::test]
    async fn test_replace_rejects_malformed_id() {
        let repo = unreachable_repository().await;
        let product = Product::new("Widget", Default::default(), 1).with_id("widget-1");

        let result = repo.replace(product).await;

        assert!(matches!(result, Err(ProductError::InvalidId(id)) if id == "widget-1"));
    }
}

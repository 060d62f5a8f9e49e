use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// Each method is exactly one storage request. "Not found" is never an
/// error: reads return `None`, writes report whether anything matched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product in the collection, in storage order
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// The product whose id matches exactly
    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Insert one product, returning the id it is stored under
    async fn insert(&self, product: Product) -> ProductResult<String>;

    /// Replace the whole document with `product.id`; `true` if one matched
    async fn replace(&self, product: Product) -> ProductResult<bool>;

    /// Delete at most one product; `true` if one was removed
    async fn delete(&self, id: &str) -> ProductResult<bool>;
}

//! Product Service - the five catalog operations

use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::ProductRepository;

/// Product service
///
/// Every operation issues exactly one repository call and returns its result
/// or its error unchanged. The service keeps no state between calls, so
/// clones can be handed to concurrent tasks freely.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every product
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// Get a product by id; `None` when no product has that id
    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        self.repository.find_by_id(id).await
    }

    /// Add a product and return the id it was stored under
    ///
    /// When `product.id` is unset the database assigns one. The argument is
    /// consumed; use the returned id to address the stored product.
    #[instrument(skip(self, product), fields(product_name = ?product.product_name))]
    pub async fn add_product(&self, product: Product) -> ProductResult<String> {
        self.repository.insert(product).await
    }

    /// Replace the stored product that has `product.id`
    ///
    /// An id nobody has is not an error: nothing is written or created.
    #[instrument(skip(self, product), fields(product_id = ?product.id))]
    pub async fn update_product(&self, product: Product) -> ProductResult<()> {
        self.repository.replace(product).await?;
        Ok(())
    }

    /// Delete the product with `id`, if there is one
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

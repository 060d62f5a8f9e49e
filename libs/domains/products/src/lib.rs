//! Products Domain
//!
//! Data access for the product catalog, backed by MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Five CRUD operations, one request each
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Context   │  ← Database handle, typed `Product` collection
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product entity, field-mapping table
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::mongodb::MongoConfig;
//! use domain_products::{MongoProductRepository, Product, ProductContext, ProductService};
//! use rust_decimal::Decimal;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "shop");
//! let context = ProductContext::new(&config).await?;
//! let service = ProductService::new(MongoProductRepository::new(&context));
//!
//! let id = service
//!     .add_product(Product::new("Widget", Decimal::new(999, 2), 10))
//!     .await?;
//! let stored = service.get_product_by_id(&id).await?;
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod error;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use crate::mongodb::MongoProductRepository;
pub use context::{ProductContext, PRODUCT_COLLECTION};
pub use error::{ProductError, ProductResult};
pub use models::{FieldMapping, Product, FIELDS};
pub use repository::ProductRepository;
pub use service::ProductService;

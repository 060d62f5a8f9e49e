use mongodb::{Client, Database, options::ClientOptions};
use std::time::Duration;
use tracing::{debug, instrument};

use super::MongoConfig;
use crate::common::DatabaseResult;

/// Parse the connection string and apply the pool and timeout settings
///
/// Only the URL is parsed; no network traffic happens here for plain
/// `mongodb://` URLs. `mongodb+srv://` URLs resolve DNS records while parsing.
pub async fn client_options(config: &MongoConfig) -> DatabaseResult<ClientOptions> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    Ok(options)
}

/// Build a client from a MongoConfig without contacting the server
///
/// The driver connects lazily, so an unreachable server surfaces on the first
/// operation rather than here.
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, client_from_config};
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "shop");
/// let client = client_from_config(&config).await?;
/// ```
#[instrument(skip(config), fields(database = %config.database))]
pub async fn client_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    let options = client_options(config).await?;
    let client = Client::with_options(options)?;

    debug!("MongoDB client created");
    Ok(client)
}

/// Build a client and return a handle to the configured database
pub async fn database_from_config(config: &MongoConfig) -> DatabaseResult<Database> {
    let client = client_from_config(config).await?;
    Ok(client.database(&config.database))
}

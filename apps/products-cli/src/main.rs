//! Products CLI
//!
//! Lists, reads, adds, replaces and deletes catalog products in MongoDB.
//! Connection settings come from `MONGODB_URL` and `MONGODB_DATABASE`.

use clap::{Parser, Subcommand};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::check_health_detailed;
use domain_products::{MongoProductRepository, Product, ProductContext, ProductService};
use eyre::{Result, WrapErr};
use rust_decimal::Decimal;
use tracing::info;

mod config;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "products")]
#[command(about = "Manage products in the catalog database")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// List every product
    List,

    /// Show one product
    Get {
        /// Product id (24-character hex ObjectId)
        id: String,
    },

    /// Add a product; prints the id it was stored under
    Add {
        #[command(flatten)]
        fields: ProductFields,
    },

    /// Replace a product with new values
    Update {
        /// Product id (24-character hex ObjectId)
        id: String,

        #[command(flatten)]
        fields: ProductFields,
    },

    /// Delete a product
    Delete {
        /// Product id (24-character hex ObjectId)
        id: String,
    },

    /// Check that the database answers
    Ping,
}

#[derive(clap::Args, Debug, PartialEq)]
struct ProductFields {
    /// Product name
    #[arg(short, long)]
    name: Option<String>,

    /// Unit price, e.g. 9.99
    #[arg(short, long)]
    price: Decimal,

    /// Units in stock
    #[arg(short, long, allow_negative_numbers = true)]
    quantity: i32,
}

impl ProductFields {
    fn into_product(self) -> Product {
        Product {
            id: None,
            product_name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let cli = Cli::parse();

    let config = Config::from_env().wrap_err("Failed to load configuration")?;
    init_tracing(&config.environment);

    info!(database = %config.mongodb.database(), "Opening product catalog");
    let context = ProductContext::new(&config.mongodb)
        .await
        .wrap_err("Failed to create MongoDB client")?;
    let service = ProductService::new(MongoProductRepository::new(&context));

    run(cli.command, &context, &service).await
}

async fn run(
    command: Commands,
    context: &ProductContext,
    service: &ProductService<MongoProductRepository>,
) -> Result<()> {
    match command {
        Commands::List => {
            let products = service.get_products().await?;
            println!("ID\tNAME\tPRICE\tQUANTITY");
            for product in &products {
                println!("{product}");
            }
            info!(count = products.len(), "Listed products");
        }

        Commands::Get { id } => match service.get_product_by_id(&id).await? {
            Some(product) => println!("{product}"),
            None => eprintln!("No product with id {id}"),
        },

        Commands::Add { fields } => {
            let id = service.add_product(fields.into_product()).await?;
            println!("{id}");
        }

        Commands::Update { id, fields } => {
            let product = fields.into_product().with_id(id.clone());
            service.update_product(product).await?;
            println!("{id}");
        }

        Commands::Delete { id } => {
            service.delete_product(&id).await?;
            println!("{id}");
        }

        Commands::Ping => {
            let status = check_health_detailed(context.database()).await;
            if !status.healthy {
                eyre::bail!(
                    "MongoDB unreachable after {}ms: {}",
                    status.response_time_ms,
                    status.message.unwrap_or_default()
                );
            }
            println!("ok ({}ms)", status.response_time_ms);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(std::iter::once("products").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn test_parse_add() {
        let command = parse(&[
            "add", "--name", "Widget", "--price", "9.99", "--quantity", "10",
        ]);

        assert_eq!(
            command,
            Commands::Add {
                fields: ProductFields {
                    name: Some("Widget".to_string()),
                    price: Decimal::from_str("9.99").unwrap(),
                    quantity: 10,
                },
            }
        );
    }

    #[test]
    fn test_parse_update_without_name() {
        let command = parse(&[
            "update",
            "65a1f0c2e4b0a1b2c3d4e5f6",
            "-p",
            "1.50",
            "-q",
            "-2",
        ]);

        let Commands::Update { id, fields } = command else {
            panic!("expected the update subcommand");
        };
        assert_eq!(id, "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(
            fields.into_product(),
            Product {
                id: None,
                product_name: None,
                price: Decimal::from_str("1.50").unwrap(),
                quantity: -2,
            }
        );
    }

    #[test]
    fn test_parse_get_and_delete() {
        assert_eq!(
            parse(&["get", "abc"]),
            Commands::Get {
                id: "abc".to_string()
            }
        );
        assert_eq!(
            parse(&["delete", "abc"]),
            Commands::Delete {
                id: "abc".to_string()
            }
        );
        assert_eq!(parse(&["list"]), Commands::List);
        assert_eq!(parse(&["ping"]), Commands::Ping);
    }

    #[test]
    fn test_add_requires_price() {
        let result =
            Cli::try_parse_from(["products", "add", "--name", "Widget", "--quantity", "1"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_numeric_price() {
        let result =
            Cli::try_parse_from(["products", "add", "--price", "cheap", "--quantity", "1"]);

        assert!(result.is_err());
    }
}

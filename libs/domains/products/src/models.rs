use mongodb::bson::{oid::ObjectId, spec::ElementType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage key of the document identifier
pub const ID_KEY: &str = "_id";
/// Storage key of the product name
pub const PRODUCT_NAME_KEY: &str = "ProductName";
/// Storage key of the price
pub const PRICE_KEY: &str = "Price";
/// Storage key of the quantity
pub const QUANTITY_KEY: &str = "Quantity";

/// One row of the document mapping: Rust field ↔ storage key ↔ BSON type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub field: &'static str,
    pub key: &'static str,
    pub bson_type: ElementType,
    /// Whether the key may be absent or null in a stored document
    pub optional: bool,
}

/// How a [`Product`] is laid out in the `Product` collection
///
/// The serde attributes on [`Product`] implement this table; the tests below
/// keep the two in agreement.
pub const FIELDS: [FieldMapping; 4] = [
    FieldMapping {
        field: "id",
        key: ID_KEY,
        bson_type: ElementType::ObjectId,
        optional: true,
    },
    FieldMapping {
        field: "product_name",
        key: PRODUCT_NAME_KEY,
        bson_type: ElementType::String,
        optional: true,
    },
    FieldMapping {
        field: "price",
        key: PRICE_KEY,
        bson_type: ElementType::String,
        optional: false,
    },
    FieldMapping {
        field: "quantity",
        key: QUANTITY_KEY,
        bson_type: ElementType::Int32,
        optional: false,
    },
];

/// Product entity - the only document type in the catalog
///
/// `id` is `None` until the product has been stored; on insert the server
/// assigns an ObjectId, exposed here as its 24-character hex form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    #[serde(
        rename = "_id",
        with = "object_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    /// Exact decimal, stored as its string rendering so no precision is lost
    pub price: Decimal,
    pub quantity: i32,
}

impl Product {
    /// Create an unsaved product (no id yet)
    pub fn new(product_name: impl Into<String>, price: Decimal, quantity: i32) -> Self {
        Self {
            id: None,
            product_name: Some(product_name.into()),
            price,
            quantity,
        }
    }

    /// Same product, keyed by `id`
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.id.as_deref().unwrap_or("-"),
            self.product_name.as_deref().unwrap_or("-"),
            self.price,
            self.quantity
        )
    }
}

/// Maps `Option<String>` (hex) onto a BSON ObjectId
pub(crate) mod object_id {
    use mongodb::bson::oid::ObjectId;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(id: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match id {
            Some(hex) => ObjectId::parse_str(hex)
                .map_err(serde::ser::Error::custom)?
                .serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<ObjectId>::deserialize(deserializer)?.map(|oid| oid.to_hex()))
    }
}

/// Parse a caller-supplied id into the storage representation
pub fn parse_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

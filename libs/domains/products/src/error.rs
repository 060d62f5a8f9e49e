use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    /// Any driver or server failure, passed through untouched
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Client construction failed (e.g. unparseable connection string)
    #[error(transparent)]
    Connection(#[from] database::DatabaseError),

    #[error("Invalid product id '{0}': expected a 24-character hex ObjectId")]
    InvalidId(String),

    #[error("Product has no id; an id is required to replace it")]
    MissingId,

    #[error("Server assigned an id that is not an ObjectId: {0}")]
    UnexpectedId(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    /// Whether the server rejected a write because the `_id` already exists
    pub fn is_duplicate_key(&self) -> bool {
        use mongodb::error::{ErrorKind, WriteFailure};

        match self {
            ProductError::Database(err) => matches!(
                err.kind.as_ref(),
                ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000
            ),
            _ => false,
        }
    }
}

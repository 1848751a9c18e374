//! Error types for the Product actor.

use thiserror::Error;

use crate::framework::FrameworkError;
use crate::model::FieldError;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The path identifier is not a syntactically valid document id.
    #[error("The ID {0} is not a valid document identifier")]
    InvalidIdentifier(String),

    /// The requested product was not found.
    #[error("Product with ID {0} does not exist")]
    NotFound(String),

    /// The request body cannot become a product.
    #[error("{0}")]
    InvalidField(#[from] FieldError),

    /// `idSupplier` is malformed or names no existing supplier.
    #[error("The supplier ID {0} is not valid")]
    InvalidReference(String),

    /// The store (or the supplier store consulted on its behalf) failed.
    #[error("Product store failure: {0}")]
    StoreFailure(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(err) => *err,
                Err(other) => ProductError::StoreFailure(other.to_string()),
            },
            other => ProductError::StoreFailure(other.to_string()),
        }
    }
}

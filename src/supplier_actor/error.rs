//! Error types for the Supplier actor.

use thiserror::Error;

use crate::framework::FrameworkError;
use crate::model::FieldError;

/// Errors that can occur during supplier operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SupplierError {
    /// The path identifier is not a syntactically valid document id.
    #[error("The ID {0} is not a valid document identifier")]
    InvalidIdentifier(String),

    /// The requested supplier was not found.
    #[error("Supplier with ID {0} does not exist")]
    NotFound(String),

    /// The request body cannot become a supplier.
    #[error("{0}")]
    InvalidField(#[from] FieldError),

    /// The store could not be reached or failed internally.
    #[error("Supplier store failure: {0}")]
    StoreFailure(String),
}

impl From<FrameworkError> for SupplierError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => SupplierError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<SupplierError>() {
                Ok(err) => *err,
                Err(other) => SupplierError::StoreFailure(other.to_string()),
            },
            other => SupplierError::StoreFailure(other.to_string()),
        }
    }
}

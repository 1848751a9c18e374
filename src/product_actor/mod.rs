//! Product-specific resource logic, including supplier reference checks.

pub mod entity;
pub mod error;
mod filter;

pub use error::*;
pub use filter::*;

use crate::clients::ProductClient;
use crate::framework::ResourceActor;
use crate::model::{Product, ProductId};

/// Creates a new Product actor and its client.
///
/// The actor needs an [`IntegrityCoordinator`](crate::integrity::IntegrityCoordinator)
/// as its run context; see [`CatalogSystem`](crate::lifecycle::CatalogSystem).
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ProductId::generate);
    let client = ProductClient::new(generic_client);

    (actor, client)
}

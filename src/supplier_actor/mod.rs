//! Supplier-specific resource logic.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::SupplierClient;
use crate::framework::ResourceActor;
use crate::model::{Supplier, SupplierId};

/// Creates a new Supplier actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Supplier>, SupplierClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, SupplierId::generate);
    let client = SupplierClient::new(generic_client);

    (actor, client)
}

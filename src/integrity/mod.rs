//! Cross-collection rules between suppliers and products.
//!
//! - Every stored product references an existing supplier. The Product actor
//!   checks this through an [`IntegrityCoordinator`] before each write.
//! - Deleting a supplier removes its products. [`CascadeCoordinator`] runs
//!   the two deletes in sequence.
//!
//! Only the Product actor calls into the Supplier actor; the Supplier actor
//! never waits on products. The cascade is driven from outside both actors,
//! so no request cycle between them can form.

mod cascade;

pub use cascade::*;

use async_trait::async_trait;

use crate::clients::{ActorClient, SupplierClient};
use crate::model::{Supplier, SupplierId};
use crate::supplier_actor::SupplierError;

/// Resolves supplier references on behalf of the product store.
#[async_trait]
pub trait IntegrityCoordinator: Send + Sync {
    /// Returns the supplier if it currently exists.
    async fn resolve_supplier(&self, id: SupplierId) -> Result<Option<Supplier>, SupplierError>;
}

#[async_trait]
impl IntegrityCoordinator for SupplierClient {
    async fn resolve_supplier(&self, id: SupplierId) -> Result<Option<Supplier>, SupplierError> {
        Ok(self.inner().get(id).await?)
    }
}

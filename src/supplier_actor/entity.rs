//! [`ActorEntity`] implementation for [`Supplier`].
//!
//! Suppliers have no dependencies of their own, so the context is `()` and
//! the hooks only apply already-validated drafts.

use async_trait::async_trait;

use super::SupplierError;
use crate::framework::ActorEntity;
use crate::model::{Supplier, SupplierDraft, SupplierId};

#[async_trait]
impl ActorEntity for Supplier {
    type Id = SupplierId;
    type Create = SupplierDraft;
    type Update = SupplierDraft;
    type Filter = ();
    type Context = ();
    type Error = SupplierError;

    fn from_create_params(id: SupplierId, params: SupplierDraft) -> Result<Self, SupplierError> {
        Ok(Self::new(id, params))
    }

    fn matches(&self, _filter: &()) -> bool {
        true
    }

    /// Replaces every attribute; `email` survives when the update omits it.
    async fn on_update(&mut self, update: SupplierDraft, _ctx: &()) -> Result<(), SupplierError> {
        self.apply(update);
        Ok(())
    }
}

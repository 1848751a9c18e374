//! [`ActorEntity`] implementation for [`Product`].
//!
//! Products depend on suppliers: every create and update resolves
//! `idSupplier` through the injected [`IntegrityCoordinator`] before the
//! record is written. A rejected reference leaves the store untouched.
//! Updates resolve the reference before the target product is looked up,
//! so a bad reference is reported even when the product does not exist.

use async_trait::async_trait;
use std::sync::Arc;

use super::{ProductError, ProductFilter};
use crate::framework::ActorEntity;
use crate::integrity::IntegrityCoordinator;
use crate::model::{Product, ProductDraft, ProductId, SupplierId};

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductDraft;
    type Update = ProductDraft;
    type Filter = ProductFilter;
    type Context = Arc<dyn IntegrityCoordinator>;
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductDraft) -> Result<Self, ProductError> {
        let supplier = parse_reference(&params.id_supplier)?;
        Ok(Self::new(id, params, supplier))
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        match filter {
            ProductFilter::NameContains(needle) => self.name.to_lowercase().contains(needle.as_str()),
            ProductFilter::Supplier(id) => self.id_supplier == *id,
        }
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), ProductError> {
        require_supplier(ctx.as_ref(), self.id_supplier).await
    }

    async fn before_update(update: &ProductDraft, ctx: &Self::Context) -> Result<(), ProductError> {
        let supplier = parse_reference(&update.id_supplier)?;
        require_supplier(ctx.as_ref(), supplier).await
    }

    async fn on_update(&mut self, update: ProductDraft, _ctx: &Self::Context) -> Result<(), ProductError> {
        let supplier = parse_reference(&update.id_supplier)?;
        self.apply(update, supplier);
        Ok(())
    }
}

fn parse_reference(raw: &str) -> Result<SupplierId, ProductError> {
    raw.parse()
        .map_err(|_| ProductError::InvalidReference(raw.to_string()))
}

async fn require_supplier(
    coordinator: &dyn IntegrityCoordinator,
    id: SupplierId,
) -> Result<(), ProductError> {
    match coordinator.resolve_supplier(id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ProductError::InvalidReference(id.to_string())),
        Err(e) => Err(ProductError::StoreFailure(e.to_string())),
    }
}

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, instrument};

use crate::clients::{ProductClient, SupplierClient};
use crate::model::{Supplier, SupplierId};
use crate::product_actor::ProductError;
use crate::supplier_actor::SupplierError;

/// Outcome of a supplier delete: the removed supplier and how many products went with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierRemoval {
    pub supplier: Supplier,
    pub products: CascadeSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeSummary {
    pub deleted_count: usize,
}

#[derive(Debug, Error)]
pub enum CascadeError {
    /// The supplier delete itself failed; nothing was removed.
    #[error(transparent)]
    Supplier(#[from] SupplierError),

    /// The supplier is gone but some of its products may remain.
    #[error("Supplier {supplier_id} was deleted but its products could not be removed: {source}")]
    CascadeFailed {
        supplier_id: SupplierId,
        source: ProductError,
    },
}

/// Deletes suppliers together with the products that reference them.
#[derive(Clone)]
pub struct CascadeCoordinator {
    suppliers: SupplierClient,
    products: ProductClient,
}

impl CascadeCoordinator {
    pub fn new(suppliers: SupplierClient, products: ProductClient) -> Self {
        Self {
            suppliers,
            products,
        }
    }

    /// Removes the supplier, then every product referencing it.
    ///
    /// The two steps are not atomic. When the second fails the supplier stays
    /// deleted and the error is [`CascadeError::CascadeFailed`].
    #[instrument(skip(self))]
    pub async fn delete_supplier(&self, id: &str) -> Result<SupplierRemoval, CascadeError> {
        let supplier = self.suppliers.delete_supplier(id).await?;

        match self.products.delete_by_supplier(supplier.id).await {
            Ok(deleted_count) => {
                info!(supplier_id = %supplier.id, deleted_count, "Supplier removed with its products");
                Ok(SupplierRemoval {
                    supplier,
                    products: CascadeSummary { deleted_count },
                })
            }
            Err(source) => {
                error!(supplier_id = %supplier.id, error = %source, "Cascade delete failed");
                Err(CascadeError::CascadeFailed {
                    supplier_id: supplier.id,
                    source,
                })
            }
        }
    }
}

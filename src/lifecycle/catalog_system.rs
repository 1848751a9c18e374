use std::sync::Arc;

use tracing::{error, info};

use crate::clients::{ProductClient, SupplierClient};
use crate::http::AppState;
use crate::integrity::{CascadeCoordinator, IntegrityCoordinator};

/// The runtime orchestrator for the supplier and product collections.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping both actors
/// - **Dependency Wiring**: Handing the Product actor a supplier resolver
///
/// # Architecture
///
/// - **Supplier Actor**: Stores suppliers. No dependencies (`Context = ()`).
/// - **Product Actor**: Stores products. Its context is the
///   [`SupplierClient`], seen through [`IntegrityCoordinator`], used to
///   resolve `idSupplier` on every write.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(32);
///
/// let supplier = system.supplier_client.create_supplier(payload).await?;
/// let removal = system.cascade().delete_supplier(&supplier.id.to_string()).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for interacting with the Supplier actor
    pub supplier_client: SupplierClient,

    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Creates both actors, wires them, and spawns each in its own task.
    ///
    /// `channel_capacity` bounds each actor's mailbox and must be at least 1.
    pub fn new(channel_capacity: usize) -> Self {
        // 1. Create actors (no dependencies yet)
        let (supplier_actor, supplier_client) = crate::supplier_actor::new(channel_capacity);
        let (product_actor, product_client) = crate::product_actor::new(channel_capacity);

        // 2. Start actors with injected context
        let supplier_handle = tokio::spawn(supplier_actor.run(()));

        let resolver: Arc<dyn IntegrityCoordinator> = Arc::new(supplier_client.clone());
        let product_handle = tokio::spawn(product_actor.run(resolver));

        Self {
            supplier_client,
            product_client,
            handles: vec![supplier_handle, product_handle],
        }
    }

    /// Coordinator for supplier deletes that also remove products.
    pub fn cascade(&self) -> CascadeCoordinator {
        CascadeCoordinator::new(self.supplier_client.clone(), self.product_client.clone())
    }

    /// Handler state for the HTTP router.
    pub fn app_state(&self) -> AppState {
        AppState::new(self.supplier_client.clone(), self.product_client.clone())
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes the product channel once every other clone
    /// (router state, coordinators) is gone. The Product actor then exits and
    /// drops its supplier resolver, which closes the supplier channel in turn.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog...");

        drop(self.product_client);
        drop(self.supplier_client);

        for handle in self.handles {
            // If the task panicked, this will return an Err
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}

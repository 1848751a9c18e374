use crate::clients::actor_client::ActorClient;
use crate::framework::ResourceClient;
use crate::model::{Supplier, SupplierPayload};
use crate::supplier_actor::SupplierError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Supplier actor.
///
/// Payloads are validated here, before anything is sent to the actor.
#[derive(Clone)]
pub struct SupplierClient {
    inner: ResourceClient<Supplier>,
}

impl SupplierClient {
    pub fn new(inner: ResourceClient<Supplier>) -> Self {
        Self { inner }
    }

    pub async fn list_suppliers(&self) -> Result<Vec<Supplier>, SupplierError> {
        self.list(None).await
    }

    pub async fn get_supplier(&self, id: &str) -> Result<Supplier, SupplierError> {
        self.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn create_supplier(&self, payload: SupplierPayload) -> Result<Supplier, SupplierError> {
        let draft = payload.into_draft()?;
        debug!("Sending request");
        Ok(self.inner.create(draft).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_supplier(
        &self,
        id: &str,
        payload: SupplierPayload,
    ) -> Result<Supplier, SupplierError> {
        let id = Self::parse_id(id)?;
        let draft = payload.into_draft()?;
        debug!("Sending request");
        Ok(self.inner.update(id, draft).await?)
    }

    /// Removes the supplier record only. Use
    /// [`CascadeCoordinator`](crate::integrity::CascadeCoordinator) to remove
    /// its products as well.
    pub async fn delete_supplier(&self, id: &str) -> Result<Supplier, SupplierError> {
        self.delete(id).await
    }
}

#[async_trait]
impl ActorClient<Supplier> for SupplierClient {
    type Error = SupplierError;

    fn inner(&self) -> &ResourceClient<Supplier> {
        &self.inner
    }

    fn invalid_identifier(raw: &str) -> SupplierError {
        SupplierError::InvalidIdentifier(raw.to_string())
    }
}

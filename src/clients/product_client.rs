use crate::clients::actor_client::ActorClient;
use crate::framework::ResourceClient;
use crate::model::{Product, ProductPayload, SupplierId};
use crate::product_actor::{ProductError, ProductFilter};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
///
/// Presence checks happen here. The supplier reference is resolved by the
/// Product actor's `on_create`/`before_update` hooks, so a create can still fail
/// with [`ProductError::InvalidReference`] after it reaches the actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Lists products; `name` narrows to a case-insensitive substring match.
    pub async fn list_products(&self, name: Option<&str>) -> Result<Vec<Product>, ProductError> {
        self.list(name.map(ProductFilter::name_contains)).await
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, ProductError> {
        self.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, payload: ProductPayload) -> Result<Product, ProductError> {
        let draft = payload.into_draft()?;
        debug!("Sending request");
        Ok(self.inner.create(draft).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: &str,
        payload: ProductPayload,
    ) -> Result<Product, ProductError> {
        let id = Self::parse_id(id)?;
        let draft = payload.into_draft()?;
        debug!("Sending request");
        Ok(self.inner.update(id, draft).await?)
    }

    pub async fn delete_product(&self, id: &str) -> Result<Product, ProductError> {
        self.delete(id).await
    }

    /// Removes every product referencing `supplier`, returning how many were removed.
    #[instrument(skip(self))]
    pub async fn delete_by_supplier(&self, supplier: SupplierId) -> Result<usize, ProductError> {
        debug!("Sending request");
        Ok(self.inner.delete_where(ProductFilter::Supplier(supplier)).await?)
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn invalid_identifier(raw: &str) -> ProductError {
        ProductError::InvalidIdentifier(raw.to_string())
    }
}

use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit the standard operations.
///
/// Identifiers arrive as raw text from request paths. Every operation here
/// parses the id first and fails with [`ActorClient::invalid_identifier`]
/// without contacting the store when the text is not a valid id.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The collection-specific error type.
    type Error: From<FrameworkError> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Error reported for a syntactically invalid identifier.
    fn invalid_identifier(raw: &str) -> Self::Error;

    /// Parses a raw identifier.
    fn parse_id(raw: &str) -> Result<T::Id, Self::Error> {
        raw.parse().map_err(|_| Self::invalid_identifier(raw))
    }

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: &str) -> Result<T, Self::Error> {
        let id = Self::parse_id(id)?;
        tracing::debug!("Sending request");
        match self.inner().get(id.clone()).await? {
            Some(item) => Ok(item),
            None => Err(FrameworkError::NotFound(id.to_string()).into()),
        }
    }

    /// List records in store order, optionally filtered.
    #[tracing::instrument(skip(self))]
    async fn list(&self, filter: Option<T::Filter>) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        Ok(self.inner().list(filter).await?)
    }

    /// Delete a record by ID, returning it.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<T, Self::Error> {
        let id = Self::parse_id(id)?;
        tracing::debug!("Sending request");
        Ok(self.inner().delete(id).await?)
    }
}

use crate::model::{Part, PartId};
use crate::session::{FrameworkError, SessionClient};
use async_trait::async_trait;

/// Trait for domain clients to inherit the read-only and delete operations.
///
/// Implementors supply the inner [`SessionClient`] and an error mapping;
/// `get`, `list`, `ids` and `delete` come for free.
#[async_trait]
pub trait ActorClient: Send + Sync {
    /// The domain error type.
    type Error: Send + Sync;

    /// Access the inner SessionClient.
    fn inner(&self) -> &SessionClient;

    /// Map session errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a part by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: PartId) -> Result<Option<Part>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Every part, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Part>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Every part id, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn ids(&self) -> Result<Vec<PartId>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().ids().await.map_err(Self::map_error)
    }

    /// Delete a part by id, returning the removed record.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: PartId) -> Result<Part, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}

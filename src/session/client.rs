//! # Session Client
//!
//! This module defines the low-level client for communicating with the
//! [`InventoryActor`](super::InventoryActor).

use crate::inventory::Snapshot;
use crate::model::{Money, Part, PartId, PartUpdate};
use crate::session::{FrameworkError, InventoryRequest};
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle for sending requests to an `InventoryActor`.
///
/// Holds only a sender, so cloning is cheap. Every method resolves to
/// `Result<_, FrameworkError>`; domain failures arrive as
/// [`FrameworkError::Inventory`].
#[derive(Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<InventoryRequest>,
}

impl SessionClient {
    pub fn new(sender: mpsc::Sender<InventoryRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, FrameworkError>>) -> InventoryRequest,
    ) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn add(&self, part: Part) -> Result<PartId, FrameworkError> {
        self.request(|respond_to| InventoryRequest::Add { part, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<Part>, FrameworkError> {
        self.request(|respond_to| InventoryRequest::List { respond_to })
            .await
    }

    /// The listing and its total from a single turn of the actor.
    pub async fn snapshot(&self) -> Result<Snapshot, FrameworkError> {
        self.request(|respond_to| InventoryRequest::Snapshot { respond_to })
            .await
    }

    pub async fn get(&self, id: PartId) -> Result<Option<Part>, FrameworkError> {
        self.request(|respond_to| InventoryRequest::Get { id, respond_to })
            .await
    }

    pub async fn ids(&self) -> Result<Vec<PartId>, FrameworkError> {
        self.request(|respond_to| InventoryRequest::Ids { respond_to })
            .await
    }

    pub async fn search(&self, query: String) -> Result<Vec<Part>, FrameworkError> {
        self.request(|respond_to| InventoryRequest::Search { query, respond_to })
            .await
    }

    pub async fn total(&self) -> Result<Money, FrameworkError> {
        self.request(|respond_to| InventoryRequest::Total { respond_to })
            .await
    }

    pub async fn update(&self, id: PartId, update: PartUpdate) -> Result<Part, FrameworkError> {
        self.request(|respond_to| InventoryRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: PartId) -> Result<Part, FrameworkError> {
        self.request(|respond_to| InventoryRequest::Delete { id, respond_to })
            .await
    }
}

//! # Mock Session
//!
//! Utilities for testing code that holds a [`SessionClient`] without spawning
//! an [`InventoryActor`](super::InventoryActor).
//!
//! [`create_mock_client`] returns a client and the receiver its requests land
//! on. The `expect_*` helpers pull the next request off that receiver, check
//! its kind, and hand back the payload together with the responder so the test
//! decides what the "actor" answers. Injecting failures such as
//! [`FrameworkError::ActorClosed`] is a one-liner this way.
//!
//! ```rust
//! use spare_parts::model::PartId;
//! use spare_parts::session::mock::{create_mock_client, expect_delete};
//! use spare_parts::session::FrameworkError;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client(4);
//!     let task = tokio::spawn(async move { client.delete(PartId::from("P1")).await });
//!
//!     let (id, responder) = expect_delete(&mut receiver).await.unwrap();
//!     assert_eq!(id, PartId::from("P1"));
//!     responder.send(Err(FrameworkError::ActorDropped)).unwrap();
//!
//!     assert_eq!(task.await.unwrap(), Err(FrameworkError::ActorDropped));
//! }
//! ```

use crate::inventory::Snapshot;
use crate::model::{Money, Part, PartId, PartUpdate};
use crate::session::{InventoryRequest, Response, SessionClient};
use tokio::sync::mpsc;

/// Creates a client and the receiver its requests are delivered to.
pub fn create_mock_client(buffer_size: usize) -> (SessionClient, mpsc::Receiver<InventoryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SessionClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Add request
pub async fn expect_add(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(Part, Response<PartId>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Add { part, respond_to }) => Some((part, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<Response<Vec<Part>>> {
    match receiver.recv().await {
        Some(InventoryRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<Response<Snapshot>> {
    match receiver.recv().await {
        Some(InventoryRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Search request
pub async fn expect_search(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(String, Response<Vec<Part>>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Search { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Total request
pub async fn expect_total(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<Response<Money>> {
    match receiver.recv().await {
        Some(InventoryRequest::Total { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(PartId, PartUpdate, Response<Part>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(PartId, Response<Part>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

//! # Session Messages
//!
//! The requests a [`SessionClient`](super::SessionClient) sends to the
//! [`InventoryActor`](super::InventoryActor). Each variant carries a one-shot
//! sender the actor answers on.

use crate::inventory::Snapshot;
use crate::model::{Money, Part, PartId, PartUpdate};
use crate::session::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the inventory operations: `Add`, `Update` and
/// `Delete` mutate; `List`, `Snapshot`, `Get`, `Ids`, `Search` and `Total`
/// only read.
#[derive(Debug)]
pub enum InventoryRequest {
    Add {
        part: Part,
        respond_to: Response<PartId>,
    },
    List {
        respond_to: Response<Vec<Part>>,
    },
    Snapshot {
        respond_to: Response<Snapshot>,
    },
    Get {
        id: PartId,
        respond_to: Response<Option<Part>>,
    },
    Ids {
        respond_to: Response<Vec<PartId>>,
    },
    Search {
        query: String,
        respond_to: Response<Vec<Part>>,
    },
    Total {
        respond_to: Response<Money>,
    },
    Update {
        id: PartId,
        update: PartUpdate,
        respond_to: Response<Part>,
    },
    Delete {
        id: PartId,
        respond_to: Response<Part>,
    },
}

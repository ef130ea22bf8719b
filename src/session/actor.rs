//! # Inventory Actor
//!
//! This module defines the `InventoryActor`, the task that owns one session's
//! [`Inventory`] and applies requests to it one at a time.

use crate::inventory::Inventory;
use crate::model::Currency;
use crate::session::{FrameworkError, InventoryRequest, SessionClient};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns a session's inventory.
///
/// # Architecture Note
/// This struct is the "Server" half of the session. It owns the state
/// (`inventory`) and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Requests are processed *sequentially* in a loop, so each one runs to
/// completion before the next begins. No `Mutex` or `RwLock` guards the
/// inventory; exclusive ownership within the task is the guarantee.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `InventoryActor::new()` to get the `actor` and its `client`.
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Stop**: Drop every client; the loop ends and the inventory is discarded.
///
/// ```rust
/// use spare_parts::model::{Category, Currency, Part};
/// use spare_parts::session::InventoryActor;
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = InventoryActor::new(10, Currency::Pkr);
///     let handle = tokio::spawn(actor.run());
///
///     let part = Part::new("P1", "Brake Pad", Category::Brakes, 4, 1200.0);
///     client.add(part).await.unwrap();
///     assert_eq!(client.list().await.unwrap().len(), 1);
///
///     drop(client);
///     handle.await.unwrap();
/// }
/// ```
pub struct InventoryActor {
    receiver: mpsc::Receiver<InventoryRequest>,
    inventory: Inventory,
}

impl InventoryActor {
    /// Creates a new `InventoryActor` and its associated `SessionClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `currency` - The currency every price in this session is expressed in.
    pub fn new(buffer_size: usize, currency: Currency) -> (Self, SessionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            inventory: Inventory::new(currency),
        };
        (actor, SessionClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        info!(currency = %self.inventory.currency(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        info!(size = self.inventory.len(), "Shutdown");
    }

    fn handle(&mut self, msg: InventoryRequest) {
        match msg {
            InventoryRequest::Add { part, respond_to } => {
                debug!(?part, "Add");
                let requested = part.part_id.clone();
                let result = self.inventory.add_part(part);
                match &result {
                    Ok(id) => info!(part_id = %id, size = self.inventory.len(), "Added"),
                    Err(e) => warn!(part_id = %requested, error = %e, "Add failed"),
                }
                let _ = respond_to.send(result.map_err(FrameworkError::from));
            }
            InventoryRequest::List { respond_to } => {
                debug!(size = self.inventory.len(), "List");
                let _ = respond_to.send(Ok(self.inventory.list_inventory().to_vec()));
            }
            InventoryRequest::Snapshot { respond_to } => {
                let snapshot = self.inventory.snapshot();
                debug!(size = snapshot.parts.len(), total = %snapshot.total, "Snapshot");
                let _ = respond_to.send(Ok(snapshot));
            }
            InventoryRequest::Get { id, respond_to } => {
                let part = self.inventory.get_part(id.as_str()).cloned();
                debug!(part_id = %id, found = part.is_some(), "Get");
                let _ = respond_to.send(Ok(part));
            }
            InventoryRequest::Ids { respond_to } => {
                let _ = respond_to.send(Ok(self.inventory.part_ids()));
            }
            InventoryRequest::Search { query, respond_to } => {
                let found = self.inventory.search(&query);
                debug!(%query, matches = found.len(), "Search");
                let _ = respond_to.send(Ok(found));
            }
            InventoryRequest::Total { respond_to } => {
                let total = self.inventory.compute_total_value();
                debug!(%total, "Total");
                let _ = respond_to.send(Ok(total));
            }
            InventoryRequest::Update {
                id,
                update,
                respond_to,
            } => {
                debug!(part_id = %id, ?update, "Update");
                let result = self.inventory.update_part(id.as_str(), update);
                match &result {
                    Ok(_) => info!(part_id = %id, "Updated"),
                    Err(e) => warn!(part_id = %id, error = %e, "Update failed"),
                }
                let _ = respond_to.send(result.map_err(FrameworkError::from));
            }
            InventoryRequest::Delete { id, respond_to } => {
                debug!(part_id = %id, "Delete");
                let result = self.inventory.delete_part(id.as_str());
                match &result {
                    Ok(_) => info!(part_id = %id, size = self.inventory.len(), "Deleted"),
                    Err(e) => warn!(part_id = %id, error = %e, "Delete failed"),
                }
                let _ = respond_to.send(result.map_err(FrameworkError::from));
            }
        }
    }
}

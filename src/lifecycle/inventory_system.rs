use crate::clients::PartsClient;
use crate::lifecycle::Config;
use crate::session::InventoryActor;
use tracing::{error, info};

/// The runtime orchestrator for one inventory session.
///
/// `InventorySystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the session actor
/// - **Wiring**: Handing out a [`PartsClient`] bound to that actor
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::new(&Config::default());
///
/// let id = system.parts_client.add_part(part).await?;
/// let total = system.parts_client.total_value().await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    /// Client for interacting with the session actor
    pub parts_client: PartsClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// Creates the session actor and spawns it on the current runtime.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &Config) -> Self {
        let (actor, session_client) = InventoryActor::new(config.channel_capacity, config.currency);
        let handle = tokio::spawn(actor.run());

        Self {
            parts_client: PartsClient::new(session_client),
            handle,
        }
    }

    /// Gracefully shuts down the session.
    ///
    /// Dropping the client closes the channel; the actor drains what is
    /// already queued, logs its final size and exits. Clones of the client
    /// held elsewhere keep the actor alive until they are dropped too.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down session...");

        drop(self.parts_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Session shutdown complete.");
        Ok(())
    }
}

//! # Session Lifecycle
//!
//! Starting, wiring and shutting down an inventory session, plus the ambient
//! pieces every entry point needs.
//!
//! - [`InventorySystem`] - spawns the session actor and owns its task handle
//! - [`Config`] - channel capacity, currency and default log level, from env
//! - [`setup_tracing`] - installs the `tracing` subscriber
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for the actor task to finish
//!
//! The inventory is discarded with the actor; nothing is persisted.

pub mod config;
pub mod inventory_system;
pub mod tracing;

pub use config::*;
pub use inventory_system::*;
pub use self::tracing::*;

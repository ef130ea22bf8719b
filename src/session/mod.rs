//! Session hosting for the parts inventory.
//!
//! One [`InventoryActor`] owns the [`Inventory`](crate::inventory::Inventory)
//! for a session and processes requests sequentially; [`SessionClient`]
//! handles send those requests over a channel.
//!
//! # Main Components
//!
//! - [`InventoryActor`] - Owns the inventory and runs the request loop
//! - [`SessionClient`] - Cloneable sender with one async method per operation
//! - [`InventoryRequest`] - The message enum exchanged between the two
//! - [`FrameworkError`] - Channel failures and wrapped domain errors
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning the actor.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::InventoryActor;
pub use client::SessionClient;
pub use error::FrameworkError;
pub use message::{InventoryRequest, Response};

//! Type-safe wrappers around [`SessionClient`](crate::session::SessionClient).

pub mod actor_client;
pub mod parts_client;

pub use actor_client::*;
pub use parts_client::*;

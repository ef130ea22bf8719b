//! # Spare Parts Inventory
//!
//! > **An in-memory inventory of automobile spare parts, hosted by a single session actor.**
//!
//! Parts are added, listed, searched, updated and deleted; the inventory also
//! reports its total stock value (`Σ quantity × price`). Everything lives in
//! memory for one session and is discarded when the session ends.
//!
//! ## 🏗️ Design
//!
//! ### One Owner, Sequential Requests
//! The [`Inventory`](inventory::Inventory) is a plain owned value with no
//! interior mutability. A session hands it to one
//! [`InventoryActor`](session::InventoryActor) running in its own Tokio task;
//! callers send requests through cloneable clients and the actor applies them
//! one at a time. Every operation therefore runs to completion before the next
//! starts, and a failed operation leaves the inventory unchanged.
//!
//! ### Strong Types at the Edge
//! [`Part`](model::Part) stores its quantity as `u32` and price as `f64`.
//! Text input is parsed once, in [`PartForm`](model::PartForm), where
//! non-numeric values are rejected instead of leaking into totals.
//!
//! ### Unique Ids
//! `part_id` is unique per inventory. Adding a duplicate fails, so update and
//! delete always address exactly one record.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`Part`](model::Part), [`PartUpdate`](model::PartUpdate), [`Category`](model::Category),
//! [`Money`](model::Money).
//!
//! ### 2. The Store ([`inventory`])
//! The synchronous store and [`PartError`](inventory::PartError).
//!
//! ### 3. The Engine ([`session`])
//! The actor, its message enum and the low-level [`SessionClient`](session::SessionClient).
//!
//! ### 4. The Interface ([`clients`])
//! [`PartsClient`](clients::PartsClient) maps session failures to domain errors.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`InventorySystem`](lifecycle::InventorySystem), [`Config`](lifecycle::Config)
//! and [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 6. The Surface ([`api`])
//! JSON request/response shapes and the dispatcher used by the binary.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod api;
pub mod clients;
pub mod inventory;
pub mod lifecycle;
pub mod model;
pub mod session;

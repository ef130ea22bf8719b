//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! The filter comes from `RUST_LOG` when set, otherwise from
//! [`Config::log_level`](super::Config::log_level). Output uses the compact
//! format without module paths and goes to **stderr**: stdout carries the
//! JSON response stream of the interactive session.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup (with currency) and shutdown (with final size)
//! - **Mutations**: `Added`, `Updated`, `Deleted` at info with `part_id` and `size`
//! - **Rejections**: validation, duplicate and not-found failures at warn
//! - **Payloads**: full parts and updates at debug
//!
//! ## Usage Examples
//!
//! ```bash
//! # Mutations only
//! RUST_LOG=info cargo run
//!
//! # Full payloads and every read
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` an add followed by a failed delete looks like:
//!
//! ```text
//! INFO Actor started currency=PKR
//! INFO add_part: Added part_id=P1 size=1
//! WARN Delete failed part_id=P9 error=Part not found: P9
//! ```
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Later calls are no-ops.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false) // entity context is carried in fields instead
        .compact()
        .try_init();
}

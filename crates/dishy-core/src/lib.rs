//! Typed client for the Starlink user terminal ("Dishy").
//!
//! The dish hosts a gRPC service on a fixed LAN address but ships no
//! .proto files; its schema is resolved at runtime over server
//! reflection (see `dishy-api`). This crate turns that loosely-typed
//! surface into a stable one:
//!
//! - **[`Dish`]** -- blocking client. `connect()` opens the channel,
//!   binds the schema, and fetches device identity; `refresh()` returns
//!   a [`DishStatus`] snapshot. Optional autoconnect makes guarded
//!   reads connect implicitly on first use.
//! - **[`AsyncDish`]** -- the same state machine with non-blocking
//!   calls. No autoconnect: connect explicitly.
//! - **[`DishStatus`]** -- immutable point-in-time view over one raw
//!   status reply, with derived [`OutageReason`] / [`DishAlert`]
//!   enumerations.
//! - **[`DishError`]** -- communication, precondition, and decode
//!   failures; transport causes are preserved, never retried.
//!
//! ```no_run
//! use dishy_core::{Dish, DishConfig};
//!
//! # fn main() -> Result<(), dishy_core::DishError> {
//! let mut dish = Dish::new(DishConfig::default())?;
//! dish.connect()?;
//! let status = dish.refresh()?;
//! println!("obstructed: {}", status.obstructed());
//! // channel released when `dish` drops
//! # Ok(())
//! # }
//! ```

pub mod blocking;
pub mod client;
pub mod config;
pub mod error;
pub mod link;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use blocking::Dish;
pub use client::AsyncDish;
pub use config::{DEFAULT_ADDRESS, DEFAULT_TIMEOUT, DishConfig};
pub use error::DishError;
pub use link::{Connector, DeviceLink, DeviceRequest};
pub use model::{DeviceInfo, DishAlert, DishStatus, OutageReason};

//! State reconciliation core.
//!
//! This module provides:
//! - [`Board`]: the reconciliation context owning every piece of sync state
//! - [`AvailabilityCache`]: last-fetched staff availability
//! - [`driver`]: the cancellable interval driver that owns a [`Board`]

pub mod availability;
pub mod driver;
mod reconciler;

pub use availability::AvailabilityCache;
pub use driver::{BoardCommand, DriverHandle};
pub use reconciler::Board;

//! Wire protocol and HTTP client for the kiosk backend.

pub mod client;
pub mod protocol;

pub use client::{BoardApi, HttpBoardClient};
pub use protocol::{
    ActionReply, AvailabilityMap, BoardState, KioskRecord, KioskStatus, StaffAvailability,
};

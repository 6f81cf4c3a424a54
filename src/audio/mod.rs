//! Alert sound playback behind a one-time interaction unlock.
//!
//! This module provides:
//! - [`AudioGate`]: Monotonic unlock flag gating all playback
//! - [`ChimeDriver`]: kira-backed alert sound output

mod chime;
mod gate;

pub use chime::ChimeDriver;
pub use gate::AudioGate;

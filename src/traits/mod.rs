//! Capability seams between the sync core and its presentation adapters.
//!
//! The core never touches a rendering surface directly; it drives these
//! traits, which makes it testable against fakes.

pub mod audio;
pub mod notify;
pub mod render;

pub use audio::AlertSink;
pub use notify::{NoticeKind, NotificationSink};
pub use render::{BoardView, TicketRow};

use crate::api::protocol::{AvailabilityMap, KioskStatus};

/// One row of the active-tickets table (kiosks not currently free).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRow {
    pub kiosk: String,
    pub status: KioskStatus,
    pub staff: Option<String>,
    pub last_action: Option<String>,
}

/// Abstraction over the board display.
/// Implementations: ConsoleView (production), MockView (testing).
///
/// Re-invoking any render method with unchanged inputs must be an
/// observable no-op.
pub trait BoardView: Send {
    /// Set the steady-state visual for one kiosk indicator.
    fn set_kiosk_status(&mut self, kiosk: &str, status: KioskStatus);

    /// Flash a short, self-clearing attention animation on a kiosk indicator.
    fn mark_attention(&mut self, kiosk: &str);

    /// Rebuild the active-tickets table.
    fn render_tickets(&mut self, rows: &[TicketRow]);

    /// Refresh the per-staff assignment controls.
    fn render_availability(&mut self, staff: &AvailabilityMap);

    /// Dismiss any open assignment-selection prompt.
    fn close_assignment_prompt(&mut self);
}

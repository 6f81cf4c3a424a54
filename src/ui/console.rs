use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::api::protocol::{AvailabilityMap, KioskStatus, short_kiosk_label};
use crate::traits::{BoardView, NoticeKind, NotificationSink, TicketRow};

/// Toast-style notices on the terminal.
pub struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn notify(&mut self, text: &str, kind: NoticeKind) {
        println!("[{}] {text}", kind.css_class());
    }
}

/// Terminal renderer for the board.
///
/// Each section is re-printed only when its rendered text changes, so
/// re-rendering with unchanged inputs produces no output.
pub struct ConsoleView {
    out: Box<dyn Write + Send>,
    statuses: BTreeMap<String, KioskStatus>,
    board_text: String,
    tickets_text: String,
    availability_text: String,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out,
            statuses: BTreeMap::new(),
            board_text: String::new(),
            tickets_text: String::new(),
            availability_text: String::new(),
        }
    }

    fn flush_board(&mut self) {
        let mut text = String::from("── kioskos ──\n");
        for (kiosk, status) in &self.statuses {
            text.push_str(&format!(
                "  {:<4} {}\n",
                short_kiosk_label(kiosk),
                status
            ));
        }
        if text != self.board_text {
            let _ = self.out.write_all(text.as_bytes());
            let _ = self.out.flush();
            self.board_text = text;
        }
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView for ConsoleView {
    fn set_kiosk_status(&mut self, kiosk: &str, status: KioskStatus) {
        self.statuses.insert(kiosk.to_string(), status);
        self.flush_board();
    }

    fn mark_attention(&mut self, kiosk: &str) {
        // Transitions are already deduplicated by the reconciler; one flash
        // line per actual transition.
        let line = format!("  ✸ {}\n", short_kiosk_label(kiosk));
        let _ = self.out.write_all(line.as_bytes());
        let _ = self.out.flush();
    }

    fn render_tickets(&mut self, rows: &[TicketRow]) {
        let mut text = String::from("── tickets activos ──\n");
        if rows.is_empty() {
            text.push_str("  (ninguno)\n");
        }
        for row in rows {
            text.push_str(&format!(
                "  {:<4} {:<12} {:<10} {}\n",
                short_kiosk_label(&row.kiosk),
                row.status,
                row.staff.as_deref().unwrap_or("-"),
                row.last_action.as_deref().unwrap_or("-"),
            ));
        }
        if text != self.tickets_text {
            let _ = self.out.write_all(text.as_bytes());
            let _ = self.out.flush();
            self.tickets_text = text;
        }
    }

    fn render_availability(&mut self, staff: &AvailabilityMap) {
        let mut text = String::from("── meseros ──\n");
        for (id, record) in staff {
            if record.available {
                text.push_str(&format!("  {id}: disponible\n"));
            } else {
                let at = record
                    .kiosk
                    .as_deref()
                    .map(short_kiosk_label)
                    .unwrap_or_else(|| "?".to_string());
                text.push_str(&format!("  {id}: ocupado (en {at})\n"));
            }
        }
        if text != self.availability_text {
            let _ = self.out.write_all(text.as_bytes());
            let _ = self.out.flush();
            self.availability_text = text;
        }
    }

    fn close_assignment_prompt(&mut self) {
        // Console prompts are one-shot lines; nothing stays open.
    }
}

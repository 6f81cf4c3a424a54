//! Shared fakes for unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use crate::api::client::BoardApi;
use crate::api::protocol::{ActionReply, AvailabilityMap, BoardState, KioskStatus};
use crate::traits::{AlertSink, BoardView, NoticeKind, NotificationSink, TicketRow};

/// Everything the fakes record, shared between a test and the board.
#[derive(Debug, Default)]
pub struct Recorded {
    pub notices: Vec<(String, NoticeKind)>,
    pub statuses: Vec<(String, KioskStatus)>,
    pub attention: Vec<String>,
    pub tickets: Vec<Vec<TicketRow>>,
    pub availability_renders: usize,
    pub prompts_closed: usize,
    pub chimes: usize,
    pub api_calls: Vec<String>,
}

pub type Shared = Arc<Mutex<Recorded>>;

pub fn shared() -> Shared {
    Arc::new(Mutex::new(Recorded::default()))
}

pub struct MockNotifier(pub Shared);

impl NotificationSink for MockNotifier {
    fn notify(&mut self, text: &str, kind: NoticeKind) {
        self.0.lock().unwrap().notices.push((text.to_string(), kind));
    }
}

pub struct MockView(pub Shared);

impl BoardView for MockView {
    fn set_kiosk_status(&mut self, kiosk: &str, status: KioskStatus) {
        self.0
            .lock()
            .unwrap()
            .statuses
            .push((kiosk.to_string(), status));
    }

    fn mark_attention(&mut self, kiosk: &str) {
        self.0.lock().unwrap().attention.push(kiosk.to_string());
    }

    fn render_tickets(&mut self, rows: &[TicketRow]) {
        self.0.lock().unwrap().tickets.push(rows.to_vec());
    }

    fn render_availability(&mut self, _staff: &AvailabilityMap) {
        self.0.lock().unwrap().availability_renders += 1;
    }

    fn close_assignment_prompt(&mut self) {
        self.0.lock().unwrap().prompts_closed += 1;
    }
}

pub struct MockAlert(pub Shared);

impl AlertSink for MockAlert {
    fn play(&mut self) -> Result<()> {
        self.0.lock().unwrap().chimes += 1;
        Ok(())
    }
}

/// Scripted backend fake. Queued responses repeat their last entry once the
/// queue runs down to one, so steady-state polling keeps working.
pub struct MockApi {
    pub shared: Shared,
    states: Mutex<VecDeque<BoardState>>,
    availability: Mutex<VecDeque<AvailabilityMap>>,
    attend_replies: Mutex<VecDeque<ActionReply>>,
    fail_next_state: AtomicBool,
    state_delays: Mutex<VecDeque<Duration>>,
}

impl MockApi {
    pub fn new(shared: Shared) -> Self {
        Self {
            shared,
            states: Mutex::new(VecDeque::new()),
            availability: Mutex::new(VecDeque::new()),
            attend_replies: Mutex::new(VecDeque::new()),
            fail_next_state: AtomicBool::new(false),
            state_delays: Mutex::new(VecDeque::new()),
        }
    }

    pub fn push_state(&self, state: BoardState) {
        self.states.lock().unwrap().push_back(state);
    }

    pub fn push_availability(&self, staff: AvailabilityMap) {
        self.availability.lock().unwrap().push_back(staff);
    }

    pub fn push_attend_reply(&self, msg: &str) {
        self.attend_replies.lock().unwrap().push_back(ActionReply {
            msg: msg.to_string(),
        });
    }

    /// Make the next `fetch_state` call fail.
    pub fn fail_next_state(&self) {
        self.fail_next_state.store(true, Ordering::SeqCst);
    }

    /// Delay the next `fetch_state` call (paused-time tests).
    pub fn push_state_delay(&self, delay: Duration) {
        self.state_delays.lock().unwrap().push_back(delay);
    }

    fn record(&self, call: String) {
        self.shared.lock().unwrap().api_calls.push(call);
    }

    fn pop_repeat_last<T: Clone>(queue: &Mutex<VecDeque<T>>) -> Option<T> {
        let mut queue = queue.lock().unwrap();
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

#[async_trait]
impl BoardApi for MockApi {
    async fn fetch_state(&self) -> Result<BoardState> {
        self.record("estado".to_string());
        let delay = self.state_delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_next_state.swap(false, Ordering::SeqCst) {
            return Err(anyhow!("connection refused"));
        }
        Self::pop_repeat_last(&self.states).ok_or_else(|| anyhow!("no scripted state"))
    }

    async fn fetch_availability(&self) -> Result<AvailabilityMap> {
        self.record("disponibilidad".to_string());
        Ok(Self::pop_repeat_last(&self.availability).unwrap_or_default())
    }

    async fn attend(&self, kiosk: &str, staff: &str) -> Result<ActionReply> {
        self.record(format!("atender/{kiosk}/{staff}"));
        Ok(Self::pop_repeat_last(&self.attend_replies).unwrap_or(ActionReply {
            msg: format!("{kiosk} está siendo atendido por {staff}"),
        }))
    }

    async fn finalize(&self, kiosk: &str) -> Result<ActionReply> {
        self.record(format!("finalizar/{kiosk}"));
        Ok(ActionReply {
            msg: format!("{kiosk} finalizado y quedó libre"),
        })
    }

    async fn cancel(&self, kiosk: &str) -> Result<ActionReply> {
        self.record(format!("cancelar/{kiosk}"));
        Ok(ActionReply {
            msg: format!("{kiosk} fue cancelado y quedó libre"),
        })
    }

    async fn request_service(&self, kiosk: &str) -> Result<ActionReply> {
        self.record(format!("solicitar/{kiosk}"));
        Ok(ActionReply {
            msg: format!("{kiosk} solicitó servicio"),
        })
    }
}

/// Build a board state from `(kiosk, status, staff)` triples.
pub fn state_of(entries: &[(&str, KioskStatus, Option<&str>)]) -> BoardState {
    entries
        .iter()
        .map(|(kiosk, status, staff)| {
            (
                kiosk.to_string(),
                crate::api::protocol::KioskRecord {
                    status: *status,
                    staff: staff.map(str::to_string),
                    last_action: None,
                },
            )
        })
        .collect()
}

/// Build an availability map from `(staff, available, kiosk)` triples.
pub fn availability_of(entries: &[(&str, bool, Option<&str>)]) -> AvailabilityMap {
    entries
        .iter()
        .map(|(staff, available, kiosk)| {
            (
                staff.to_string(),
                crate::api::protocol::StaffAvailability {
                    available: *available,
                    kiosk: kiosk.map(str::to_string),
                },
            )
        })
        .collect()
}

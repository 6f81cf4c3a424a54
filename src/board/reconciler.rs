use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::api::client::BoardApi;
use crate::api::protocol::{BoardState, KioskStatus, short_kiosk_label};
use crate::audio::AudioGate;
use crate::traits::{BoardView, NoticeKind, NotificationSink, TicketRow};

use super::availability::AvailabilityCache;

/// The reconciliation context. Owns every piece of mutable sync state
/// (prior-status snapshot, availability cache, audio gate handle) and the
/// presentation seams it drives; nothing here is ambient or global.
pub struct Board<A: BoardApi> {
    api: A,
    /// Last-seen status per kiosk. Replaced wholesale after each applied
    /// poll; kiosks absent from the latest response drop out and count as
    /// first observations if they reappear.
    snapshot: BTreeMap<String, KioskStatus>,
    /// Sequence tag of the poll currently reflected in `snapshot`.
    applied_seq: u64,
    next_seq: u64,
    availability: AvailabilityCache,
    view: Box<dyn BoardView>,
    notifier: Box<dyn NotificationSink>,
    audio: Arc<AudioGate>,
}

impl<A: BoardApi> Board<A> {
    pub fn new(
        api: A,
        view: Box<dyn BoardView>,
        notifier: Box<dyn NotificationSink>,
        audio: Arc<AudioGate>,
    ) -> Self {
        Self {
            api,
            snapshot: BTreeMap::new(),
            applied_seq: 0,
            next_seq: 1,
            availability: AvailabilityCache::new(),
            view,
            notifier,
            audio,
        }
    }

    /// One full poll-diff-render pass: kiosk state, then staff availability
    /// (so availability reflects any assignment just made). A transport or
    /// decode failure aborts the whole pass with nothing mutated; the next
    /// scheduled pass proceeds normally.
    pub async fn run_cycle(&mut self) -> Result<()> {
        let seq = self.next_seq;
        self.next_seq += 1;
        let state = self.api.fetch_state().await?;
        self.apply_state(seq, &state);
        self.refresh_availability().await
    }

    /// Diff `state` against the snapshot, fire transition effects exactly
    /// once per actual transition, then replace the snapshot wholesale.
    ///
    /// Responses carrying a sequence tag at or below the applied one are
    /// discarded, so an overlapping in-flight poll that resolves late can
    /// never roll the snapshot backward.
    pub fn apply_state(&mut self, seq: u64, state: &BoardState) {
        if seq <= self.applied_seq {
            debug!(seq, applied = self.applied_seq, "discarding stale poll response");
            return;
        }

        for (kiosk, record) in state {
            self.view.set_kiosk_status(kiosk, record.status);

            // Absence in the snapshot is distinct from every real status,
            // so a first observation always counts as a transition.
            if self.snapshot.get(kiosk) != Some(&record.status) {
                self.view.mark_attention(kiosk);
                match record.status {
                    KioskStatus::Pendiente => {
                        self.notifier
                            .notify(&format!("🔔 {kiosk} solicitó servicio"), NoticeKind::Pending);
                        self.audio.chime();
                    }
                    KioskStatus::Finalizada => {
                        self.notifier
                            .notify(&format!("✔ {kiosk} finalizó"), NoticeKind::Finished);
                    }
                    _ => {}
                }
            }
        }

        self.snapshot = state
            .iter()
            .map(|(kiosk, record)| (kiosk.clone(), record.status))
            .collect();
        self.applied_seq = seq;

        let rows: Vec<TicketRow> = state
            .iter()
            .filter(|(_, record)| record.status != KioskStatus::Libre)
            .map(|(kiosk, record)| TicketRow {
                kiosk: kiosk.clone(),
                status: record.status,
                staff: record.staff.clone(),
                last_action: record.last_action.clone(),
            })
            .collect();
        self.view.render_tickets(&rows);
    }

    /// Refetch staff availability, replace the cache wholesale and re-render
    /// the assignment controls.
    pub async fn refresh_availability(&mut self) -> Result<()> {
        let staff = self.api.fetch_availability().await?;
        self.availability.replace(staff);
        self.view.render_availability(self.availability.staff());
        Ok(())
    }

    /// User-initiated assignment of `staff` to `kiosk`.
    ///
    /// A conflict, whether locally cached or reported by the server, is
    /// user feedback rather than an error: the flow terminates normally.
    pub async fn assign(&mut self, kiosk: &str, staff: &str) -> Result<()> {
        // Advisory pre-check against the possibly-stale cache, purely to
        // skip a pointless round trip. The server stays authoritative.
        if let Some(occupied) = self.availability.occupied_at(staff) {
            let label = short_kiosk_label(&occupied);
            self.notifier.notify(
                &format!("{staff} está ocupado atendiendo {label}"),
                NoticeKind::Pending,
            );
            return Ok(());
        }

        let reply = self.api.attend(kiosk, staff).await?;
        if reply.is_conflict() {
            self.notifier.notify("Mesero ocupado", NoticeKind::Pending);
            return Ok(());
        }

        self.notifier.notify(&reply.msg, NoticeKind::Finished);
        self.run_cycle().await?;
        self.view.close_assignment_prompt();
        Ok(())
    }

    /// Finalize a kiosk's service. No local precondition check; the server
    /// decides and its message is shown as-is.
    pub async fn finalize(&mut self, kiosk: &str) -> Result<()> {
        let reply = self.api.finalize(kiosk).await?;
        self.notifier.notify(&reply.msg, NoticeKind::Finished);
        self.run_cycle().await
    }

    /// Cancel a kiosk's pending request.
    pub async fn cancel(&mut self, kiosk: &str) -> Result<()> {
        let reply = self.api.cancel(kiosk).await?;
        self.notifier.notify(&reply.msg, NoticeKind::Pending);
        self.run_cycle().await
    }

    /// Ask the backend to mark `kiosk` as requesting service.
    pub async fn request_service(&mut self, kiosk: &str) -> Result<()> {
        let reply = self.api.request_service(kiosk).await?;
        self.notifier.notify(&reply.msg, NoticeKind::Pending);
        self.run_cycle().await
    }

    pub fn availability(&self) -> &AvailabilityCache {
        &self.availability
    }

    /// Sequence tag of the currently applied poll.
    pub fn applied_seq(&self) -> u64 {
        self.applied_seq
    }

    /// Last-seen status for one kiosk, if any.
    pub fn snapshot_status(&self, kiosk: &str) -> Option<KioskStatus> {
        self.snapshot.get(kiosk).copied()
    }
}

/// Notification category, mirrored in presentation styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Attention-requesting events: new requests, conflicts, cancellations.
    Pending,
    /// Completed events: finished services, successful assignments.
    Finished,
}

impl NoticeKind {
    /// Presentation class for view adapters.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Pending => "pendiente",
            NoticeKind::Finished => "finalizada",
        }
    }
}

/// Abstraction over toast-style notification surfaces.
/// Implementations: ConsoleNotifier (production), MockNotifier (testing).
pub trait NotificationSink: Send {
    /// Show an ephemeral, auto-dismissing notice.
    fn notify(&mut self, text: &str, kind: NoticeKind);
}

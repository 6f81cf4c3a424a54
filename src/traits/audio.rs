use anyhow::Result;

/// Abstraction over the alert sound output.
/// Implementations: ChimeDriver (kira), MockAlert (testing).
pub trait AlertSink: Send {
    /// Play the alert sound from its start.
    fn play(&mut self) -> Result<()>;
}

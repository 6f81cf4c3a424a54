use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::traits::AlertSink;

/// Gates the alert sound behind a one-time user-interaction unlock.
///
/// The unlock flag is monotonic: set at most once for the process lifetime,
/// never reset. Playback before the unlock stays silent, and playback
/// failures are never surfaced to the user.
pub struct AudioGate {
    unlocked: AtomicBool,
    sink: Mutex<Option<Box<dyn AlertSink>>>,
}

impl AudioGate {
    /// Create a gate over an optional sound output. A gate without a sink
    /// behaves normally but stays silent.
    pub fn new(sink: Option<Box<dyn AlertSink>>) -> Self {
        Self {
            unlocked: AtomicBool::new(false),
            sink: Mutex::new(sink),
        }
    }

    /// Unlock playback. Call only in response to a genuine user interaction.
    pub fn unlock(&self) {
        if !self.unlocked.swap(true, Ordering::SeqCst) {
            debug!("audio unlocked");
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked.load(Ordering::SeqCst)
    }

    /// Play the alert sound if the gate is unlocked.
    pub fn chime(&self) {
        if !self.is_unlocked() {
            return;
        }
        let Ok(mut sink) = self.sink.lock() else {
            return;
        };
        if let Some(sink) = sink.as_mut() {
            if let Err(err) = sink.play() {
                debug!("alert playback failed: {err:#}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use anyhow::{Result, anyhow};

    use super::*;

    struct CountingAlert(Arc<AtomicUsize>);

    impl AlertSink for CountingAlert {
        fn play(&mut self) -> Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingAlert;

    impl AlertSink for FailingAlert {
        fn play(&mut self) -> Result<()> {
            Err(anyhow!("device gone"))
        }
    }

    #[test]
    fn locked_gate_stays_silent() {
        let plays = Arc::new(AtomicUsize::new(0));
        let gate = AudioGate::new(Some(Box::new(CountingAlert(Arc::clone(&plays)))));
        gate.chime();
        assert_eq!(plays.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unlocked_gate_plays() {
        let plays = Arc::new(AtomicUsize::new(0));
        let gate = AudioGate::new(Some(Box::new(CountingAlert(Arc::clone(&plays)))));
        gate.unlock();
        gate.chime();
        gate.chime();
        assert_eq!(plays.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unlock_is_monotonic() {
        let gate = AudioGate::new(None);
        assert!(!gate.is_unlocked());
        gate.unlock();
        gate.unlock();
        assert!(gate.is_unlocked());
    }

    #[test]
    fn playback_failure_is_swallowed() {
        let gate = AudioGate::new(Some(Box::new(FailingAlert)));
        gate.unlock();
        gate.chime();
    }

    #[test]
    fn gate_without_sink_is_silent() {
        let gate = AudioGate::new(None);
        gate.unlock();
        gate.chime();
    }
}

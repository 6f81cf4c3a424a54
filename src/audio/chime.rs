use std::path::Path;

use anyhow::{Result, anyhow};
use kira::sound::static_sound::StaticSoundData;
use kira::{AudioManager, AudioManagerSettings, DefaultBackend};

use crate::traits::AlertSink;

/// Alert sound output backed by kira.
pub struct ChimeDriver {
    manager: AudioManager,
    sound: StaticSoundData,
}

impl ChimeDriver {
    /// Open the audio device and load the alert sound.
    pub fn new(path: &Path) -> Result<Self> {
        let settings = AudioManagerSettings::default();
        let manager = AudioManager::<DefaultBackend>::new(settings)
            .map_err(|e| anyhow!("Failed to create audio manager: {e}"))?;
        let sound = StaticSoundData::from_file(path)
            .map_err(|e| anyhow!("Failed to load alert sound {}: {e}", path.display()))?;
        Ok(Self { manager, sound })
    }
}

impl AlertSink for ChimeDriver {
    fn play(&mut self) -> Result<()> {
        // A fresh instance per trigger restarts playback from the beginning.
        self.manager
            .play(self.sound.clone())
            .map_err(|e| anyhow!("Failed to play alert sound: {e}"))?;
        Ok(())
    }
}

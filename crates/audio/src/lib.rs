//! Volume control for the master, SFX and music channels.
//!
//! [`AudioSystem`] drives a kira mixer; [`NullAudio`] keeps the same levels
//! without an output device, for headless hosts and tests.

use anyhow::Result;
use engine_core::{AudioBridge, BridgeError, BridgeResult, VolumeChannel};
use kira::{
    manager::{AudioManager, AudioManagerSettings, backend::DefaultBackend},
    track::{TrackBuilder, TrackHandle},
    tween::Tween,
};

/// Clamped per-channel volume levels in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixerLevels {
    master: f32,
    sfx: f32,
    music: f32,
}

impl Default for MixerLevels {
    fn default() -> Self {
        Self { master: 1.0, sfx: 1.0, music: 0.7 }
    }
}

impl MixerLevels {
    pub fn new(master: f32, sfx: f32, music: f32) -> Self {
        let mut levels = Self::default();
        levels.set(VolumeChannel::Master, master);
        levels.set(VolumeChannel::Sfx, sfx);
        levels.set(VolumeChannel::Music, music);
        levels
    }

    pub fn get(&self, channel: VolumeChannel) -> f32 {
        match channel {
            VolumeChannel::Master => self.master,
            VolumeChannel::Sfx => self.sfx,
            VolumeChannel::Music => self.music,
        }
    }

    /// Store a level, clamped to 0..=1. Returns the stored value.
    pub fn set(&mut self, channel: VolumeChannel, volume: f32) -> f32 {
        let volume = clamp_volume(volume);
        match channel {
            VolumeChannel::Master => self.master = volume,
            VolumeChannel::Sfx => self.sfx = volume,
            VolumeChannel::Music => self.music = volume,
        }
        volume
    }
}

/// Clamp to 0..=1; NaN reads as silence.
pub fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

/// Kira-backed mixer: master on the main track, SFX and music on sub-tracks.
pub struct AudioSystem {
    manager: AudioManager,
    sfx_track: TrackHandle,
    music_track: TrackHandle,
    levels: MixerLevels,
}

impl AudioSystem {
    /// Open the default output device and apply `levels`.
    pub fn new(levels: MixerLevels) -> Result<Self> {
        let mut manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())?;
        let sfx_track = manager.add_sub_track(TrackBuilder::new())?;
        let music_track = manager.add_sub_track(TrackBuilder::new())?;

        let mut system = Self { manager, sfx_track, music_track, levels };
        for channel in VolumeChannel::ALL {
            system.apply(channel);
        }
        log::info!(
            "Audio system ready (master {:.2}, sfx {:.2}, music {:.2})",
            levels.get(VolumeChannel::Master),
            levels.get(VolumeChannel::Sfx),
            levels.get(VolumeChannel::Music)
        );
        Ok(system)
    }

    /// Track to route sound effects to.
    pub fn sfx_track(&self) -> &TrackHandle {
        &self.sfx_track
    }

    /// Track to route music to.
    pub fn music_track(&self) -> &TrackHandle {
        &self.music_track
    }

    pub fn levels(&self) -> MixerLevels {
        self.levels
    }

    fn apply(&mut self, channel: VolumeChannel) {
        let volume = self.levels.get(channel) as f64;
        match channel {
            VolumeChannel::Master => {
                let _ = self.manager.main_track().set_volume(volume, Tween::default());
            }
            VolumeChannel::Sfx => {
                let _ = self.sfx_track.set_volume(volume, Tween::default());
            }
            VolumeChannel::Music => {
                let _ = self.music_track.set_volume(volume, Tween::default());
            }
        }
    }
}

impl AudioBridge for AudioSystem {
    fn volume(&self, channel: VolumeChannel) -> BridgeResult<f32> {
        Ok(self.levels.get(channel))
    }

    fn set_volume(&mut self, channel: VolumeChannel, volume: f32) -> BridgeResult<()> {
        self.levels.set(channel, volume);
        self.apply(channel);
        Ok(())
    }
}

/// Device-less mixer. Stores levels only; calls can be made to fail.
#[derive(Debug, Default)]
pub struct NullAudio {
    pub levels: MixerLevels,
    pub fail_calls: bool,
}

impl NullAudio {
    pub fn new(levels: MixerLevels) -> Self {
        Self { levels, fail_calls: false }
    }
}

impl AudioBridge for NullAudio {
    fn volume(&self, channel: VolumeChannel) -> BridgeResult<f32> {
        if self.fail_calls {
            return Err(BridgeError::call_failed("audio_get_volume", "no audio backend"));
        }
        Ok(self.levels.get(channel))
    }

    fn set_volume(&mut self, channel: VolumeChannel, volume: f32) -> BridgeResult<()> {
        if self.fail_calls {
            return Err(BridgeError::call_failed("audio_set_volume", "no audio backend"));
        }
        self.levels.set(channel, volume);
        Ok(())
    }
}

// Re-export for convenience
pub use kira;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_clamp_on_store() {
        let mut levels = MixerLevels::default();
        assert_eq!(levels.set(VolumeChannel::Master, 1.5), 1.0);
        assert_eq!(levels.set(VolumeChannel::Master, -0.2), 0.0);
        assert_eq!(levels.set(VolumeChannel::Music, f32::NAN), 0.0);
        assert_eq!(levels.get(VolumeChannel::Master), 0.0);
    }

    #[test]
    fn default_levels_match_fallbacks() {
        let levels = MixerLevels::default();
        assert_eq!(levels.get(VolumeChannel::Master), 1.0);
        assert_eq!(levels.get(VolumeChannel::Sfx), 1.0);
        assert_eq!(levels.get(VolumeChannel::Music), 0.7);
    }

    #[test]
    fn null_audio_round_trips_and_fails_on_demand() {
        let mut audio = NullAudio::new(MixerLevels::new(0.5, 0.5, 0.5));
        audio.set_volume(VolumeChannel::Sfx, 0.25).unwrap();
        assert_eq!(audio.volume(VolumeChannel::Sfx).unwrap(), 0.25);

        audio.fail_calls = true;
        assert!(audio.volume(VolumeChannel::Sfx).is_err());
        assert!(audio.set_volume(VolumeChannel::Sfx, 0.9).is_err());
        assert_eq!(audio.levels.get(VolumeChannel::Sfx), 0.25);
    }
}

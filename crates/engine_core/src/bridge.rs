//! Call surface of the native game core.
//!
//! Every call can fail. Callers decide the fallback value, log the failure
//! once through [`or_fallback`], and carry on; nothing here is fatal.

use std::fmt;

use thiserror::Error;

use crate::{GamePhase, GameSnapshot};

/// Failure of a single call into the game core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BridgeError {
    #[error("native call `{call}` failed: {reason}")]
    CallFailed { call: &'static str, reason: String },
    #[error("game state is unavailable")]
    StateUnavailable,
    #[error("native call `{0}` is not supported by this backend")]
    Unsupported(&'static str),
}

impl BridgeError {
    pub fn call_failed(call: &'static str, reason: impl Into<String>) -> Self {
        Self::CallFailed { call, reason: reason.into() }
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;

/// Game-state, phase and control-settings access.
pub trait GameBridge {
    fn game_state(&self) -> BridgeResult<GameSnapshot>;

    fn set_phase(&mut self, phase: GamePhase) -> BridgeResult<()>;

    fn quit(&mut self) -> BridgeResult<()>;

    fn mouse_sensitivity(&self) -> BridgeResult<f32>;

    fn set_mouse_sensitivity(&mut self, sensitivity: f32) -> BridgeResult<()>;

    /// Window size in pixels as the game core sees it.
    fn window_size(&self) -> BridgeResult<(u32, u32)>;
}

/// Mixer channels exposed by the game core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeChannel {
    Master,
    Sfx,
    Music,
}

impl VolumeChannel {
    pub const ALL: [VolumeChannel; 3] = [VolumeChannel::Master, VolumeChannel::Sfx, VolumeChannel::Music];

    pub fn label(self) -> &'static str {
        match self {
            Self::Master => "Master",
            Self::Sfx => "SFX",
            Self::Music => "Music",
        }
    }
}

impl fmt::Display for VolumeChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Volume getters and setters. Levels are in 0.0..=1.0.
pub trait AudioBridge {
    fn volume(&self, channel: VolumeChannel) -> BridgeResult<f32>;

    fn set_volume(&mut self, channel: VolumeChannel, volume: f32) -> BridgeResult<()>;
}

/// Unwrap a bridge result, logging the failure and substituting `fallback`.
pub fn or_fallback<T>(result: BridgeResult<T>, fallback: T, what: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            log::warn!("{what}: {e}, using fallback");
            fallback
        }
    }
}

/// Log a failed fire-and-forget bridge command.
pub fn log_failure(result: BridgeResult<()>, what: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{what}: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_used_only_on_error() {
        assert_eq!(or_fallback(Ok(0.4), 1.0, "volume"), 0.4);
        assert_eq!(
            or_fallback(Err(BridgeError::call_failed("audio_get_master_volume", "boom")), 1.0, "volume"),
            1.0
        );
    }

    #[test]
    fn error_messages_name_the_call() {
        let e = BridgeError::call_failed("set_game_phase", "not linked");
        assert_eq!(e.to_string(), "native call `set_game_phase` failed: not linked");
    }
}

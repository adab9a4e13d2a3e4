//! Coarse game mode owned by the native game core.

use std::fmt;

/// Game phase as reported by the game core. Gates which UI panels are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl GamePhase {
    pub const ALL: [GamePhase; 4] = [
        GamePhase::Menu,
        GamePhase::Playing,
        GamePhase::Paused,
        GamePhase::GameOver,
    ];

    /// Decode the integer phase used on the native side (0..=3).
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Menu),
            1 => Some(Self::Playing),
            2 => Some(Self::Paused),
            3 => Some(Self::GameOver),
            _ => None,
        }
    }

    /// Integer phase value expected by the native phase-transition command.
    pub fn to_raw(self) -> i32 {
        match self {
            Self::Menu => 0,
            Self::Playing => 1,
            Self::Paused => 2,
            Self::GameOver => 3,
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Menu => "menu",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::GameOver => "game over",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_match_native_enum_order() {
        for (i, phase) in GamePhase::ALL.iter().enumerate() {
            assert_eq!(phase.to_raw(), i as i32);
            assert_eq!(GamePhase::from_raw(i as i32), Some(*phase));
        }
    }

    #[test]
    fn unknown_raw_phase_is_rejected() {
        assert_eq!(GamePhase::from_raw(-1), None);
        assert_eq!(GamePhase::from_raw(4), None);
    }
}

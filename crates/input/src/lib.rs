//! Keyboard input for UI panels.
//!
//! The game core reports keys as a raw code plus an action flag. This crate
//! decodes them into the closed set of keys the menus react to.

/// What happened to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Release,
    Press,
    Repeat,
}

impl KeyAction {
    /// Decode the native action flag (0 release, 1 press, 2 repeat).
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Release),
            1 => Some(Self::Press),
            2 => Some(Self::Repeat),
            _ => None,
        }
    }

    /// Menus act on presses and auto-repeat, never on release.
    pub fn is_down(self) -> bool {
        !matches!(self, Self::Release)
    }
}

impl From<ElementState> for KeyAction {
    fn from(state: ElementState) -> Self {
        match state {
            ElementState::Pressed => Self::Press,
            ElementState::Released => Self::Release,
        }
    }
}

/// Keys the UI responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    O,
    Enter,
    Escape,
    Space,
    Left,
    Right,
    /// Number row digit 1..=9.
    Digit(u8),
}

pub const RAW_ENTER: i32 = 13;
pub const RAW_ESCAPE: i32 = 27;
pub const RAW_SPACE: i32 = 32;
pub const RAW_LEFT: i32 = 37;
pub const RAW_RIGHT: i32 = 39;

impl Key {
    /// Decode a raw key code. Letters match in either case; digits are ASCII.
    pub fn from_raw(raw: i32) -> Option<Self> {
        let key = match raw {
            RAW_ENTER => Self::Enter,
            RAW_ESCAPE => Self::Escape,
            RAW_SPACE => Self::Space,
            RAW_LEFT => Self::Left,
            RAW_RIGHT => Self::Right,
            0x31..=0x39 => Self::Digit((raw - 0x30) as u8),
            _ => {
                let ch = u8::try_from(raw).ok()?.to_ascii_lowercase();
                match ch {
                    b'w' => Self::W,
                    b'a' => Self::A,
                    b's' => Self::S,
                    b'd' => Self::D,
                    b'o' => Self::O,
                    _ => return None,
                }
            }
        };
        Some(key)
    }

    /// Map a winit physical key. Arrow up/down double as W/S.
    pub fn from_winit(code: KeyCode) -> Option<Self> {
        let key = match code {
            KeyCode::KeyW | KeyCode::ArrowUp => Self::W,
            KeyCode::KeyS | KeyCode::ArrowDown => Self::S,
            KeyCode::KeyA => Self::A,
            KeyCode::KeyD => Self::D,
            KeyCode::KeyO => Self::O,
            KeyCode::Enter | KeyCode::NumpadEnter => Self::Enter,
            KeyCode::Escape => Self::Escape,
            KeyCode::Space => Self::Space,
            KeyCode::ArrowLeft => Self::Left,
            KeyCode::ArrowRight => Self::Right,
            KeyCode::Digit1 => Self::Digit(1),
            KeyCode::Digit2 => Self::Digit(2),
            KeyCode::Digit3 => Self::Digit(3),
            KeyCode::Digit4 => Self::Digit(4),
            KeyCode::Digit5 => Self::Digit(5),
            KeyCode::Digit6 => Self::Digit(6),
            KeyCode::Digit7 => Self::Digit(7),
            KeyCode::Digit8 => Self::Digit(8),
            KeyCode::Digit9 => Self::Digit(9),
            _ => return None,
        };
        Some(key)
    }

    /// True for the keys that confirm a menu selection.
    pub fn is_confirm(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// A decoded key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub action: KeyAction,
}

impl KeyEvent {
    pub fn press(key: Key) -> Self {
        Self { key, action: KeyAction::Press }
    }

    /// Decode a raw (key, action) pair. Unknown codes are dropped.
    pub fn from_raw(key: i32, action: i32) -> Option<Self> {
        let decoded = Key::from_raw(key).zip(KeyAction::from_raw(action));
        if decoded.is_none() {
            log::debug!("Ignoring unmapped key event ({key}, {action})");
        }
        decoded.map(|(key, action)| Self { key, action })
    }
}

// Re-export for convenience
pub use winit::event::ElementState;
pub use winit::keyboard::KeyCode;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_decode_in_both_cases() {
        assert_eq!(Key::from_raw('w' as i32), Some(Key::W));
        assert_eq!(Key::from_raw('W' as i32), Some(Key::W));
        assert_eq!(Key::from_raw('d' as i32), Some(Key::D));
        assert_eq!(Key::from_raw('x' as i32), None);
    }

    #[test]
    fn control_codes_decode() {
        assert_eq!(Key::from_raw(13), Some(Key::Enter));
        assert_eq!(Key::from_raw(27), Some(Key::Escape));
        assert_eq!(Key::from_raw(' ' as i32), Some(Key::Space));
        assert_eq!(Key::from_raw(37), Some(Key::Left));
        assert_eq!(Key::from_raw(39), Some(Key::Right));
        assert_eq!(Key::from_raw('4' as i32), Some(Key::Digit(4)));
        assert_eq!(Key::from_raw(-5), None);
        assert_eq!(Key::from_raw(1000), None);
    }

    #[test]
    fn release_is_not_down() {
        assert!(!KeyAction::Release.is_down());
        assert!(KeyAction::Press.is_down());
        assert!(KeyAction::Repeat.is_down());
        assert_eq!(KeyAction::from_raw(7), None);
    }

    #[test]
    fn winit_codes_map_to_menu_keys() {
        assert_eq!(Key::from_winit(KeyCode::ArrowUp), Some(Key::W));
        assert_eq!(Key::from_winit(KeyCode::NumpadEnter), Some(Key::Enter));
        assert_eq!(Key::from_winit(KeyCode::KeyQ), None);
        assert_eq!(KeyAction::from(ElementState::Released), KeyAction::Release);
    }

    #[test]
    fn raw_events_decode_pairwise() {
        assert_eq!(KeyEvent::from_raw(27, 1), Some(KeyEvent::press(Key::Escape)));
        assert_eq!(KeyEvent::from_raw(27, 9), None);
    }
}

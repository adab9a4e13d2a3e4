//! Values edited by the settings menu.

use serde::{Deserialize, Serialize};

pub const RESOLUTIONS: [&str; 4] = ["800x600", "1024x768", "1280x720", "1920x1080"];

pub const MIN_SENSITIVITY: f32 = 0.1;
pub const MAX_SENSITIVITY: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quality {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

/// Three-step levels that clamp at both ends instead of wrapping.
pub trait Stepped: Copy + PartialEq + Sized {
    const LEVELS: [Self; 3];

    fn step(self, direction: i32) -> Self {
        let idx = Self::LEVELS.iter().position(|l| *l == self).unwrap_or(0) as i32;
        let next = (idx + direction).clamp(0, Self::LEVELS.len() as i32 - 1);
        Self::LEVELS[next as usize]
    }
}

impl Stepped for Quality {
    const LEVELS: [Self; 3] = [Self::Low, Self::Medium, Self::High];
}

impl Stepped for Difficulty {
    const LEVELS: [Self; 3] = [Self::Easy, Self::Normal, Self::Hard];
}

impl Quality {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Index into [`RESOLUTIONS`].
    pub resolution: usize,
    pub fullscreen: bool,
    pub quality: Quality,
    pub mouse_sensitivity: f32,
    pub invert_mouse: bool,
    pub difficulty: Difficulty,
    pub show_fps: bool,
    pub auto_reload: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            resolution: 1,
            fullscreen: false,
            quality: Quality::Medium,
            mouse_sensitivity: 2.0,
            invert_mouse: false,
            difficulty: Difficulty::Normal,
            show_fps: true,
            auto_reload: true,
        }
    }
}

impl GameSettings {
    pub fn resolution_label(&self) -> &'static str {
        RESOLUTIONS[self.resolution % RESOLUTIONS.len()]
    }

    /// Cycle the resolution list, wrapping at both ends.
    pub fn cycle_resolution(&mut self, direction: i32) {
        let n = RESOLUTIONS.len() as i32;
        self.resolution = ((self.resolution as i32 + direction).rem_euclid(n)) as usize;
    }

    pub fn adjust_sensitivity(&mut self, delta: f32) {
        self.mouse_sensitivity = clamp_sensitivity(self.mouse_sensitivity + delta);
    }
}

pub fn clamp_sensitivity(value: f32) -> f32 {
    if value.is_nan() {
        return MIN_SENSITIVITY;
    }
    value.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY)
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepped_levels_clamp() {
        assert_eq!(Quality::Low.step(-1), Quality::Low);
        assert_eq!(Quality::Medium.step(1), Quality::High);
        assert_eq!(Quality::High.step(1), Quality::High);
        assert_eq!(Difficulty::Normal.step(-1), Difficulty::Easy);
    }

    #[test]
    fn resolution_wraps_both_ways() {
        let mut s = GameSettings { resolution: 0, ..Default::default() };
        s.cycle_resolution(-1);
        assert_eq!(s.resolution_label(), "1920x1080");
        s.cycle_resolution(1);
        assert_eq!(s.resolution_label(), "800x600");
    }

    #[test]
    fn sensitivity_is_clamped() {
        let mut s = GameSettings { mouse_sensitivity: 9.95, ..Default::default() };
        s.adjust_sensitivity(0.1);
        assert_eq!(s.mouse_sensitivity, MAX_SENSITIVITY);
        s.mouse_sensitivity = 0.15;
        s.adjust_sensitivity(-0.1);
        assert_eq!(s.mouse_sensitivity, MIN_SENSITIVITY);
        assert_eq!(clamp_sensitivity(f32::NAN), MIN_SENSITIVITY);
    }
}

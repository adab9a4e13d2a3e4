//! Threshold banding: maps a continuous value to a discrete color band.
//!
//! Comparisons are strict (`>`): a value sitting exactly on a threshold
//! belongs to the band below it.

use renderer::Rgb;

/// Band index for `value` against ascending `thresholds`.
///
/// Scans from the highest threshold down and returns `i + 1` for the first
/// threshold `value` exceeds, or 0 if it exceeds none.
pub fn band(value: f32, thresholds: &[f32]) -> usize {
    thresholds
        .iter()
        .rposition(|t| value > *t)
        .map_or(0, |i| i + 1)
}

pub const VOLUME_THRESHOLDS: [f32; 2] = [0.3, 0.7];
pub const HEALTH_THRESHOLDS: [f32; 1] = [0.3];

pub const WHITE: Rgb = [1.0, 1.0, 1.0];
pub const YELLOW: Rgb = [1.0, 1.0, 0.0];
pub const RED: Rgb = [1.0, 0.0, 0.0];
pub const CYAN: Rgb = [0.0, 1.0, 1.0];
pub const GREEN: Rgb = [0.0, 128.0 / 255.0, 0.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeBand {
    Low,
    Medium,
    High,
}

impl VolumeBand {
    pub fn of(volume: f32) -> Self {
        match band(volume, &VOLUME_THRESHOLDS) {
            0 => Self::Low,
            1 => Self::Medium,
            _ => Self::High,
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            Self::Low => [1.0, 0.3, 0.2],
            Self::Medium => [1.0, 1.0, 0.2],
            Self::High => [0.2, 1.0, 0.2],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedBand {
    Walking,
    Running,
    Fast,
    BunnyHop,
}

impl SpeedBand {
    /// `thresholds` are normal, fast and bunny-hop speeds, ascending.
    pub fn of(speed: f32, thresholds: &[f32; 3]) -> Self {
        match band(speed, thresholds) {
            0 => Self::Walking,
            1 => Self::Running,
            2 => Self::Fast,
            _ => Self::BunnyHop,
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            Self::Walking | Self::Running => WHITE,
            Self::Fast => YELLOW,
            Self::BunnyHop => RED,
        }
    }

    pub fn color_name(self) -> &'static str {
        match self {
            Self::Walking | Self::Running => "WHITE",
            Self::Fast => "YELLOW",
            Self::BunnyHop => "RED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    Critical,
    Healthy,
}

impl HealthBand {
    pub fn of(fraction: f32) -> Self {
        if band(fraction, &HEALTH_THRESHOLDS) == 0 {
            Self::Critical
        } else {
            Self::Healthy
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            Self::Critical => RED,
            Self::Healthy => GREEN,
        }
    }
}

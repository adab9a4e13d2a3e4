//! UI configuration (window defaults, volume defaults, tuning). Loaded from ui_config.ron at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::settings::GameSettings;

/// Default channel levels used when the audio backend cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeDefaults {
    pub master: f32,
    pub sfx: f32,
    pub music: f32,
}

impl Default for VolumeDefaults {
    fn default() -> Self {
        Self { master: 1.0, sfx: 1.0, music: 0.7 }
    }
}

/// Speedometer band boundaries in units per second. Must be strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedThresholds {
    pub normal: f32,
    pub fast: f32,
    pub bunny_hop: f32,
}

impl Default for SpeedThresholds {
    fn default() -> Self {
        Self { normal: 10.0, fast: 15.0, bunny_hop: 20.0 }
    }
}

impl SpeedThresholds {
    /// Validate a new set; `None` unless `0 < normal < fast < bunny_hop`.
    pub fn new(normal: f32, fast: f32, bunny_hop: f32) -> Option<Self> {
        (normal > 0.0 && fast > normal && bunny_hop > fast).then_some(Self { normal, fast, bunny_hop })
    }

    pub fn as_array(&self) -> [f32; 3] {
        [self.normal, self.fast, self.bunny_hop]
    }
}

/// Persistent UI settings. Loaded from `ui_config.ron` in the current directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Window width used until the game core reports one.
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    /// Smallest layout size; reported window sizes are floored to this.
    #[serde(default = "default_min_width")]
    pub min_width: u32,
    #[serde(default = "default_min_height")]
    pub min_height: u32,
    #[serde(default)]
    pub default_volumes: VolumeDefaults,
    /// Volume change per key press in the audio panel.
    #[serde(default = "default_step")]
    pub volume_step: f32,
    /// Sensitivity change per Left/Right press in the settings menu.
    #[serde(default = "default_step")]
    pub sensitivity_step: f32,
    #[serde(default)]
    pub speed_thresholds: SpeedThresholds,
    /// Pause menu fade-in rate (alpha per second).
    #[serde(default = "default_fade_speed")]
    pub pause_fade_speed: f32,
    #[serde(default = "default_target_alpha")]
    pub pause_target_alpha: f32,
    /// Last applied settings-menu values.
    #[serde(default)]
    pub settings: GameSettings,
}

fn default_window_width() -> u32 {
    1024
}
fn default_window_height() -> u32 {
    768
}
fn default_min_width() -> u32 {
    800
}
fn default_min_height() -> u32 {
    600
}
fn default_step() -> f32 {
    0.1
}
fn default_fade_speed() -> f32 {
    3.0
}
fn default_target_alpha() -> f32 {
    0.8
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            min_width: default_min_width(),
            min_height: default_min_height(),
            default_volumes: VolumeDefaults::default(),
            volume_step: default_step(),
            sensitivity_step: default_step(),
            speed_thresholds: SpeedThresholds::default(),
            pause_fade_speed: default_fade_speed(),
            pause_target_alpha: default_target_alpha(),
            settings: GameSettings::default(),
        }
    }
}

impl UiConfig {
    /// Load config from `ui_config.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if let Ok(data) = std::fs::read_to_string(path) {
            match Self::parse(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid UI config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    pub fn parse(data: &str) -> Result<Self, ron::error::SpannedError> {
        let mut config: Self = ron::from_str(data)?;
        if SpeedThresholds::new(
            config.speed_thresholds.normal,
            config.speed_thresholds.fast,
            config.speed_thresholds.bunny_hop,
        )
        .is_none()
        {
            log::warn!("Speed thresholds {:?} are not increasing, using defaults", config.speed_thresholds);
            config.speed_thresholds = SpeedThresholds::default();
        }
        Ok(config)
    }

    /// Save current config to `ui_config.ron`. Logs on error.
    pub fn save(&self) {
        self.save_to(&config_path());
    }

    pub fn save_to(&self, path: &Path) {
        match ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            Ok(s) => {
                if let Err(e) = std::fs::write(path, s) {
                    log::warn!("Could not write UI config to {:?}: {}", path, e);
                }
            }
            Err(e) => log::warn!("Could not serialize UI config: {}", e),
        }
    }

    /// Floor a reported window size to the configured minimum.
    pub fn clamp_window(&self, width: u32, height: u32) -> (u32, u32) {
        (width.max(self.min_width), height.max(self.min_height))
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("ui_config.ron")
}

//! In-game volume panel.

use audio::clamp_volume;
use engine_core::{log_failure, or_fallback, AudioBridge, VolumeChannel};
use input::{Key, KeyAction};
use renderer::{rect_or_log, text_or_echo, DrawSurface};

use crate::band::VolumeBand;
use crate::config::VolumeDefaults;
use crate::panel::Panel;

const PANEL_X: f32 = 50.0;
const PANEL_Y: f32 = 100.0;
const PANEL_W: f32 = 300.0;
const PANEL_H: f32 = 200.0;
const BAR_W: f32 = 280.0;
const BAR_H: f32 = 15.0;

pub struct AudioSettings {
    visible: bool,
    master: f32,
    sfx: f32,
    music: f32,
    defaults: VolumeDefaults,
    step: f32,
}

impl AudioSettings {
    /// Create the panel with levels read from the audio backend.
    pub fn new(audio: &dyn AudioBridge, defaults: VolumeDefaults, step: f32) -> Self {
        let mut panel = Self {
            visible: false,
            master: defaults.master,
            sfx: defaults.sfx,
            music: defaults.music,
            defaults,
            step,
        };
        panel.refresh(audio);
        panel
    }

    /// Re-read all three levels. A failed read restores every channel to its default.
    pub fn refresh(&mut self, audio: &dyn AudioBridge) {
        let read = || -> engine_core::BridgeResult<(f32, f32, f32)> {
            Ok((
                audio.volume(VolumeChannel::Master)?,
                audio.volume(VolumeChannel::Sfx)?,
                audio.volume(VolumeChannel::Music)?,
            ))
        };
        let fallback = (self.defaults.master, self.defaults.sfx, self.defaults.music);
        let (master, sfx, music) = or_fallback(read(), fallback, "Error refreshing audio settings");
        self.master = clamp_volume(master);
        self.sfx = clamp_volume(sfx);
        self.music = clamp_volume(music);
    }

    pub fn show(&mut self, audio: &dyn AudioBridge) {
        self.visible = true;
        self.refresh(audio);
        log::info!("Audio settings shown");
    }

    pub fn hide(&mut self) {
        self.visible = false;
        log::info!("Audio settings hidden");
    }

    pub fn toggle(&mut self, audio: &dyn AudioBridge) {
        if self.visible {
            self.hide();
        } else {
            self.show(audio);
        }
    }

    pub fn volume(&self, channel: VolumeChannel) -> f32 {
        match channel {
            VolumeChannel::Master => self.master,
            VolumeChannel::Sfx => self.sfx,
            VolumeChannel::Music => self.music,
        }
    }

    /// Store a clamped level and forward it to the audio backend.
    pub fn set_volume(&mut self, audio: &mut dyn AudioBridge, channel: VolumeChannel, volume: f32) {
        let volume = clamp_volume(volume);
        match channel {
            VolumeChannel::Master => self.master = volume,
            VolumeChannel::Sfx => self.sfx = volume,
            VolumeChannel::Music => self.music = volume,
        }
        let what = format!("Error setting {channel} volume");
        if log_failure(audio.set_volume(channel, volume), &what) {
            log::info!("{channel} volume set to {}%", percent(volume));
        }
    }

    pub fn set_master_volume(&mut self, audio: &mut dyn AudioBridge, volume: f32) {
        self.set_volume(audio, VolumeChannel::Master, volume);
    }

    pub fn set_sfx_volume(&mut self, audio: &mut dyn AudioBridge, volume: f32) {
        self.set_volume(audio, VolumeChannel::Sfx, volume);
    }

    pub fn set_music_volume(&mut self, audio: &mut dyn AudioBridge, volume: f32) {
        self.set_volume(audio, VolumeChannel::Music, volume);
    }

    pub fn update(&mut self, _dt: f32) {}

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        if !self.visible {
            return;
        }
        rect_or_log(surface, PANEL_X, PANEL_Y, PANEL_W, PANEL_H, [0.2, 0.2, 0.3, 0.9]);
        text_or_echo(surface, "Audio Settings", PANEL_X + 10.0, PANEL_Y + 10.0, [1.0, 1.0, 1.0]);

        for (i, channel) in VolumeChannel::ALL.iter().enumerate() {
            let y = PANEL_Y + 40.0 + i as f32 * 45.0;
            let volume = self.volume(*channel);
            text_or_echo(
                surface,
                &format!("{} Volume: {}%", channel.label(), percent(volume)),
                PANEL_X + 10.0,
                y,
                [0.9, 0.9, 0.9],
            );
            render_volume_bar(surface, PANEL_X + 10.0, y + 15.0, BAR_W, BAR_H, volume);
        }

        text_or_echo(surface, "Use 1-6 to adjust volumes", PANEL_X + 10.0, PANEL_Y + 175.0, [0.7, 0.7, 0.7]);
    }

    /// Keys 1/2 raise/lower master, 3/4 SFX, 5/6 music.
    pub fn handle_input(&mut self, audio: &mut dyn AudioBridge, key: Key, action: KeyAction) {
        if !self.visible || !action.is_down() {
            return;
        }
        let Key::Digit(d @ 1..=6) = key else {
            return;
        };
        let channel = VolumeChannel::ALL[usize::from((d - 1) / 2)];
        let delta = if d % 2 == 1 { self.step } else { -self.step };
        let target = self.volume(channel) + delta;
        self.set_volume(audio, channel, target);
    }
}

/// Whole percent, truncated.
fn percent(volume: f32) -> i32 {
    (volume * 100.0) as i32
}

fn render_volume_bar(surface: &mut dyn DrawSurface, x: f32, y: f32, w: f32, h: f32, volume: f32) {
    rect_or_log(surface, x, y, w, h, [0.1, 0.1, 0.1, 0.8]);
    let [r, g, b] = VolumeBand::of(volume).color();
    rect_or_log(surface, x + 2.0, y + 2.0, w * volume - 4.0, h - 4.0, [r, g, b, 0.9]);
}

impl Panel for AudioSettings {
    fn name(&self) -> &'static str {
        "Audio settings"
    }

    fn initialize(&mut self, _width: u32, _height: u32) -> bool {
        log::info!("Audio settings initialized");
        true
    }

    /// Fixed position; nothing depends on the window size.
    fn on_resize(&mut self, _width: u32, _height: u32) {}

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn cleanup(&mut self) {
        self.visible = false;
        log::info!("Audio settings cleaned up");
    }
}

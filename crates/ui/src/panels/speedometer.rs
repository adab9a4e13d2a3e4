//! Top-right speed readout with ground/air status and a bunny-hop indicator.

use renderer::{rect_or_log, text_or_echo, DrawSurface, Rgb};

use crate::band::{SpeedBand, RED};
use crate::config::SpeedThresholds;
use crate::panel::Panel;

const WIDTH: f32 = 200.0;
const HEIGHT: f32 = 80.0;
const MARGIN: f32 = 20.0;
const STATUS_TEXT: Rgb = [0.8, 0.8, 0.8];

pub struct Speedometer {
    initialized: bool,
    position: (f32, f32),
    speed: f32,
    on_ground: bool,
    thresholds: SpeedThresholds,
}

impl Speedometer {
    pub fn new(thresholds: SpeedThresholds) -> Self {
        Self {
            initialized: false,
            position: (0.0, MARGIN),
            speed: 0.0,
            on_ground: true,
            thresholds,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    pub fn size(&self) -> (f32, f32) {
        (WIDTH, HEIGHT)
    }

    pub fn thresholds(&self) -> SpeedThresholds {
        self.thresholds
    }

    pub fn band(&self) -> SpeedBand {
        SpeedBand::of(self.speed, &self.thresholds.as_array())
    }

    /// Pin the box somewhere other than the top-right corner. The next resize restores the corner.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = (x, y);
        log::info!("Speedometer position set to ({x}, {y})");
    }

    /// Replace the band boundaries. Rejects sets that are not strictly increasing and positive.
    pub fn set_speed_thresholds(&mut self, normal: f32, fast: f32, bunny_hop: f32) -> bool {
        match SpeedThresholds::new(normal, fast, bunny_hop) {
            Some(t) => {
                self.thresholds = t;
                log::info!("Speed thresholds updated: {normal}, {fast}, {bunny_hop}");
                true
            }
            None => {
                log::warn!("Rejected speed thresholds: {normal}, {fast}, {bunny_hop}");
                false
            }
        }
    }

    pub fn update(&mut self, speed: f32, on_ground: bool) {
        if !self.initialized {
            return;
        }
        self.speed = speed;
        self.on_ground = on_ground;
    }

    fn is_bunny_hopping(&self) -> bool {
        self.speed > self.thresholds.normal && !self.on_ground
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        if !self.initialized {
            return;
        }
        let (x, y) = self.position;
        let band = self.band();
        let speed_text = format!("Speed: {:.1} u/s", self.speed);
        let status = if self.on_ground { "Ground" } else { "Air" };

        rect_or_log(surface, x, y, WIDTH, HEIGHT, [0.0, 0.0, 0.0, 0.7]);
        text_or_echo(surface, &speed_text, x + 10.0, y + 15.0, band.color());
        text_or_echo(surface, status, x + 10.0, y + 35.0, STATUS_TEXT);
        if self.is_bunny_hopping() {
            text_or_echo(surface, "BUNNY HOP!", x + 10.0, y + 55.0, RED);
        }

        if self.speed > self.thresholds.fast {
            log::debug!("[SPEEDOMETER] {speed_text} ({status}) - Color: {}", band.color_name());
        }
    }
}

impl Panel for Speedometer {
    fn name(&self) -> &'static str {
        "Speedometer"
    }

    fn initialize(&mut self, width: u32, height: u32) -> bool {
        self.on_resize(width, height);
        self.speed = 0.0;
        self.on_ground = true;
        self.initialized = true;
        log::info!("Speedometer initialized at position ({}, {})", self.position.0, self.position.1);
        true
    }

    fn on_resize(&mut self, width: u32, _height: u32) {
        self.position = (width as f32 - WIDTH - MARGIN, MARGIN);
    }

    fn is_visible(&self) -> bool {
        self.initialized
    }

    fn cleanup(&mut self) {
        self.initialized = false;
        log::info!("Speedometer cleaned up");
    }
}

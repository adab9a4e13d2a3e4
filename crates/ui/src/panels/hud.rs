//! In-game heads-up display: health, ammo, score, crosshair and the game-over overlay.

use engine_core::PlayerSnapshot;
use renderer::{rect_or_log, text_or_echo, DrawSurface};

use crate::band::{HealthBand, CYAN, RED, WHITE, YELLOW};
use crate::panel::Panel;

const HEALTH_BAR_WIDTH: f32 = 200.0;
const HEALTH_BAR_HEIGHT: f32 = 20.0;
const CROSSHAIR_SIZE: f32 = 20.0;
const CROSSHAIR_THICKNESS: f32 = 2.0;

/// Screen anchors, recomputed on every resize.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HudLayout {
    pub health_bar: (f32, f32),
    pub ammo_counter: (f32, f32),
    pub score: (f32, f32),
    pub crosshair: (f32, f32),
}

impl HudLayout {
    fn for_window(width: u32, height: u32) -> Self {
        let (w, h) = (width as f32, height as f32);
        Self {
            health_bar: (20.0, h - 60.0),
            ammo_counter: (w - 150.0, h - 60.0),
            score: (20.0, 20.0),
            crosshair: ((width / 2) as f32, (height / 2) as f32),
        }
    }
}

pub struct GameHud {
    initialized: bool,
    window: (u32, u32),
    layout: HudLayout,
    player: PlayerSnapshot,
    score: i32,
}

impl Default for GameHud {
    fn default() -> Self {
        Self::new()
    }
}

impl GameHud {
    pub fn new() -> Self {
        Self {
            initialized: false,
            window: (1024, 768),
            layout: HudLayout::for_window(1024, 768),
            player: PlayerSnapshot::default(),
            score: 0,
        }
    }

    pub fn layout(&self) -> HudLayout {
        self.layout
    }

    /// Latch the values the next render draws.
    pub fn update(&mut self, player: &PlayerSnapshot, score: i32, _dt: f32) {
        if !self.initialized {
            return;
        }
        self.player = *player;
        self.score = score;
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        if !self.initialized {
            return;
        }
        self.render_health_bar(surface);
        self.render_ammo_counter(surface);
        self.render_score(surface);
        self.render_crosshair(surface);
        log::trace!(
            "[HUD] Health: {}/{}, Ammo: {}/{}, Score: {}",
            self.player.health,
            self.player.max_health,
            self.player.ammo,
            self.player.max_ammo,
            self.score
        );
    }

    fn render_health_bar(&self, surface: &mut dyn DrawSurface) {
        let (x, y) = self.layout.health_bar;
        let fraction = self.player.health_fraction();
        let [r, g, b] = HealthBand::of(fraction).color();

        rect_or_log(surface, x, y, HEALTH_BAR_WIDTH, HEALTH_BAR_HEIGHT, [0.2, 0.2, 0.2, 0.8]);
        rect_or_log(
            surface,
            x + 2.0,
            y + 2.0,
            (HEALTH_BAR_WIDTH - 4.0) * fraction,
            HEALTH_BAR_HEIGHT - 4.0,
            [r, g, b, 0.9],
        );
        let text = format!("Health: {}/{}", self.player.health, self.player.max_health);
        text_or_echo(surface, &text, x, y - 20.0, WHITE);
    }

    fn render_ammo_counter(&self, surface: &mut dyn DrawSurface) {
        let (x, y) = self.layout.ammo_counter;
        let text = format!("Ammo: {}/{}", self.player.ammo, self.player.max_ammo);
        text_or_echo(surface, &text, x, y, CYAN);
        if self.player.is_low_ammo() {
            text_or_echo(surface, "LOW AMMO!", x, y - 20.0, RED);
        }
    }

    fn render_score(&self, surface: &mut dyn DrawSurface) {
        let (x, y) = self.layout.score;
        text_or_echo(surface, &format!("Score: {}", self.score), x, y, YELLOW);
    }

    /// A plus sign built from two thin rects.
    fn render_crosshair(&self, surface: &mut dyn DrawSurface) {
        let (cx, cy) = self.layout.crosshair;
        let half = CROSSHAIR_SIZE / 2.0;
        let t = CROSSHAIR_THICKNESS;
        let [r, g, b] = WHITE;
        rect_or_log(surface, cx - half, cy - t / 2.0, CROSSHAIR_SIZE, t, [r, g, b, 1.0]);
        rect_or_log(surface, cx - t / 2.0, cy - half, t, CROSSHAIR_SIZE, [r, g, b, 1.0]);
    }

    /// Dim the whole window and print the final score.
    pub fn show_game_over(&self, surface: &mut dyn DrawSurface, final_score: i32) {
        if !self.initialized {
            return;
        }
        let (w, h) = self.window;
        let (cx, cy) = ((w / 2) as f32, (h / 2) as f32);
        rect_or_log(surface, 0.0, 0.0, w as f32, h as f32, [0.0, 0.0, 0.0, 0.7]);
        text_or_echo(surface, "GAME OVER", cx - 100.0, cy - 50.0, RED);
        text_or_echo(surface, &format!("Final Score: {final_score}"), cx - 80.0, cy, YELLOW);
        log::debug!("[HUD] GAME OVER - Final Score: {final_score}");
    }
}

impl Panel for GameHud {
    fn name(&self) -> &'static str {
        "Game HUD"
    }

    fn initialize(&mut self, width: u32, height: u32) -> bool {
        self.on_resize(width, height);
        self.initialized = true;
        log::info!("Game HUD initialized");
        true
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.window = (width, height);
        self.layout = HudLayout::for_window(width, height);
    }

    fn is_visible(&self) -> bool {
        self.initialized
    }

    fn cleanup(&mut self) {
        self.initialized = false;
        log::info!("Game HUD cleaned up");
    }
}

//! Settings menu: category tabs across the top, editable rows below.

use engine_core::{or_fallback, GameBridge};
use input::{Key, KeyAction};
use renderer::{rect_or_log, text_or_echo, DrawSurface};

use crate::pager::{CategoryPager, SettingsCategory};
use crate::panel::{CenteredBox, Panel, UiCommand};
use crate::settings::{clamp_sensitivity, yes_no, GameSettings};

const ACTIVE_TEXT: [f32; 3] = [1.0, 1.0, 0.2];
const HIGHLIGHT: [f32; 4] = [0.3, 0.3, 0.5, 0.7];
const HINT_TEXT: [f32; 3] = [0.6, 0.6, 0.6];
const OPTION_SPACING: f32 = 35.0;

pub struct SettingsMenu {
    pager: CategoryPager,
    settings: GameSettings,
    visible: bool,
    layout: CenteredBox,
    window: (u32, u32),
}

impl SettingsMenu {
    pub fn new(settings: GameSettings, sensitivity_step: f32) -> Self {
        Self {
            pager: CategoryPager::new(sensitivity_step),
            settings,
            visible: false,
            layout: CenteredBox::new(500.0, 400.0),
            window: (1024, 768),
        }
    }

    /// Open on the first category and pull the current sensitivity from the game core.
    pub fn show(&mut self, game: &dyn GameBridge) {
        self.visible = true;
        self.pager.reset();
        self.load_current_settings(game);
        log::info!("Settings menu shown");
    }

    pub fn hide(&mut self) {
        self.visible = false;
        log::info!("Settings menu hidden");
    }

    pub fn toggle(&mut self, game: &dyn GameBridge) {
        if self.visible {
            self.hide();
        } else {
            self.show(game);
        }
    }

    fn load_current_settings(&mut self, game: &dyn GameBridge) {
        let current = self.settings.mouse_sensitivity;
        let loaded = or_fallback(game.mouse_sensitivity(), current, "Error loading settings");
        self.settings.mouse_sensitivity = clamp_sensitivity(loaded);
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn category(&self) -> SettingsCategory {
        self.pager.category()
    }

    pub fn selected_option(&self) -> usize {
        self.pager.selected_option()
    }

    pub fn layout(&self) -> CenteredBox {
        self.layout
    }

    pub fn update(&mut self, _dt: f32) {
        // Nothing animates; values change only on input.
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        if !self.visible {
            return;
        }
        let b = self.layout;

        rect_or_log(surface, 0.0, 0.0, self.window.0 as f32, self.window.1 as f32, [0.0, 0.0, 0.1, 0.8]);
        rect_or_log(surface, b.x - 20.0, b.y - 20.0, b.width + 40.0, b.height + 40.0, [0.1, 0.1, 0.2, 0.9]);
        text_or_echo(surface, "SETTINGS", b.x + b.width / 2.0 - 60.0, b.y + 20.0, ACTIVE_TEXT);

        self.render_categories(surface);
        self.render_rows(surface);

        let hint_y = b.y + b.height - 60.0;
        text_or_echo(
            surface,
            "A/D - Change Category  |  W/S - Navigate  |  Left/Right - Change Value",
            b.x + 20.0,
            hint_y,
            HINT_TEXT,
        );
        text_or_echo(surface, "ENTER - Apply  |  ESC - Back to Menu", b.x + 20.0, hint_y + 20.0, HINT_TEXT);
    }

    fn render_categories(&self, surface: &mut dyn DrawSurface) {
        let y = self.layout.y + 60.0;
        for (i, category) in SettingsCategory::ALL.iter().enumerate() {
            let x = self.layout.x + 20.0 + i as f32 * 80.0;
            if *category == self.pager.category() {
                rect_or_log(surface, x - 5.0, y - 5.0, 70.0, 25.0, HIGHLIGHT);
                text_or_echo(surface, category.label(), x, y, ACTIVE_TEXT);
            } else {
                text_or_echo(surface, category.label(), x, y, [0.7, 0.7, 0.7]);
            }
        }
    }

    /// Label/value pairs for the current category's rows.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let s = &self.settings;
        match self.pager.category() {
            SettingsCategory::Graphics => vec![
                ("Resolution:", s.resolution_label().to_string()),
                ("Fullscreen:", yes_no(s.fullscreen).to_string()),
                ("Quality:", s.quality.label().to_string()),
            ],
            SettingsCategory::Audio => Vec::new(),
            SettingsCategory::Controls => vec![
                ("Mouse Sensitivity:", format!("{:.1}", s.mouse_sensitivity)),
                ("Invert Mouse:", yes_no(s.invert_mouse).to_string()),
            ],
            SettingsCategory::Gameplay => vec![
                ("Difficulty:", s.difficulty.label().to_string()),
                ("Show FPS:", yes_no(s.show_fps).to_string()),
                ("Auto Reload:", yes_no(s.auto_reload).to_string()),
            ],
        }
    }

    fn render_rows(&self, surface: &mut dyn DrawSurface) {
        let b = self.layout;
        let start_y = b.y + 110.0;

        if self.pager.category() == SettingsCategory::Audio {
            text_or_echo(
                surface,
                "Audio settings are managed by the Audio Settings panel",
                b.x + 20.0,
                start_y,
                [0.8, 0.8, 0.8],
            );
            text_or_echo(surface, "Press 'O' in game to open audio settings", b.x + 20.0, start_y + 25.0, HINT_TEXT);
            return;
        }

        for (i, (label, value)) in self.rows().iter().enumerate() {
            let y = start_y + i as f32 * OPTION_SPACING;
            if i == self.pager.selected_option() {
                rect_or_log(surface, b.x + 15.0, y - 5.0, b.width - 30.0, 25.0, HIGHLIGHT);
                text_or_echo(surface, &format!("> {label}"), b.x + 20.0, y, ACTIVE_TEXT);
                text_or_echo(surface, value, b.x + 200.0, y, [0.2, 1.0, 0.2]);
            } else {
                text_or_echo(surface, label, b.x + 30.0, y, [0.8, 0.8, 0.8]);
                text_or_echo(surface, value, b.x + 200.0, y, [0.6, 0.8, 0.6]);
            }
        }
    }

    pub fn handle_input(&mut self, key: Key, action: KeyAction) -> Option<UiCommand> {
        if !self.visible || !action.is_down() {
            return None;
        }
        match key {
            Key::A => self.pager.prev_category(),
            Key::D => self.pager.next_category(),
            Key::W => self.pager.move_option(-1),
            Key::S => self.pager.move_option(1),
            Key::Left => self.pager.change_value(-1, &mut self.settings),
            Key::Right => self.pager.change_value(1, &mut self.settings),
            Key::Enter => return Some(UiCommand::ApplySettings(self.settings.clone())),
            Key::Escape => self.hide(),
            _ => {}
        }
        None
    }
}

impl Panel for SettingsMenu {
    fn name(&self) -> &'static str {
        "Settings menu"
    }

    fn initialize(&mut self, width: u32, height: u32) -> bool {
        self.on_resize(width, height);
        log::info!("Settings menu initialized at ({}, {})", self.layout.x, self.layout.y);
        true
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.window = (width, height);
        self.layout.center_in(width, height);
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn cleanup(&mut self) {
        self.visible = false;
        self.pager.reset();
        log::info!("Settings menu cleaned up");
    }
}

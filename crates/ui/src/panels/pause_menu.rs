//! In-game pause menu with a fade-in backdrop.

use engine_core::GamePhase;
use input::{Key, KeyAction};
use renderer::{rect_or_log, text_or_echo, DrawSurface};

use crate::menu::{MenuItem, MenuOptionList};
use crate::panel::{CenteredBox, Panel, UiCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseAction {
    Resume,
    Settings,
    MainMenu,
    Quit,
}

const SELECTED_TEXT: [f32; 3] = [1.0, 1.0, 0.2];
const NORMAL_TEXT: [f32; 3] = [0.8, 0.8, 0.8];
const HINT_TEXT: [f32; 3] = [0.6, 0.6, 0.6];
const HIGHLIGHT: [f32; 4] = [0.3, 0.3, 0.5, 0.7];

pub struct PauseMenu {
    options: MenuOptionList<PauseAction>,
    visible: bool,
    layout: CenteredBox,
    window: (u32, u32),
    fade_alpha: f32,
    target_alpha: f32,
    fade_speed: f32,
}

impl PauseMenu {
    pub fn new(fade_speed: f32, target_alpha: f32) -> Self {
        Self {
            options: MenuOptionList::from_items([
                MenuItem::new("Resume Game", PauseAction::Resume),
                MenuItem::new("Settings", PauseAction::Settings),
                MenuItem::new("Main Menu", PauseAction::MainMenu),
                MenuItem::new("Quit Game", PauseAction::Quit),
            ]),
            visible: false,
            layout: CenteredBox::new(250.0, 300.0),
            window: (1024, 768),
            fade_alpha: 0.0,
            target_alpha,
            fade_speed,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
        self.options.reset();
        self.fade_alpha = 0.0;
        log::info!("Pause menu shown");
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.fade_alpha = 0.0;
        log::info!("Pause menu hidden");
    }

    pub fn toggle(&mut self) {
        if self.visible {
            self.hide();
        } else {
            self.show();
        }
    }

    pub fn selected(&self) -> usize {
        self.options.selected()
    }

    pub fn fade_alpha(&self) -> f32 {
        self.fade_alpha
    }

    pub fn layout(&self) -> CenteredBox {
        self.layout
    }

    pub fn update(&mut self, dt: f32) {
        if !self.visible {
            return;
        }
        if self.fade_alpha < self.target_alpha {
            self.fade_alpha = (self.fade_alpha + self.fade_speed * dt).min(self.target_alpha);
        }
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        if !self.visible {
            return;
        }
        let (w, h) = (self.window.0 as f32, self.window.1 as f32);
        let b = self.layout;

        rect_or_log(surface, 0.0, 0.0, w, h, [0.0, 0.0, 0.0, self.fade_alpha * 0.7]);
        rect_or_log(surface, b.x - 20.0, b.y - 20.0, b.width + 40.0, b.height + 40.0, [0.1, 0.1, 0.2, self.fade_alpha]);

        text_or_echo(surface, "PAUSED", b.x + b.width / 2.0 - 40.0, b.y + 30.0, SELECTED_TEXT);

        let option_y = b.y + 80.0;
        for (i, item) in self.options.iter() {
            let y = option_y + i as f32 * 40.0;
            if i == self.options.selected() {
                rect_or_log(surface, b.x + 10.0, y - 5.0, b.width - 20.0, 30.0, HIGHLIGHT);
                text_or_echo(surface, &format!("> {} <", item.label), b.x + 15.0, y, SELECTED_TEXT);
            } else {
                text_or_echo(surface, item.label, b.x + 25.0, y, NORMAL_TEXT);
            }
        }

        let hint_y = b.y + b.height - 50.0;
        text_or_echo(surface, "W/S - Navigate", b.x + 20.0, hint_y, HINT_TEXT);
        text_or_echo(surface, "ENTER - Select", b.x + 20.0, hint_y + 15.0, HINT_TEXT);
        text_or_echo(surface, "ESC - Resume", b.x + 20.0, hint_y + 30.0, HINT_TEXT);
    }

    pub fn handle_input(&mut self, key: Key, action: KeyAction) -> Option<UiCommand> {
        if !self.visible || !action.is_down() {
            return None;
        }
        match key {
            Key::W => {
                self.options.move_up();
                log::debug!("Pause menu selection: {}", self.options.selected_label());
                None
            }
            Key::S => {
                self.options.move_down();
                log::debug!("Pause menu selection: {}", self.options.selected_label());
                None
            }
            k if k.is_confirm() => self.execute(self.options.activate()),
            Key::Escape => self.execute(PauseAction::Resume),
            _ => None,
        }
    }

    /// The menu stays open; it closes once the game actually leaves Paused.
    fn execute(&self, action: PauseAction) -> Option<UiCommand> {
        match action {
            PauseAction::Resume => {
                log::info!("Resuming game...");
                Some(UiCommand::SetPhase(GamePhase::Playing))
            }
            PauseAction::Settings => {
                log::info!("Opening settings from pause menu...");
                Some(UiCommand::OpenSettings)
            }
            PauseAction::MainMenu => {
                log::info!("Returning to main menu...");
                Some(UiCommand::SetPhase(GamePhase::Menu))
            }
            PauseAction::Quit => {
                log::info!("Quitting game from pause menu...");
                Some(UiCommand::Quit)
            }
        }
    }
}

impl Panel for PauseMenu {
    fn name(&self) -> &'static str {
        "Pause menu"
    }

    fn initialize(&mut self, width: u32, height: u32) -> bool {
        self.on_resize(width, height);
        log::info!("Pause menu initialized at ({}, {})", self.layout.x, self.layout.y);
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
        self.fade_alpha = 0.0;
        self.options.reset();
        log::info!("Pause menu cleaned up");
    }
}

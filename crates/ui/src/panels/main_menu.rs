//! Title screen menu.

use engine_core::GamePhase;
use input::{Key, KeyAction};
use renderer::{rect_or_log, text_or_echo, DrawSurface};

use crate::menu::{MenuItem, MenuOptionList};
use crate::panel::{CenteredBox, Panel, UiCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuAction {
    Start,
    Settings,
    Quit,
}

pub struct MainMenu {
    options: MenuOptionList<MainMenuAction>,
    initialized: bool,
    layout: CenteredBox,
    window: (u32, u32),
    /// Seconds since the menu was initialised; drives the highlight pulse.
    clock: f32,
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl MainMenu {
    pub fn new() -> Self {
        Self {
            options: MenuOptionList::from_items([
                MenuItem::new("Start Game", MainMenuAction::Start),
                MenuItem::new("Settings", MainMenuAction::Settings),
                MenuItem::new("Quit Game", MainMenuAction::Quit),
            ]),
            initialized: false,
            layout: CenteredBox::new(300.0, 260.0),
            window: (1024, 768),
            clock: 0.0,
        }
    }

    pub fn selected(&self) -> usize {
        self.options.selected()
    }

    pub fn layout(&self) -> CenteredBox {
        self.layout
    }

    pub fn update(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }
        self.clock = (self.clock + dt) % 2.0;
    }

    /// Highlight alpha pulsing between 0.5 and 0.9 over two seconds.
    fn highlight_alpha(&self) -> f32 {
        let t = if self.clock < 1.0 { self.clock } else { 2.0 - self.clock };
        0.5 + 0.4 * t
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        if !self.initialized {
            return;
        }
        let b = self.layout;
        rect_or_log(surface, 0.0, 0.0, self.window.0 as f32, self.window.1 as f32, [0.02, 0.02, 0.05, 1.0]);
        rect_or_log(surface, b.x - 20.0, b.y - 20.0, b.width + 40.0, b.height + 40.0, [0.1, 0.1, 0.2, 0.9]);
        text_or_echo(surface, "SIMPLE SHOOTER", b.x + b.width / 2.0 - 70.0, b.y + 20.0, [1.0, 1.0, 0.2]);

        for (i, item) in self.options.iter() {
            let y = b.y + 80.0 + i as f32 * 40.0;
            if i == self.options.selected() {
                rect_or_log(surface, b.x + 10.0, y - 5.0, b.width - 20.0, 30.0, [0.3, 0.3, 0.5, self.highlight_alpha()]);
                text_or_echo(surface, &format!("> {} <", item.label), b.x + 15.0, y, [1.0, 1.0, 0.2]);
            } else {
                text_or_echo(surface, item.label, b.x + 25.0, y, [0.8, 0.8, 0.8]);
            }
        }
        text_or_echo(surface, "W/S - Navigate  |  ENTER - Select", b.x + 10.0, b.y + b.height - 30.0, [0.6, 0.6, 0.6]);
    }

    pub fn handle_input(&mut self, key: Key, action: KeyAction) -> Option<UiCommand> {
        if !self.initialized || !action.is_down() {
            return None;
        }
        match key {
            Key::W => {
                self.options.move_up();
                log::debug!("Main menu selection: {}", self.options.selected_label());
                None
            }
            Key::S => {
                self.options.move_down();
                log::debug!("Main menu selection: {}", self.options.selected_label());
                None
            }
            k if k.is_confirm() => Some(match self.options.activate() {
                MainMenuAction::Start => {
                    log::info!("Starting game...");
                    UiCommand::SetPhase(GamePhase::Playing)
                }
                MainMenuAction::Settings => UiCommand::OpenSettings,
                MainMenuAction::Quit => {
                    log::info!("Quitting game from main menu...");
                    UiCommand::Quit
                }
            }),
            _ => None,
        }
    }
}

impl Panel for MainMenu {
    fn name(&self) -> &'static str {
        "Main menu"
    }

    fn initialize(&mut self, width: u32, height: u32) -> bool {
        self.on_resize(width, height);
        self.initialized = true;
        log::info!("Main menu initialized at ({}, {})", self.layout.x, self.layout.y);
        true
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.window = (width, height);
        self.layout.center_in(width, height);
    }

    fn is_visible(&self) -> bool {
        self.initialized
    }

    fn cleanup(&mut self) {
        self.initialized = false;
        log::info!("Main menu cleaned up");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use renderer::RecordingSurface;

    #[test]
    fn inactive_until_initialized() {
        let mut m = MainMenu::new();
        assert!(!m.is_visible());
        assert_eq!(m.handle_input(Key::Enter, KeyAction::Press), None);
        let mut s = RecordingSurface::new();
        m.render(&mut s);
        assert!(s.commands.is_empty());
    }

    #[test]
    fn start_requests_playing_phase() {
        let mut m = MainMenu::new();
        m.initialize(1024, 768);
        assert_eq!(
            m.handle_input(Key::Enter, KeyAction::Press),
            Some(UiCommand::SetPhase(GamePhase::Playing))
        );
    }

    #[test]
    fn cursor_wraps_to_quit() {
        let mut m = MainMenu::new();
        m.initialize(1024, 768);
        m.handle_input(Key::W, KeyAction::Press);
        assert_eq!(m.selected(), 2);
        assert_eq!(m.handle_input(Key::Space, KeyAction::Press), Some(UiCommand::Quit));
        m.handle_input(Key::S, KeyAction::Press);
        m.handle_input(Key::S, KeyAction::Press);
        assert_eq!(m.handle_input(Key::Enter, KeyAction::Press), Some(UiCommand::OpenSettings));
    }

    #[test]
    fn highlight_pulse_stays_in_range() {
        let mut m = MainMenu::new();
        m.initialize(800, 600);
        for _ in 0..50 {
            m.update(0.13);
            let a = m.highlight_alpha();
            assert!(a >= 0.5 && a <= 0.9 + 1e-6);
        }
    }

    #[test]
    fn cleanup_deactivates() {
        let mut m = MainMenu::new();
        m.initialize(800, 600);
        m.cleanup();
        assert!(!m.is_visible());
    }
}

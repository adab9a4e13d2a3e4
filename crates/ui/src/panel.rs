//! Shared panel contract, per-call context and panel-to-manager commands.

use engine_core::{AudioBridge, GameBridge, GamePhase};
use renderer::DrawSurface;

use crate::settings::GameSettings;

/// Collaborators handed to the UI for the duration of one call.
pub struct UiContext<'a> {
    pub game: &'a mut dyn GameBridge,
    pub audio: &'a mut dyn AudioBridge,
    pub surface: &'a mut dyn DrawSurface,
}

impl<'a> UiContext<'a> {
    pub fn new(
        game: &'a mut dyn GameBridge,
        audio: &'a mut dyn AudioBridge,
        surface: &'a mut dyn DrawSurface,
    ) -> Self {
        Self { game, audio, surface }
    }
}

/// Requests a panel hands back to the manager instead of acting on another
/// panel or the game core itself.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    SetPhase(GamePhase),
    OpenSettings,
    ApplySettings(GameSettings),
    Quit,
}

/// Lifecycle every panel shares.
///
/// While a panel is not visible, its update, render and input handlers do nothing.
pub trait Panel {
    fn name(&self) -> &'static str;

    /// Compute layout from the window size. Always succeeds.
    fn initialize(&mut self, width: u32, height: u32) -> bool;

    /// Recompute layout. Calling it twice with the same size is a no-op the second time.
    fn on_resize(&mut self, width: u32, height: u32);

    fn is_visible(&self) -> bool;

    fn cleanup(&mut self) {
        log::info!("{} cleaned up", self.name());
    }
}

/// A box of fixed size centred in the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenteredBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CenteredBox {
    pub fn new(width: f32, height: f32) -> Self {
        Self { x: 0.0, y: 0.0, width, height }
    }

    pub fn center_in(&mut self, window_w: u32, window_h: u32) {
        self.x = (window_w as f32 - self.width) / 2.0;
        self.y = (window_h as f32 - self.height) / 2.0;
    }
}

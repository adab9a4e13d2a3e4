//! Owns every panel and routes frames and key events by game phase.

use engine_core::{log_failure, or_fallback, AudioBridge, GameBridge, GamePhase, GameSnapshot};
use input::{Key, KeyAction, KeyEvent};

use crate::config::UiConfig;
use crate::panel::{Panel, UiCommand, UiContext};
use crate::panels::{AudioSettings, GameHud, MainMenu, PauseMenu, SettingsMenu, Speedometer};
use crate::settings::GameSettings;

/// A routing target. `GameOver` is the HUD's game-over overlay rather than its normal frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelId {
    MainMenu,
    PauseMenu,
    SettingsMenu,
    AudioSettings,
    Hud,
    GameOver,
    Speedometer,
}

/// Which panels get a phase's frame (update and render, in order) and which one gets its keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseRoute {
    pub frame: &'static [PanelId],
    pub input: Option<PanelId>,
}

impl PhaseRoute {
    pub fn for_phase(phase: GamePhase, settings_visible: bool) -> Self {
        use PanelId as P;
        match phase {
            GamePhase::Menu if settings_visible => Self {
                frame: &[P::MainMenu, P::SettingsMenu],
                input: Some(P::SettingsMenu),
            },
            GamePhase::Menu => Self { frame: &[P::MainMenu], input: Some(P::MainMenu) },
            GamePhase::Playing => Self { frame: &[P::Speedometer, P::Hud, P::AudioSettings], input: None },
            GamePhase::Paused if settings_visible => Self {
                frame: &[P::Hud, P::PauseMenu, P::SettingsMenu],
                input: Some(P::SettingsMenu),
            },
            GamePhase::Paused => Self { frame: &[P::Hud, P::PauseMenu], input: Some(P::PauseMenu) },
            GamePhase::GameOver => Self { frame: &[P::GameOver], input: None },
        }
    }
}

pub struct UiManager {
    config: UiConfig,
    initialized: bool,
    window: (u32, u32),
    main_menu: MainMenu,
    pause_menu: PauseMenu,
    settings_menu: SettingsMenu,
    audio_settings: AudioSettings,
    hud: GameHud,
    speedometer: Speedometer,
    /// Phase seen on the previous call; `None` before the first fetch or for unknown raw values.
    last_phase: Option<GamePhase>,
    applied_settings: Option<GameSettings>,
}

impl UiManager {
    pub fn new(config: UiConfig, audio: &dyn AudioBridge) -> Self {
        Self {
            initialized: false,
            window: (config.window_width, config.window_height),
            main_menu: MainMenu::new(),
            pause_menu: PauseMenu::new(config.pause_fade_speed, config.pause_target_alpha),
            settings_menu: SettingsMenu::new(config.settings.clone(), config.sensitivity_step),
            audio_settings: AudioSettings::new(audio, config.default_volumes, config.volume_step),
            hud: GameHud::new(),
            speedometer: Speedometer::new(config.speed_thresholds),
            last_phase: None,
            applied_settings: None,
            config,
        }
    }

    fn panels_mut(&mut self) -> [&mut dyn Panel; 6] {
        [
            &mut self.main_menu,
            &mut self.pause_menu,
            &mut self.settings_menu,
            &mut self.audio_settings,
            &mut self.hud,
            &mut self.speedometer,
        ]
    }

    /// Size every panel to the game core's window, floored to the configured minimum.
    pub fn initialize(&mut self, ctx: &mut UiContext) -> bool {
        if self.initialized {
            return true;
        }
        log::info!("Initializing UI manager...");
        let fallback = (self.config.window_width, self.config.window_height);
        let (w, h) = or_fallback(ctx.game.window_size(), fallback, "Error reading window size");
        self.window = self.config.clamp_window(w, h);

        let (w, h) = self.window;
        for panel in self.panels_mut() {
            if !panel.initialize(w, h) {
                log::error!("Failed to initialize {}", panel.name());
                return false;
            }
        }
        self.initialized = true;
        log::info!("UI manager initialized at {w}x{h}");
        true
    }

    fn fetch_state(game: &dyn GameBridge) -> GameSnapshot {
        or_fallback(game.game_state(), GameSnapshot::empty(), "Error getting game state")
    }

    /// Track phase transitions: entering Paused opens the pause menu, leaving it closes it.
    fn observe_phase(&mut self, phase: Option<GamePhase>) {
        if phase == self.last_phase {
            return;
        }
        let was_paused = self.last_phase == Some(GamePhase::Paused);
        let now_paused = phase == Some(GamePhase::Paused);
        if now_paused && !self.pause_menu.is_visible() {
            self.pause_menu.show();
        } else if was_paused && !now_paused && self.pause_menu.is_visible() {
            self.pause_menu.hide();
        }
        log::debug!("Game phase {:?} -> {:?}", self.last_phase, phase);
        self.last_phase = phase;
    }

    /// Fetch the snapshot once and resolve this call's route. Unknown phases route nowhere.
    fn route(&mut self, game: &dyn GameBridge) -> Option<(GameSnapshot, PhaseRoute)> {
        let snapshot = Self::fetch_state(game);
        let phase = snapshot.phase();
        self.observe_phase(phase);
        match phase {
            Some(phase) => Some((snapshot, PhaseRoute::for_phase(phase, self.settings_menu.is_visible()))),
            None => {
                log::debug!("Unknown game phase {}; nothing routed", snapshot.raw_phase);
                None
            }
        }
    }

    pub fn update(&mut self, ctx: &mut UiContext, dt: f32) {
        if !self.initialized {
            return;
        }
        let Some((snapshot, route)) = self.route(&*ctx.game) else {
            return;
        };
        let player = &snapshot.player;
        for id in route.frame {
            match id {
                PanelId::MainMenu => self.main_menu.update(dt),
                PanelId::PauseMenu => self.pause_menu.update(dt),
                PanelId::SettingsMenu => self.settings_menu.update(dt),
                PanelId::AudioSettings => self.audio_settings.update(dt),
                PanelId::Hud => self.hud.update(player, snapshot.score, dt),
                PanelId::Speedometer => self.speedometer.update(player.speed, player.on_ground),
                PanelId::GameOver => {}
            }
        }
    }

    pub fn render(&mut self, ctx: &mut UiContext) {
        if !self.initialized {
            return;
        }
        let Some((snapshot, route)) = self.route(&*ctx.game) else {
            return;
        };
        let surface = &mut *ctx.surface;
        for id in route.frame {
            match id {
                PanelId::MainMenu => self.main_menu.render(surface),
                PanelId::PauseMenu => self.pause_menu.render(surface),
                PanelId::SettingsMenu => self.settings_menu.render(surface),
                PanelId::AudioSettings => self.audio_settings.render(surface),
                PanelId::Hud => self.hud.render(surface),
                PanelId::Speedometer => self.speedometer.render(surface),
                PanelId::GameOver => self.hud.show_game_over(surface, snapshot.score),
            }
        }
    }

    /// Raw entry point: decode the key code and action, then route.
    pub fn handle_input(&mut self, ctx: &mut UiContext, key: i32, action: i32) {
        if let Some(event) = KeyEvent::from_raw(key, action) {
            self.handle_key(ctx, event.key, event.action);
        }
    }

    pub fn handle_key(&mut self, ctx: &mut UiContext, key: Key, action: KeyAction) {
        if !self.initialized {
            return;
        }
        let Some((_, route)) = self.route(&*ctx.game) else {
            return;
        };
        let command = match route.input {
            Some(PanelId::MainMenu) => self.main_menu.handle_input(key, action),
            Some(PanelId::PauseMenu) => self.pause_menu.handle_input(key, action),
            Some(PanelId::SettingsMenu) => self.settings_menu.handle_input(key, action),
            _ => None,
        };
        if let Some(command) = command {
            self.execute(ctx, command);
        }
    }

    fn execute(&mut self, ctx: &mut UiContext, command: UiCommand) {
        match command {
            UiCommand::SetPhase(phase) => {
                if log_failure(ctx.game.set_phase(phase), "Error setting game phase") {
                    self.observe_phase(Some(phase));
                }
            }
            UiCommand::OpenSettings => self.settings_menu.show(&*ctx.game),
            UiCommand::ApplySettings(settings) => {
                let applied = log_failure(
                    ctx.game.set_mouse_sensitivity(settings.mouse_sensitivity),
                    "Error applying settings",
                );
                if applied {
                    log::info!("Settings applied: sensitivity {:.1}", settings.mouse_sensitivity);
                }
                self.config.settings = settings.clone();
                self.applied_settings = Some(settings);
            }
            UiCommand::Quit => {
                log_failure(ctx.game.quit(), "Error quitting game");
            }
        }
    }

    /// Open or close the in-game audio panel.
    pub fn toggle_audio_settings(&mut self, ctx: &mut UiContext) {
        if !self.initialized {
            return;
        }
        self.audio_settings.toggle(&*ctx.audio);
    }

    /// Re-layout every panel. Zero sizes are ignored.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if !self.initialized || width == 0 || height == 0 {
            return;
        }
        self.window = self.config.clamp_window(width, height);
        let (w, h) = self.window;
        for panel in self.panels_mut() {
            panel.on_resize(w, h);
        }
        log::info!("UI resized to {w}x{h}");
    }

    pub fn cleanup(&mut self) {
        if !self.initialized {
            return;
        }
        for panel in self.panels_mut() {
            panel.cleanup();
        }
        self.initialized = false;
        self.last_phase = None;
        log::info!("UI manager cleaned up");
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn window_size(&self) -> (u32, u32) {
        self.window
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// The most recent settings applied from the settings menu.
    pub fn applied_settings(&self) -> Option<&GameSettings> {
        self.applied_settings.as_ref()
    }

    pub fn main_menu(&self) -> &MainMenu {
        &self.main_menu
    }

    pub fn pause_menu(&self) -> &PauseMenu {
        &self.pause_menu
    }

    pub fn settings_menu(&self) -> &SettingsMenu {
        &self.settings_menu
    }

    pub fn audio_settings(&self) -> &AudioSettings {
        &self.audio_settings
    }

    pub fn audio_settings_mut(&mut self) -> &mut AudioSettings {
        &mut self.audio_settings
    }

    pub fn hud(&self) -> &GameHud {
        &self.hud
    }

    pub fn speedometer(&self) -> &Speedometer {
        &self.speedometer
    }

    pub fn speedometer_mut(&mut self) -> &mut Speedometer {
        &mut self.speedometer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::SettingsCategory;
    use audio::NullAudio;
    use engine_core::{BridgeError, BridgeResult, SimulatedGame};
    use input::{RAW_ENTER, RAW_ESCAPE};
    use renderer::RecordingSurface;

    struct Harness {
        game: SimulatedGame,
        audio: NullAudio,
        surface: RecordingSurface,
        ui: UiManager,
    }

    impl Harness {
        fn new() -> Self {
            let audio = NullAudio::default();
            let ui = UiManager::new(UiConfig::default(), &audio);
            Self { game: SimulatedGame::new(), audio, surface: RecordingSurface::new(), ui }
        }

        fn initialized() -> Self {
            let mut h = Self::new();
            assert!(h.initialize());
            h
        }

        fn initialize(&mut self) -> bool {
            let mut ctx = UiContext::new(&mut self.game, &mut self.audio, &mut self.surface);
            self.ui.initialize(&mut ctx)
        }

        fn update(&mut self, dt: f32) {
            let mut ctx = UiContext::new(&mut self.game, &mut self.audio, &mut self.surface);
            self.ui.update(&mut ctx, dt);
        }

        fn render(&mut self) {
            self.surface.clear();
            let mut ctx = UiContext::new(&mut self.game, &mut self.audio, &mut self.surface);
            self.ui.render(&mut ctx);
        }

        fn press(&mut self, key: Key) {
            let mut ctx = UiContext::new(&mut self.game, &mut self.audio, &mut self.surface);
            self.ui.handle_key(&mut ctx, key, KeyAction::Press);
        }

        fn raw(&mut self, key: i32, action: i32) {
            let mut ctx = UiContext::new(&mut self.game, &mut self.audio, &mut self.surface);
            self.ui.handle_input(&mut ctx, key, action);
        }
    }

    #[test]
    fn routing_table() {
        use PanelId as P;
        let r = PhaseRoute::for_phase(GamePhase::Menu, false);
        assert_eq!((r.frame, r.input), (&[P::MainMenu][..], Some(P::MainMenu)));
        let r = PhaseRoute::for_phase(GamePhase::Menu, true);
        assert_eq!((r.frame, r.input), (&[P::MainMenu, P::SettingsMenu][..], Some(P::SettingsMenu)));
        let r = PhaseRoute::for_phase(GamePhase::Playing, true);
        assert_eq!((r.frame, r.input), (&[P::Speedometer, P::Hud, P::AudioSettings][..], None));
        let r = PhaseRoute::for_phase(GamePhase::Paused, false);
        assert_eq!((r.frame, r.input), (&[P::Hud, P::PauseMenu][..], Some(P::PauseMenu)));
        let r = PhaseRoute::for_phase(GamePhase::Paused, true);
        assert_eq!((r.frame, r.input), (&[P::Hud, P::PauseMenu, P::SettingsMenu][..], Some(P::SettingsMenu)));
        let r = PhaseRoute::for_phase(GamePhase::GameOver, true);
        assert_eq!((r.frame, r.input), (&[P::GameOver][..], None));
    }

    #[test]
    fn every_call_is_a_no_op_before_initialize() {
        let mut h = Harness::new();
        h.update(0.016);
        h.render();
        h.press(Key::Enter);
        h.ui.on_resize(1280, 720);
        assert!(h.surface.commands.is_empty());
        assert_eq!(h.game.state_reads(), 0);
        assert!(h.game.phase_requests().is_empty());
        assert_eq!(h.ui.window_size(), (1024, 768));
    }

    #[test]
    fn initialize_floors_window_to_minimum() {
        let mut h = Harness::new();
        h.game.window = (640, 480);
        assert!(h.initialize());
        assert_eq!(h.ui.window_size(), (800, 600));
        assert_eq!(h.ui.speedometer().position(), (580.0, 20.0));
    }

    #[test]
    fn initialize_falls_back_to_configured_window() {
        let mut h = Harness::new();
        h.game.window = (1920, 1080);
        h.game.fail_calls = true;
        assert!(h.initialize());
        assert_eq!(h.ui.window_size(), (1024, 768));
    }

    #[test]
    fn snapshot_is_fetched_once_per_call() {
        let mut h = Harness::initialized();
        h.game.set_phase_directly(GamePhase::Playing);
        h.update(0.016);
        assert_eq!(h.game.state_reads(), 1);
        h.render();
        assert_eq!(h.game.state_reads(), 2);
    }

    #[test]
    fn main_menu_start_requests_playing() {
        let mut h = Harness::initialized();
        h.render();
        assert!(h.surface.has_text("> Start Game <"));
        h.raw(RAW_ENTER, 1);
        assert_eq!(h.game.phase_requests(), &[GamePhase::Playing]);
    }

    #[test]
    fn release_and_unmapped_keys_do_nothing() {
        let mut h = Harness::initialized();
        h.raw(RAW_ENTER, 0);
        h.raw(999, 1);
        assert!(h.game.phase_requests().is_empty());
    }

    #[test]
    fn main_menu_quit() {
        let mut h = Harness::initialized();
        h.press(Key::W);
        h.press(Key::Enter);
        assert!(h.game.quit_requested);
    }

    #[test]
    fn settings_take_input_over_main_menu() {
        let mut h = Harness::initialized();
        h.press(Key::S);
        h.press(Key::Enter);
        assert!(h.ui.settings_menu().is_visible());

        h.press(Key::D);
        assert_eq!(h.ui.settings_menu().category(), SettingsCategory::Audio);
        assert_eq!(h.ui.main_menu().selected(), 1);

        h.render();
        assert!(h.surface.has_text("SETTINGS"));
        assert!(h.surface.has_text("> Settings <"));

        h.raw(RAW_ESCAPE, 1);
        assert!(!h.ui.settings_menu().is_visible());
    }

    #[test]
    fn entering_paused_shows_pause_menu_and_escape_resumes() {
        let mut h = Harness::initialized();
        h.game.set_phase_directly(GamePhase::Playing);
        h.update(0.016);
        assert!(!h.ui.pause_menu().is_visible());

        h.game.set_phase_directly(GamePhase::Paused);
        h.update(0.1);
        assert!(h.ui.pause_menu().is_visible());
        assert!(h.ui.pause_menu().fade_alpha() > 0.0);

        h.press(Key::Escape);
        assert_eq!(h.game.phase_requests(), &[GamePhase::Playing]);
        assert!(!h.ui.pause_menu().is_visible());
    }

    /// Game core that accepts every call except phase changes.
    struct PhaseLocked(SimulatedGame);

    impl GameBridge for PhaseLocked {
        fn game_state(&self) -> BridgeResult<GameSnapshot> {
            self.0.game_state()
        }

        fn set_phase(&mut self, _phase: GamePhase) -> BridgeResult<()> {
            Err(BridgeError::call_failed("set_game_phase", "phase is locked"))
        }

        fn quit(&mut self) -> BridgeResult<()> {
            self.0.quit()
        }

        fn mouse_sensitivity(&self) -> BridgeResult<f32> {
            self.0.mouse_sensitivity()
        }

        fn set_mouse_sensitivity(&mut self, sensitivity: f32) -> BridgeResult<()> {
            self.0.set_mouse_sensitivity(sensitivity)
        }

        fn window_size(&self) -> BridgeResult<(u32, u32)> {
            self.0.window_size()
        }
    }

    #[test]
    fn rejected_resume_keeps_pause_menu_open() {
        let mut game = PhaseLocked(SimulatedGame::new());
        game.0.set_phase_directly(GamePhase::Paused);
        let mut audio = NullAudio::default();
        let mut surface = RecordingSurface::new();
        let mut ui = UiManager::new(UiConfig::default(), &audio);
        let mut ctx = UiContext::new(&mut game, &mut audio, &mut surface);
        assert!(ui.initialize(&mut ctx));
        ui.update(&mut ctx, 0.016);
        assert!(ui.pause_menu().is_visible());

        ui.handle_key(&mut ctx, Key::Escape, KeyAction::Press);
        assert!(ui.pause_menu().is_visible());

        ui.handle_key(&mut ctx, Key::S, KeyAction::Press);
        assert_eq!(ui.pause_menu().selected(), 1);

        ui.handle_key(&mut ctx, Key::W, KeyAction::Press);
        ui.handle_key(&mut ctx, Key::Enter, KeyAction::Press);
        assert!(ui.pause_menu().is_visible());

        ui.render(&mut ctx);
        assert!(surface.has_text("PAUSED"));
        assert!(game.0.phase_requests().is_empty());
    }

    #[test]
    fn leaving_paused_externally_hides_pause_menu() {
        let mut h = Harness::initialized();
        h.game.set_phase_directly(GamePhase::Paused);
        h.update(0.016);
        h.game.set_phase_directly(GamePhase::Playing);
        h.update(0.016);
        assert!(!h.ui.pause_menu().is_visible());
    }

    #[test]
    fn paused_settings_capture_input_until_closed() {
        let mut h = Harness::initialized();
        h.game.set_phase_directly(GamePhase::Paused);
        h.update(0.016);

        h.press(Key::S);
        h.press(Key::Enter);
        assert!(h.ui.settings_menu().is_visible());

        h.press(Key::S);
        assert_eq!(h.ui.settings_menu().selected_option(), 1);
        assert_eq!(h.ui.pause_menu().selected(), 1);

        h.press(Key::Escape);
        assert!(!h.ui.settings_menu().is_visible());
        assert!(h.ui.pause_menu().is_visible());
        assert!(h.game.phase_requests().is_empty());

        h.press(Key::Escape);
        assert_eq!(h.game.phase_requests(), &[GamePhase::Playing]);
    }

    #[test]
    fn apply_pushes_sensitivity_to_game() {
        let mut h = Harness::initialized();
        h.game.set_phase_directly(GamePhase::Paused);
        h.update(0.016);
        h.press(Key::S);
        h.press(Key::Enter);

        h.press(Key::A);
        h.press(Key::A);
        assert_eq!(h.ui.settings_menu().category(), SettingsCategory::Controls);
        h.press(Key::Right);
        h.press(Key::Enter);

        assert!((h.game.sensitivity - 2.1).abs() < 1e-5);
        let applied = h.ui.applied_settings().map(|s| s.mouse_sensitivity);
        assert!(applied.is_some_and(|s| (s - 2.1).abs() < 1e-5));
        assert_eq!(h.ui.config().settings.mouse_sensitivity, h.game.sensitivity);
    }

    #[test]
    fn playing_frame_draws_hud_and_speedometer() {
        let mut h = Harness::initialized();
        h.game.set_phase_directly(GamePhase::Playing);
        h.game.snapshot.score = 350;
        h.game.snapshot.player.speed = 18.0;
        h.game.snapshot.player.health = 80;
        h.game.snapshot.player.max_health = 100;
        h.update(0.016);
        h.render();
        assert!(h.surface.has_text("Speed: 18.0 u/s"));
        assert!(h.surface.has_text("Score: 350"));
        assert!(h.surface.has_text("Health: 80/100"));
        assert!(!h.surface.has_text("Audio Settings"));

        h.press(Key::Escape);
        assert!(h.game.phase_requests().is_empty());
    }

    #[test]
    fn audio_toggle_shows_panel_in_play() {
        let mut h = Harness::initialized();
        h.game.set_phase_directly(GamePhase::Playing);
        {
            let mut ctx = UiContext::new(&mut h.game, &mut h.audio, &mut h.surface);
            h.ui.toggle_audio_settings(&mut ctx);
        }
        h.render();
        assert!(h.surface.has_text("Audio Settings"));
    }

    #[test]
    fn game_over_draws_overlay_only() {
        let mut h = Harness::initialized();
        h.game.set_phase_directly(GamePhase::GameOver);
        h.game.snapshot.score = 77;
        h.update(0.016);
        h.render();
        assert!(h.surface.has_text("GAME OVER"));
        assert!(h.surface.has_text("Final Score: 77"));
        assert!(!h.surface.has_text("Health:"));
    }

    #[test]
    fn unknown_phase_routes_nowhere() {
        let mut h = Harness::initialized();
        h.game.snapshot.raw_phase = 42;
        h.update(0.016);
        h.render();
        h.press(Key::Enter);
        assert!(h.surface.commands.is_empty());
        assert!(h.game.phase_requests().is_empty());
    }

    #[test]
    fn failed_state_fetch_reads_as_menu() {
        let mut h = Harness::initialized();
        h.game.set_phase_directly(GamePhase::Playing);
        h.game.fail_calls = true;
        h.render();
        assert!(h.surface.has_text("Start Game"));
    }

    #[test]
    fn resize_ignores_zero_and_is_idempotent() {
        let mut h = Harness::initialized();
        h.ui.on_resize(0, 600);
        assert_eq!(h.ui.window_size(), (1024, 768));

        h.ui.on_resize(1280, 720);
        let first = (h.ui.pause_menu().layout(), h.ui.hud().layout(), h.ui.speedometer().position());
        h.ui.on_resize(1280, 720);
        let second = (h.ui.pause_menu().layout(), h.ui.hud().layout(), h.ui.speedometer().position());
        assert_eq!(first, second);
        assert_eq!(h.ui.window_size(), (1280, 720));
    }

    #[test]
    fn cleanup_returns_to_no_op_state() {
        let mut h = Harness::initialized();
        h.ui.cleanup();
        assert!(!h.ui.is_initialized());
        let reads = h.game.state_reads();
        h.update(0.016);
        h.render();
        assert_eq!(h.game.state_reads(), reads);
        assert!(h.surface.commands.is_empty());
    }

    #[test]
    fn reinitialize_after_cleanup_starts_with_menus_closed() {
        let mut h = Harness::initialized();
        h.press(Key::S);
        h.press(Key::Enter);
        assert!(h.ui.settings_menu().is_visible());

        h.ui.cleanup();
        assert!(!h.ui.settings_menu().is_visible());
        assert!(h.initialize());

        h.press(Key::W);
        h.press(Key::Enter);
        assert_eq!(h.game.phase_requests(), &[GamePhase::Playing]);
        assert!(!h.ui.settings_menu().is_visible());
    }

    #[test]
    fn reinitialize_after_cleanup_closes_pause_and_audio_panels() {
        let mut h = Harness::initialized();
        h.game.set_phase_directly(GamePhase::Paused);
        h.update(0.016);
        {
            let mut ctx = UiContext::new(&mut h.game, &mut h.audio, &mut h.surface);
            h.ui.toggle_audio_settings(&mut ctx);
        }
        assert!(h.ui.pause_menu().is_visible());
        assert!(h.ui.audio_settings().is_visible());

        h.ui.cleanup();
        h.game.set_phase_directly(GamePhase::Menu);
        assert!(h.initialize());
        assert!(!h.ui.pause_menu().is_visible());
        assert!(!h.ui.audio_settings().is_visible());
    }
}

//! Headless UI demo: drives the UI manager against a simulated game core for a
//! scripted session (menu, play, pause and settings, game over).

use std::time::Duration;

use anyhow::Result;
use audio::{AudioSystem, MixerLevels, NullAudio};
use engine_core::{AudioBridge, GameBridge, GamePhase, SimulatedGame, Time};
use glam::Vec3;
use input::{ElementState, Key, KeyAction, KeyCode};
use renderer::{OverlayTextBuilder, RecordingSurface};
use ui::{UiConfig, UiContext, UiManager};

const FRAME: Duration = Duration::from_millis(16);
const GAME_OVER_FRAME: u64 = 150;
const LAST_FRAME: u64 = 160;

/// Physical key presses, keyed by frame.
const SCRIPT: &[(u64, KeyCode)] = &[
    (5, KeyCode::Enter),
    (30, KeyCode::KeyO),
    (32, KeyCode::Digit1),
    (34, KeyCode::Digit6),
    (40, KeyCode::KeyO),
    (70, KeyCode::Escape),
    (80, KeyCode::KeyS),
    (82, KeyCode::Enter),
    (84, KeyCode::KeyA),
    (86, KeyCode::KeyA),
    (88, KeyCode::ArrowRight),
    (90, KeyCode::Enter),
    (92, KeyCode::Escape),
    (100, KeyCode::Escape),
];

fn open_audio(levels: MixerLevels) -> Box<dyn AudioBridge> {
    match AudioSystem::new(levels) {
        Ok(system) => Box::new(system),
        Err(e) => {
            log::warn!("Audio device unavailable ({e}); volumes will not be audible");
            Box::new(NullAudio::new(levels))
        }
    }
}

/// Advance the simulated player: circle-strafe with a jump every half second.
fn simulate(game: &mut SimulatedGame, time: &Time) {
    let t = time.elapsed_seconds();
    let player = &mut game.snapshot.player;
    let velocity = Vec3::new(t.cos(), 0.0, t.sin()) * (8.0 + t * 4.0);
    player.velocity = velocity;
    player.position += velocity * time.delta_seconds();
    player.speed = Vec3::new(velocity.x, 0.0, velocity.z).length();
    player.on_ground = time.frame_count() % 30 < 20;
    if time.frame_count() % 10 == 0 {
        player.ammo = (player.ammo - 1).max(0);
        game.snapshot.score += 25;
    }
}

/// Keys the host handles itself while playing; everything else goes to the UI.
fn dispatch(ui: &mut UiManager, ctx: &mut UiContext, code: KeyCode, state: ElementState) {
    let Some(key) = Key::from_winit(code) else {
        log::debug!("Ignoring unmapped key {code:?}");
        return;
    };
    let action = KeyAction::from(state);
    let playing = ctx.game.game_state().ok().and_then(|s| s.phase()) == Some(GamePhase::Playing);
    match key {
        Key::Escape if playing && action.is_down() => {
            if let Err(e) = ctx.game.set_phase(GamePhase::Paused) {
                log::warn!("Could not pause: {e}");
            }
        }
        Key::O if playing && action.is_down() => ui.toggle_audio_settings(ctx),
        Key::Digit(_) if playing => ui.audio_settings_mut().handle_input(ctx.audio, key, action),
        _ => ui.handle_key(ctx, key, action),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let save = std::env::args().any(|a| a == "--save");

    let mut config = UiConfig::load();
    let levels = MixerLevels::new(
        config.default_volumes.master,
        config.default_volumes.sfx,
        config.default_volumes.music,
    );
    let mut audio = open_audio(levels);
    let mut game = SimulatedGame::new();
    game.snapshot.running = true;
    game.snapshot.player.max_health = 100;
    game.snapshot.player.health = 100;
    game.snapshot.player.max_ammo = 30;
    game.snapshot.player.ammo = 30;

    let (w, h) = config.clamp_window(game.window.0, game.window.1);
    let mut overlay = OverlayTextBuilder::new(w as f32, h as f32);
    let mut ui = UiManager::new(config.clone(), &*audio);

    {
        let mut ctx = UiContext::new(&mut game, &mut *audio, &mut overlay);
        if !ui.initialize(&mut ctx) {
            anyhow::bail!("UI failed to initialize");
        }
    }

    let mut time = Time::new();
    for frame in 0..=LAST_FRAME {
        time.advance(FRAME);
        if game.snapshot.phase() == Some(GamePhase::Playing) {
            simulate(&mut game, &time);
        }
        if frame == GAME_OVER_FRAME {
            game.snapshot.player.health = 0;
            game.set_phase_directly(GamePhase::GameOver);
        }

        overlay.reset(w as f32, h as f32);
        let mut ctx = UiContext::new(&mut game, &mut *audio, &mut overlay);
        for &(_, code) in SCRIPT.iter().filter(|(f, _)| *f == frame) {
            dispatch(&mut ui, &mut ctx, code, ElementState::Pressed);
        }
        ui.update(&mut ctx, time.delta_seconds());
        ui.render(&mut ctx);
        log::debug!("frame {frame}: {} overlay quads", overlay.quad_count());
    }

    // One final frame into a recording surface so the session's end state is visible in the log.
    let mut recording = RecordingSurface::new();
    {
        let mut ctx = UiContext::new(&mut game, &mut *audio, &mut recording);
        ui.render(&mut ctx);
    }
    for text in recording.texts() {
        log::info!("[UI] {text}");
    }
    log::info!(
        "Session finished after {} frames ({:.1} fps simulated), phase requests: {:?}",
        time.frame_count(),
        time.fps(),
        game.phase_requests()
    );

    ui.cleanup();
    if let Some(settings) = ui.applied_settings() {
        config.settings = settings.clone();
    }
    if save {
        config.save();
    }
    Ok(())
}

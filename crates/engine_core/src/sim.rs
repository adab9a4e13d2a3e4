//! In-memory stand-in for the native game core.
//!
//! Used by headless hosts and tests. Individual calls can be made to fail so
//! the UI's fallback paths can be exercised.

use std::cell::Cell;

use crate::{BridgeError, BridgeResult, GameBridge, GamePhase, GameSnapshot};

/// Simulated game core holding a snapshot that the host mutates directly.
#[derive(Debug)]
pub struct SimulatedGame {
    pub snapshot: GameSnapshot,
    pub sensitivity: f32,
    pub window: (u32, u32),
    pub quit_requested: bool,
    /// When set, every call fails with `CallFailed`.
    pub fail_calls: bool,
    /// Count of `game_state` reads, for hosts that want to verify polling.
    state_reads: Cell<u32>,
    phase_log: Vec<GamePhase>,
}

impl Default for SimulatedGame {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedGame {
    pub fn new() -> Self {
        Self {
            snapshot: GameSnapshot::empty(),
            sensitivity: 2.0,
            window: (1024, 768),
            quit_requested: false,
            fail_calls: false,
            state_reads: Cell::new(0),
            phase_log: Vec::new(),
        }
    }

    pub fn set_phase_directly(&mut self, phase: GamePhase) {
        self.snapshot = self.snapshot.with_phase(phase);
    }

    /// Phases requested through the bridge, oldest first.
    pub fn phase_requests(&self) -> &[GamePhase] {
        &self.phase_log
    }

    pub fn state_reads(&self) -> u32 {
        self.state_reads.get()
    }

    fn check(&self, call: &'static str) -> BridgeResult<()> {
        if self.fail_calls {
            Err(BridgeError::call_failed(call, "simulated failure"))
        } else {
            Ok(())
        }
    }
}

impl GameBridge for SimulatedGame {
    fn game_state(&self) -> BridgeResult<GameSnapshot> {
        self.state_reads.set(self.state_reads.get() + 1);
        if self.fail_calls {
            return Err(BridgeError::StateUnavailable);
        }
        Ok(self.snapshot)
    }

    fn set_phase(&mut self, phase: GamePhase) -> BridgeResult<()> {
        self.check("set_game_phase")?;
        self.phase_log.push(phase);
        self.snapshot = self.snapshot.with_phase(phase);
        Ok(())
    }

    fn quit(&mut self) -> BridgeResult<()> {
        self.check("quit_game")?;
        self.quit_requested = true;
        self.snapshot.running = false;
        Ok(())
    }

    fn mouse_sensitivity(&self) -> BridgeResult<f32> {
        self.check("get_mouse_sensitivity")?;
        Ok(self.sensitivity)
    }

    fn set_mouse_sensitivity(&mut self, sensitivity: f32) -> BridgeResult<()> {
        self.check("set_mouse_sensitivity")?;
        self.sensitivity = sensitivity;
        Ok(())
    }

    fn window_size(&self) -> BridgeResult<(u32, u32)> {
        self.check("get_window_size")?;
        Ok(self.window)
    }
}

//! Per-frame copy of the game state the UI reads from the game core.

use glam::Vec3;

use crate::GamePhase;

/// Player fields exposed to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerSnapshot {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Pitch, yaw, roll.
    pub rotation: Vec3,
    /// Horizontal speed in units per second.
    pub speed: f32,
    pub max_speed: f32,
    pub on_ground: bool,
    pub health: i32,
    pub max_health: i32,
    pub ammo: i32,
    pub max_ammo: i32,
    pub consecutive_jumps: i32,
}

impl PlayerSnapshot {
    /// Health as a fraction of max health. A zero max reads as empty.
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (self.health as f32 / self.max_health as f32).clamp(0.0, 1.0)
    }

    /// True when the magazine is at or below a fifth of capacity.
    pub fn is_low_ammo(&self) -> bool {
        self.ammo as f32 <= self.max_ammo as f32 * 0.2
    }
}

/// Snapshot of the game core, fetched at most once per UI call.
///
/// `phase` stays raw: the game core may report values the UI does not know,
/// and those must route to no panel rather than fail the fetch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameSnapshot {
    pub player: PlayerSnapshot,
    pub score: i32,
    pub enemy_count: i32,
    pub delta_time: f32,
    pub running: bool,
    pub raw_phase: i32,
}

impl GameSnapshot {
    /// The empty snapshot used when the game core cannot be read.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Option<GamePhase> {
        GamePhase::from_raw(self.raw_phase)
    }

    pub fn with_phase(mut self, phase: GamePhase) -> Self {
        self.raw_phase = phase.to_raw();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_reads_as_menu() {
        assert_eq!(GameSnapshot::empty().phase(), Some(GamePhase::Menu));
    }

    #[test]
    fn health_fraction_handles_zero_max() {
        let player = PlayerSnapshot { health: 50, max_health: 0, ..Default::default() };
        assert_eq!(player.health_fraction(), 0.0);

        let player = PlayerSnapshot { health: 25, max_health: 100, ..Default::default() };
        assert!((player.health_fraction() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn low_ammo_includes_exact_fifth() {
        let player = PlayerSnapshot { ammo: 6, max_ammo: 30, ..Default::default() };
        assert!(player.is_low_ammo());
        let player = PlayerSnapshot { ammo: 7, max_ammo: 30, ..Default::default() };
        assert!(!player.is_low_ammo());
    }
}

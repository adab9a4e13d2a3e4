//! Shooter UI layer.
//!
//! Six panels (main menu, pause menu, settings, audio, HUD, speedometer) driven
//! by a [`UiManager`] that routes frames and key events by the game phase it
//! reads from the game core each call. All collaborator access goes through
//! the bridge traits in `engine_core` and the `DrawSurface` in `renderer`.

pub mod band;
pub mod config;
pub mod manager;
pub mod menu;
pub mod pager;
pub mod panel;
pub mod panels;
pub mod settings;

pub use config::{SpeedThresholds, UiConfig, VolumeDefaults};
pub use manager::{PanelId, PhaseRoute, UiManager};
pub use panel::{Panel, UiCommand, UiContext};
pub use settings::GameSettings;

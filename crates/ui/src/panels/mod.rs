//! The six UI panels. Each owns its layout and visibility; none references another.

mod audio_settings;
mod hud;
mod main_menu;
mod pause_menu;
mod settings_menu;
mod speedometer;

pub use audio_settings::AudioSettings;
pub use hud::{GameHud, HudLayout};
pub use main_menu::{MainMenu, MainMenuAction};
pub use pause_menu::{PauseAction, PauseMenu};
pub use settings_menu::SettingsMenu;
pub use speedometer::Speedometer;

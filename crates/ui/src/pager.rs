//! Settings categories and the in-category option cursor.
//!
//! Category switches wrap and reset the option cursor; option moves inside a
//! category clamp at both ends.

use crate::settings::{GameSettings, Stepped};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsCategory {
    Graphics,
    Audio,
    Controls,
    Gameplay,
}

impl SettingsCategory {
    pub const ALL: [SettingsCategory; 4] = [
        SettingsCategory::Graphics,
        SettingsCategory::Audio,
        SettingsCategory::Controls,
        SettingsCategory::Gameplay,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Graphics => "Graphics",
            Self::Audio => "Audio",
            Self::Controls => "Controls",
            Self::Gameplay => "Gameplay",
        }
    }

    /// Number of selectable rows on this category's page.
    pub fn option_count(self) -> usize {
        match self {
            Self::Graphics => 3,
            Self::Audio => 1,
            Self::Controls => 2,
            Self::Gameplay => 3,
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct CategoryPager {
    category: SettingsCategory,
    selected_option: usize,
    /// Sensitivity change per step.
    sensitivity_step: f32,
}

impl Default for CategoryPager {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl CategoryPager {
    pub fn new(sensitivity_step: f32) -> Self {
        Self {
            category: SettingsCategory::Graphics,
            selected_option: 0,
            sensitivity_step,
        }
    }

    pub fn category(&self) -> SettingsCategory {
        self.category
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    /// Back to the first category and option.
    pub fn reset(&mut self) {
        self.category = SettingsCategory::Graphics;
        self.selected_option = 0;
    }

    pub fn next_category(&mut self) {
        self.shift_category(1);
    }

    pub fn prev_category(&mut self) {
        self.shift_category(-1);
    }

    fn shift_category(&mut self, direction: i32) {
        let n = SettingsCategory::ALL.len() as i32;
        let idx = (self.category.index() as i32 + direction).rem_euclid(n);
        self.category = SettingsCategory::ALL[idx as usize];
        self.selected_option = 0;
        log::debug!("Settings category: {}", self.category.label());
    }

    /// Move the option cursor by `direction`, clamping to the page.
    pub fn move_option(&mut self, direction: i32) {
        let max = self.category.option_count() as i32 - 1;
        self.selected_option = (self.selected_option as i32 + direction).clamp(0, max) as usize;
    }

    /// Apply a Left/Right press to the selected row.
    pub fn change_value(&self, direction: i32, settings: &mut GameSettings) {
        match self.category {
            SettingsCategory::Graphics => match self.selected_option {
                0 => {
                    settings.cycle_resolution(direction);
                    log::debug!("Resolution: {}", settings.resolution_label());
                }
                1 => {
                    settings.fullscreen = !settings.fullscreen;
                    log::debug!("Fullscreen: {}", settings.fullscreen);
                }
                2 => {
                    settings.quality = settings.quality.step(direction);
                    log::debug!("Graphics quality: {}", settings.quality.label());
                }
                _ => {}
            },
            // Volumes live in the audio panel.
            SettingsCategory::Audio => {}
            SettingsCategory::Controls => match self.selected_option {
                0 => {
                    settings.adjust_sensitivity(direction as f32 * self.sensitivity_step);
                    log::debug!("Mouse sensitivity: {:.1}", settings.mouse_sensitivity);
                }
                1 => {
                    settings.invert_mouse = !settings.invert_mouse;
                    log::debug!("Invert mouse: {}", settings.invert_mouse);
                }
                _ => {}
            },
            SettingsCategory::Gameplay => match self.selected_option {
                0 => {
                    settings.difficulty = settings.difficulty.step(direction);
                    log::debug!("Difficulty: {}", settings.difficulty.label());
                }
                1 => {
                    settings.show_fps = !settings.show_fps;
                    log::debug!("Show FPS: {}", settings.show_fps);
                }
                2 => {
                    settings.auto_reload = !settings.auto_reload;
                    log::debug!("Auto reload: {}", settings.auto_reload);
                }
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Difficulty, Quality, MAX_SENSITIVITY, MIN_SENSITIVITY};

    #[test]
    fn categories_wrap_and_reset_option() {
        let mut pager = CategoryPager::default();
        pager.move_option(2);
        assert_eq!(pager.selected_option(), 2);

        pager.prev_category();
        assert_eq!(pager.category(), SettingsCategory::Gameplay);
        assert_eq!(pager.selected_option(), 0);

        pager.move_option(1);
        pager.next_category();
        assert_eq!(pager.category(), SettingsCategory::Graphics);
        assert_eq!(pager.selected_option(), 0);
    }

    #[test]
    fn option_moves_clamp_without_wrapping() {
        let mut pager = CategoryPager::default();
        pager.move_option(-1);
        assert_eq!(pager.selected_option(), 0);
        for _ in 0..10 {
            pager.move_option(1);
        }
        assert_eq!(pager.selected_option(), 2);

        pager.next_category(); // Audio, single row
        pager.move_option(1);
        assert_eq!(pager.selected_option(), 0);

        pager.next_category(); // Controls, two rows
        for _ in 0..5 {
            pager.move_option(1);
            assert!(pager.selected_option() < SettingsCategory::Controls.option_count());
        }
        assert_eq!(pager.selected_option(), 1);
    }

    #[test]
    fn graphics_rows_edit_their_settings() {
        let mut pager = CategoryPager::default();
        let mut settings = GameSettings::default();

        pager.change_value(1, &mut settings);
        assert_eq!(settings.resolution_label(), "1280x720");

        pager.move_option(1);
        pager.change_value(-1, &mut settings);
        assert!(settings.fullscreen);

        pager.move_option(1);
        pager.change_value(1, &mut settings);
        pager.change_value(1, &mut settings);
        assert_eq!(settings.quality, Quality::High);
    }

    #[test]
    fn sensitivity_row_clamps() {
        let mut pager = CategoryPager::new(0.1);
        pager.next_category();
        pager.next_category();
        assert_eq!(pager.category(), SettingsCategory::Controls);

        let mut settings = GameSettings { mouse_sensitivity: 9.95, ..Default::default() };
        pager.change_value(1, &mut settings);
        assert_eq!(settings.mouse_sensitivity, MAX_SENSITIVITY);

        settings.mouse_sensitivity = 0.12;
        pager.change_value(-1, &mut settings);
        assert_eq!(settings.mouse_sensitivity, MIN_SENSITIVITY);
    }

    #[test]
    fn audio_page_changes_nothing() {
        let mut pager = CategoryPager::default();
        pager.next_category();
        let mut settings = GameSettings::default();
        pager.change_value(1, &mut settings);
        assert_eq!(settings, GameSettings::default());
    }

    #[test]
    fn gameplay_rows_toggle_and_clamp() {
        let mut pager = CategoryPager::default();
        pager.prev_category();
        let mut settings = GameSettings::default();

        pager.change_value(-1, &mut settings);
        pager.change_value(-1, &mut settings);
        assert_eq!(settings.difficulty, Difficulty::Easy);

        pager.move_option(1);
        pager.change_value(1, &mut settings);
        assert!(!settings.show_fps);

        pager.move_option(1);
        pager.change_value(1, &mut settings);
        assert!(!settings.auto_reload);
    }
}

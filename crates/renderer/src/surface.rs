//! The draw-call surface the UI renders through.

use thiserror::Error;

/// RGB text color, components in 0..1.
pub type Rgb = [f32; 3];
/// RGBA fill color, components in 0..1.
pub type Rgba = [f32; 4];

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DrawError {
    #[error("draw backend is unavailable")]
    Unavailable,
    #[error("draw call rejected: {0}")]
    Rejected(String),
}

pub type DrawResult = Result<(), DrawError>;

/// The two primitives every panel draws with. Coordinates are pixels from the
/// top-left corner of the window.
pub trait DrawSurface {
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Rgb) -> DrawResult;

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) -> DrawResult;
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text { text: String, x: f32, y: f32, color: Rgb },
    Rect { x: f32, y: f32, w: f32, h: f32, color: Rgba },
}

/// Surface that records every call. Used for headless hosts and tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    /// When set, every call fails and nothing is recorded.
    pub fail_calls: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All recorded text strings, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                DrawCommand::Rect { .. } => None,
            })
            .collect()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    /// The first recorded text containing `needle`.
    pub fn find_text(&self, needle: &str) -> Option<&DrawCommand> {
        self.commands
            .iter()
            .find(|c| matches!(c, DrawCommand::Text { text, .. } if text.contains(needle)))
    }

    pub fn rect_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Rect { .. })).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Rgb) -> DrawResult {
        if self.fail_calls {
            return Err(DrawError::Unavailable);
        }
        self.commands.push(DrawCommand::Text { text: text.to_string(), x, y, color });
        Ok(())
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) -> DrawResult {
        if self.fail_calls {
            return Err(DrawError::Unavailable);
        }
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
        Ok(())
    }
}

/// Draw text, echoing it to the log when the surface rejects it.
pub fn text_or_echo(surface: &mut dyn DrawSurface, text: &str, x: f32, y: f32, color: Rgb) {
    if let Err(e) = surface.draw_text(text, x, y, color) {
        log::warn!("Error rendering text: {e}");
        log::info!("[UI] {text}");
    }
}

/// Fill a rect, logging when the surface rejects it.
pub fn rect_or_log(surface: &mut dyn DrawSurface, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
    if let Err(e) = surface.fill_rect(x, y, w, h, color) {
        log::warn!("Error rendering UI background: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_surface_keeps_order() {
        let mut s = RecordingSurface::new();
        s.fill_rect(0.0, 0.0, 10.0, 10.0, [0.0, 0.0, 0.0, 1.0]).unwrap();
        s.draw_text("hello", 1.0, 2.0, [1.0, 1.0, 1.0]).unwrap();
        assert_eq!(s.commands.len(), 2);
        assert_eq!(s.texts(), vec!["hello"]);
        assert_eq!(s.rect_count(), 1);
    }

    #[test]
    fn failing_surface_records_nothing_and_helpers_swallow() {
        let mut s = RecordingSurface { fail_calls: true, ..Default::default() };
        text_or_echo(&mut s, "hello", 0.0, 0.0, [1.0, 1.0, 1.0]);
        rect_or_log(&mut s, 0.0, 0.0, 1.0, 1.0, [1.0, 1.0, 1.0, 1.0]);
        assert!(s.commands.is_empty());
    }
}

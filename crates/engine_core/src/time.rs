//! Fixed-step frame clock for hosts that drive the UI loop themselves.

use std::time::Duration;

/// Tracks frame delta, total elapsed time and frame count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Time {
    /// Duration of the last frame.
    delta: Duration,
    /// Total elapsed time since start.
    elapsed: Duration,
    /// Frame count since start.
    frame_count: u64,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    pub fn new() -> Self {
        Self {
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Step the clock by one frame of `delta`.
    pub fn advance(&mut self, delta: Duration) {
        self.delta = delta;
        self.elapsed += delta;
        self.frame_count += 1;
    }

    /// Get the delta time in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Get total elapsed time in seconds.
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the current FPS (from the last frame only).
    pub fn fps(&self) -> f32 {
        if self.delta.as_secs_f32() > 0.0 {
            1.0 / self.delta.as_secs_f32()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_accumulates_elapsed_and_frames() {
        let mut time = Time::new();
        time.advance(Duration::from_millis(250));
        time.advance(Duration::from_millis(250));
        assert_eq!(time.frame_count(), 2);
        assert!((time.elapsed_seconds() - 0.5).abs() < 1e-6);
        assert!((time.fps() - 4.0).abs() < 1e-3);
    }

    #[test]
    fn fps_is_zero_before_first_frame() {
        assert_eq!(Time::new().fps(), 0.0);
    }
}

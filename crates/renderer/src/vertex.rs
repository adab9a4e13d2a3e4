//! Overlay vertex type and the builder that turns UI draw calls into quads.

use bytemuck::{Pod, Zeroable};

use crate::{DrawResult, DrawSurface, Rgb, Rgba};

/// Vertex for screen-space text / UI overlay.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct OverlayVertex {
    /// NDC position (x, y) in -1..1
    pub position: [f32; 2],
    /// UV into font atlas (negative x = solid color quad)
    pub tex_coords: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

/// Font atlas layout: 16 columns x 6 rows of 6x8 pixel glyphs, covering ASCII 32..127.
const FONT_COLS: f32 = 16.0;
const FONT_ROWS: f32 = 6.0;
pub const GLYPH_PX_W: f32 = 6.0;
pub const GLYPH_PX_H: f32 = 8.0;
const TEXT_SCALE: f32 = 2.0;

/// Builds screen-space overlay geometry from text and rect calls.
/// Text is drawn at a fixed scale since the UI draw calls carry none.
pub struct OverlayTextBuilder {
    pub vertices: Vec<OverlayVertex>,
    pub indices: Vec<u32>,
    screen_w: f32,
    screen_h: f32,
}

impl OverlayTextBuilder {
    pub fn new(screen_w: f32, screen_h: f32) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            screen_w: screen_w.max(1.0),
            screen_h: screen_h.max(1.0),
        }
    }

    /// Start a new frame, possibly at a new window size.
    pub fn reset(&mut self, screen_w: f32, screen_h: f32) {
        self.vertices.clear();
        self.indices.clear();
        self.screen_w = screen_w.max(1.0);
        self.screen_h = screen_h.max(1.0);
    }

    /// Pixel width of `text` at the overlay text scale.
    pub fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * GLYPH_PX_W * TEXT_SCALE
    }

    /// Convert pixel coords to NDC.
    fn px_to_ndc(&self, px: f32, py: f32) -> [f32; 2] {
        [
            (px / self.screen_w) * 2.0 - 1.0,
            1.0 - (py / self.screen_h) * 2.0,
        ]
    }

    fn push_quad(&mut self, tl: [f32; 2], br: [f32; 2], uv0: [f32; 2], uv1: [f32; 2], color: [f32; 4]) {
        let base = self.vertices.len() as u32;
        self.vertices.push(OverlayVertex { position: [tl[0], tl[1]], tex_coords: [uv0[0], uv0[1]], color });
        self.vertices.push(OverlayVertex { position: [br[0], tl[1]], tex_coords: [uv1[0], uv0[1]], color });
        self.vertices.push(OverlayVertex { position: [br[0], br[1]], tex_coords: [uv1[0], uv1[1]], color });
        self.vertices.push(OverlayVertex { position: [tl[0], br[1]], tex_coords: [uv0[0], uv1[1]], color });
        self.indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Add a solid-color rectangle. Coordinates in pixels.
    pub fn add_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
        // Negative widths come from empty volume bars; nothing to draw.
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let tl = self.px_to_ndc(x, y);
        let br = self.px_to_ndc(x + w, y + h);
        let uv = [-1.0, -1.0]; // sentinel: solid color
        self.push_quad(tl, br, uv, uv, color);
    }

    /// Add a string of text at pixel position (x, y).
    pub fn add_text(&mut self, x: f32, y: f32, text: &str, color: [f32; 4]) {
        let gw = GLYPH_PX_W * TEXT_SCALE;
        let gh = GLYPH_PX_H * TEXT_SCALE;
        let mut cx = x;
        for ch in text.chars() {
            let code = ch as u32;
            if !(32..=127).contains(&code) {
                cx += gw;
                continue;
            }
            let idx = code - 32;
            let col = (idx % 16) as f32;
            let row = (idx / 16) as f32;
            let uv0 = [col / FONT_COLS, row / FONT_ROWS];
            let uv1 = [(col + 1.0) / FONT_COLS, (row + 1.0) / FONT_ROWS];

            let tl = self.px_to_ndc(cx, y);
            let br = self.px_to_ndc(cx + gw, y + gh);
            self.push_quad(tl, br, uv0, uv1, color);
            cx += gw;
        }
    }

    pub fn quad_count(&self) -> usize {
        self.indices.len() / 6
    }
}

impl DrawSurface for OverlayTextBuilder {
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Rgb) -> DrawResult {
        self.add_text(x, y, text, [color[0], color[1], color[2], 1.0]);
        Ok(())
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) -> DrawResult {
        self.add_rect(x, y, w, h, color);
        Ok(())
    }
}

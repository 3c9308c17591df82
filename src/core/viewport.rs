//! Maps the fixed logical poster onto an arbitrarily sized drawing surface.

use super::constants::{MIN_SCALE, POSTER_HEIGHT, POSTER_WIDTH};
use glam::Vec2;

/// Uniform scale plus centering offset for one surface size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub surface: Vec2,
    pub scale: f32,
    pub offset: Vec2,
}

impl Viewport {
    /// Fit the poster inside `surface_w` x `surface_h` physical pixels,
    /// preserving its aspect ratio and centering it.
    pub fn fit(surface_w: f32, surface_h: f32) -> Self {
        Self::fit_logical(surface_w, surface_h, POSTER_WIDTH, POSTER_HEIGHT)
    }

    pub fn fit_logical(surface_w: f32, surface_h: f32, logical_w: f32, logical_h: f32) -> Self {
        let surface = Vec2::new(surface_w.max(0.0), surface_h.max(0.0));
        let scale_x = surface.x / logical_w;
        let scale_y = surface.y / logical_h;
        let scale = scale_x.min(scale_y).max(MIN_SCALE);
        let offset = Vec2::new(
            ((surface.x - logical_w * scale) * 0.5).max(0.0),
            ((surface.y - logical_h * scale) * 0.5).max(0.0),
        );
        Self {
            surface,
            scale,
            offset,
        }
    }

    #[inline]
    pub fn to_logical(&self, physical: Vec2) -> Vec2 {
        (physical - self.offset) / self.scale
    }

    #[inline]
    pub fn to_physical(&self, logical: Vec2) -> Vec2 {
        self.offset + logical * self.scale
    }

    /// Poster rectangle in physical pixels: (x, y, w, h).
    pub fn poster_rect(&self) -> [f32; 4] {
        [
            self.offset.x,
            self.offset.y,
            POSTER_WIDTH * self.scale,
            POSTER_HEIGHT * self.scale,
        ]
    }
}

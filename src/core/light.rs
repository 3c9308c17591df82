//! Rotating sun-ray burst anchored at the upper centre of the poster.

use super::constants::*;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// One ray in logical units, relative to the burst origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub angle: f32,
    pub length: f32,
    pub width: f32,
}

impl Ray {
    #[inline]
    pub fn tip(&self) -> Vec2 {
        Vec2::from_angle(self.angle) * self.length
    }
}

#[derive(Clone, Debug)]
pub struct SunRays {
    rays: Vec<Ray>,
    flicker: bool,
}

impl SunRays {
    pub fn new(flicker: bool) -> Self {
        let rays = (0..RAY_COUNT)
            .map(|i| Ray {
                angle: TAU * i as f32 / RAY_COUNT as f32,
                length: RAY_LENGTH,
                width: RAY_WIDTH,
            })
            .collect();
        Self { rays, flicker }
    }

    /// Burst origin in logical coordinates.
    pub fn origin() -> Vec2 {
        Vec2::new(POSTER_WIDTH * 0.5, POSTER_HEIGHT * 0.25)
    }

    /// Whole-burst rotation for a given frame count.
    #[inline]
    pub fn rotation(frame: u64) -> f32 {
        frame as f32 * RAY_ROTATION_PER_FRAME
    }

    /// Re-roll stroke widths when flickering; steady rays keep their width.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.flicker {
            return;
        }
        for r in &mut self.rays {
            r.width = RAY_FLICKER_MIN + rng.gen::<f32>() * RAY_FLICKER_SPAN;
        }
    }

    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    pub fn flicker(&self) -> bool {
        self.flicker
    }
}

//! The scene context: every animated element plus the random source that
//! drives them. Updates run once per frame; pointer events arrive between
//! frames.

use super::branches::BranchSet;
use super::config::{Foreground, SceneConfig};
use super::constants::PETAL_COUNT;
use super::fish::FishPond;
use super::light::SunRays;
use super::petals::PetalPool;
use super::viewport::Viewport;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Side effects the host should perform after an input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    /// Pointer entered a branch's hit region; play the rustle cue.
    BranchRustle { index: usize },
}

/// Sprite slots the renderer resolves to loaded images.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Background,
    Petal,
    Branch(usize),
    Fish,
}

pub struct Scene {
    pub config: SceneConfig,
    petals: PetalPool,
    branches: BranchSet,
    fish: FishPond,
    rays: SunRays,
    frame: u64,
    rng: StdRng,
}

impl Scene {
    pub fn new(config: SceneConfig, rng: StdRng) -> Self {
        Self {
            config,
            petals: PetalPool::default(),
            branches: BranchSet::new(config.hit_region, config.tilt_mode),
            fish: FishPond::default(),
            rays: SunRays::new(config.ray_flicker),
            frame: 0,
            rng,
        }
    }

    pub fn with_seed(config: SceneConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// Populate the petal pool; safe to call more than once.
    pub fn fill_petals(&mut self) {
        self.petals.fill(PETAL_COUNT, &mut self.rng);
    }

    /// Pointer position in physical surface pixels.
    pub fn pointer_moved(
        &mut self,
        physical: Vec2,
        viewport: &Viewport,
        events: &mut Vec<SceneEvent>,
    ) {
        if self.config.foreground != Foreground::Branches {
            return;
        }
        let p = viewport.to_logical(physical);
        self.branches.pointer_moved(p, events);
    }

    /// Advance one frame. `time_sec` is wall-clock seconds since start.
    pub fn step(&mut self, time_sec: f32) {
        self.rays.update(&mut self.rng);
        self.petals.update(&mut self.rng);
        match self.config.foreground {
            Foreground::Branches => self.branches.update(),
            Foreground::Fish => self.fish.update(self.frame, time_sec, &mut self.rng),
        }
        self.frame += 1;
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn petals(&self) -> &PetalPool {
        &self.petals
    }

    pub fn branches(&self) -> &BranchSet {
        &self.branches
    }

    pub fn fish(&self) -> &FishPond {
        &self.fish
    }

    pub fn fish_mut(&mut self) -> &mut FishPond {
        &mut self.fish
    }

    pub fn rays(&self) -> &SunRays {
        &self.rays
    }
}

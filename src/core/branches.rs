//! Hover-reactive branches that ease toward a tilt angle.

use super::config::{HitRegion, TiltMode};
use super::constants::{BRANCH_ANCHORS, BRANCH_EASING, BRANCH_SIZE, BRANCH_TILT};
use super::scene::SceneEvent;
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct Branch {
    pub anchor: Vec2,
    pub size: f32,
    pub angle: f32,
    pub target: f32,
    /// Index into the branch sprite set.
    pub sprite: usize,
    /// Set while the pointer stays inside the hit region; gates the sound cue.
    pub hovered: bool,
}

impl Branch {
    pub fn new(anchor: Vec2, sprite: usize) -> Self {
        Self {
            anchor,
            size: BRANCH_SIZE,
            angle: 0.0,
            target: 0.0,
            sprite,
            hovered: false,
        }
    }

    /// First-order ease toward the target angle.
    #[inline]
    pub fn update(&mut self) {
        self.angle += (self.target - self.angle) * BRANCH_EASING;
    }

    pub fn hit(&self, p: Vec2, region: HitRegion) -> bool {
        match region {
            HitRegion::Box { width, height } => {
                let d = (p - self.anchor).abs();
                d.x <= width * 0.5 && d.y <= height * 0.5
            }
            HitRegion::Radius(r) => p.distance_squared(self.anchor) <= r * r,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BranchSet {
    branches: Vec<Branch>,
    region: HitRegion,
    tilt_mode: TiltMode,
    prev_pointer_x: f32,
}

impl BranchSet {
    pub fn new(region: HitRegion, tilt_mode: TiltMode) -> Self {
        let branches = BRANCH_ANCHORS
            .iter()
            .enumerate()
            .map(|(i, a)| Branch::new(Vec2::new(a[0], a[1]), i))
            .collect();
        Self::with_branches(branches, region, tilt_mode)
    }

    pub fn with_branches(branches: Vec<Branch>, region: HitRegion, tilt_mode: TiltMode) -> Self {
        Self {
            branches,
            region,
            tilt_mode,
            prev_pointer_x: 0.0,
        }
    }

    /// React to a pointer position in logical poster coordinates.
    pub fn pointer_moved(&mut self, p: Vec2, events: &mut Vec<SceneEvent>) {
        let motion_dir = if p.x > self.prev_pointer_x { 1.0 } else { -1.0 };
        self.prev_pointer_x = p.x;

        for (index, b) in self.branches.iter_mut().enumerate() {
            if !b.hit(p, self.region) {
                b.target = 0.0;
                b.hovered = false;
                continue;
            }
            let dir = match self.tilt_mode {
                TiltMode::PointerMotion => motion_dir,
                TiltMode::CenterOffset => {
                    if p.x >= b.anchor.x {
                        1.0
                    } else {
                        -1.0
                    }
                }
            };
            b.target = BRANCH_TILT * dir;
            if !b.hovered {
                b.hovered = true;
                log::debug!("[branch] hover enter {}", index);
                events.push(SceneEvent::BranchRustle { index });
            }
        }
    }

    pub fn update(&mut self) {
        for b in &mut self.branches {
            b.update();
        }
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }
}

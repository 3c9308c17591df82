//! Schools of koi that drift across the lower poster, bounce off the side
//! edges, bump into each other and eventually flee while fading out.

use super::constants::*;
use fnv::FnvHashSet;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct Fish {
    pub pos: Vec2,
    /// Vertical centre of the bob.
    pub base_y: f32,
    pub velocity: Vec2,
    pub size: f32,
    pub opacity: f32,
}

impl Fish {
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size * 0.5
    }
}

#[derive(Clone, Debug)]
pub struct FishGroup {
    pub id: u64,
    pub fish: SmallVec<[Fish; FISH_PER_GROUP_MAX]>,
    /// +1 swims right, -1 swims left.
    pub direction: f32,
    /// Frames left during which no new collision is registered.
    pub immunity: u32,
    pub collisions: u32,
    pub fleeing: bool,
}

impl FishGroup {
    /// New school entering from the side it swims away from.
    pub fn spawn<R: Rng + ?Sized>(id: u64, rng: &mut R) -> Self {
        let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let speed = FISH_SPEED_MIN + rng.gen::<f32>() * FISH_SPEED_SPAN;
        let center_y = FISH_SCHOOL_Y_MIN + rng.gen::<f32>() * FISH_SCHOOL_Y_SPAN;
        let count = rng.gen_range(FISH_PER_GROUP_MIN..=FISH_PER_GROUP_MAX);

        let fish = (0..count)
            .map(|_| {
                let size = FISH_SIZE_MIN + rng.gen::<f32>() * FISH_SIZE_SPAN;
                let behind = size * 0.5 + rng.gen::<f32>() * FISH_SCATTER_X;
                let x = if direction > 0.0 {
                    -behind
                } else {
                    POSTER_WIDTH + behind
                };
                let base_y = center_y + (rng.gen::<f32>() * 2.0 - 1.0) * FISH_SCATTER_Y;
                Fish {
                    pos: Vec2::new(x, base_y),
                    base_y,
                    velocity: Vec2::new(direction * speed, 0.0),
                    size,
                    opacity: 1.0,
                }
            })
            .collect();

        Self {
            id,
            fish,
            direction,
            immunity: 0,
            collisions: 0,
            fleeing: false,
        }
    }

    /// Advance one frame. `time_sec` drives the vertical bob.
    pub fn update(&mut self, time_sec: f32) {
        self.immunity = self.immunity.saturating_sub(1);

        for f in &mut self.fish {
            f.pos.x += f.velocity.x;
            f.pos.y = f.base_y
                + FISH_BOB_AMPLITUDE
                    * (FISH_BOB_TIME_RATE * time_sec + FISH_BOB_WAVELENGTH * f.pos.x).sin();
            if self.fleeing {
                f.velocity *= FLEE_ACCELERATION;
                f.opacity *= FLEE_FADE;
            }
        }

        if !self.fleeing && self.at_bound() {
            self.reverse();
        }
    }

    fn at_bound(&self) -> bool {
        self.fish.iter().any(|f| {
            (self.direction > 0.0 && f.pos.x + f.radius() >= POSTER_WIDTH)
                || (self.direction < 0.0 && f.pos.x - f.radius() <= 0.0)
        })
    }

    fn reverse(&mut self) {
        self.direction = -self.direction;
        for f in &mut self.fish {
            f.velocity.x = -f.velocity.x;
        }
    }

    /// Whether any member circle of `self` overlaps any member circle of `other`.
    pub fn overlaps(&self, other: &FishGroup) -> bool {
        self.fish.iter().any(|a| {
            other
                .fish
                .iter()
                .any(|b| a.pos.distance(b.pos) < a.radius() + b.radius())
        })
    }

    #[inline]
    pub fn can_collide(&self) -> bool {
        self.immunity == 0 && !self.fleeing
    }

    fn register_collision(&mut self) {
        self.collisions += 1;
        self.immunity = COLLISION_IMMUNITY_FRAMES;
        if self.collisions >= COLLISIONS_BEFORE_FLEEING && !self.fleeing {
            self.fleeing = true;
            log::debug!("[fish] group {} fleeing", self.id);
        }
    }

    pub fn total_opacity(&self) -> f32 {
        self.fish.iter().map(|f| f.opacity).sum()
    }

    /// True once every member has faded below the visibility threshold.
    pub fn is_faded(&self) -> bool {
        self.fish.iter().all(|f| f.opacity < FISH_VISIBLE_OPACITY)
    }
}

/// Owns the live fish groups and the pairwise contact bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct FishPond {
    groups: Vec<FishGroup>,
    next_id: u64,
    /// Group pairs overlapping on the previous frame.
    contacts: FnvHashSet<(u64, u64)>,
}

impl FishPond {
    pub fn update<R: Rng + ?Sized>(&mut self, frame: u64, time_sec: f32, rng: &mut R) {
        if frame % FISH_SPAWN_INTERVAL == 0 && self.groups.len() < MAX_FISH_GROUPS {
            self.spawn(rng);
        }

        for g in &mut self.groups {
            g.update(time_sec);
        }

        self.resolve_collisions();
        self.cull();
    }

    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let g = FishGroup::spawn(self.next_id, rng);
        log::debug!(
            "[fish] spawn group {} with {} fish, dir {}",
            g.id,
            g.fish.len(),
            g.direction
        );
        self.next_id += 1;
        self.groups.push(g);
    }

    /// Collisions count once per overlap episode, on the frame it starts.
    fn resolve_collisions(&mut self) {
        for j in 1..self.groups.len() {
            let (head, tail) = self.groups.split_at_mut(j);
            let b = &mut tail[0];
            for a in head.iter_mut() {
                let key = (a.id, b.id);
                if !a.overlaps(b) {
                    self.contacts.remove(&key);
                    continue;
                }
                let entered = self.contacts.insert(key);
                if entered && a.can_collide() && b.can_collide() {
                    a.register_collision();
                    b.register_collision();
                    log::debug!(
                        "[fish] collision {} <-> {} ({} / {})",
                        a.id,
                        b.id,
                        a.collisions,
                        b.collisions
                    );
                }
            }
        }
    }

    fn cull(&mut self) {
        let before = self.groups.len();
        self.groups.retain(|g| {
            let gone = g.is_faded();
            if gone {
                log::debug!("[fish] remove group {}", g.id);
            }
            !gone
        });
        if self.groups.len() != before {
            let live: SmallVec<[u64; MAX_FISH_GROUPS]> =
                self.groups.iter().map(|g| g.id).collect();
            self.contacts
                .retain(|(a, b)| live.contains(a) && live.contains(b));
        }
    }

    pub fn groups(&self) -> &[FishGroup] {
        &self.groups
    }

    pub fn groups_mut(&mut self) -> &mut [FishGroup] {
        &mut self.groups
    }

    /// Insert a prepared group; used by headless drivers and tests.
    pub fn push(&mut self, mut group: FishGroup) {
        group.id = self.next_id;
        self.next_id += 1;
        self.groups.push(group);
    }
}

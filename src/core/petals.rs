use super::constants::*;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// A falling sakura petal. `angle` doubles as the drift phase and the
/// sprite rotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Petal {
    pub pos: Vec2,
    pub speed: f32,
    pub drift: f32,
    pub angle: f32,
    pub size: f32,
}

impl Petal {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut p = Self {
            pos: Vec2::ZERO,
            speed: 0.0,
            drift: 0.0,
            angle: 0.0,
            size: 0.0,
        };
        p.respawn(rng);
        p
    }

    /// Re-roll every parameter in place, somewhere above the top edge.
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pos = Vec2::new(
            rng.gen::<f32>() * POSTER_WIDTH,
            -rng.gen::<f32>() * POSTER_HEIGHT,
        );
        self.speed = PETAL_SPEED_MIN + rng.gen::<f32>() * PETAL_SPEED_SPAN;
        self.drift = (rng.gen::<f32>() - 0.5) * PETAL_DRIFT_SPAN;
        self.angle = rng.gen::<f32>() * TAU;
        self.size = PETAL_SIZE_MIN + rng.gen::<f32>() * PETAL_SIZE_SPAN;
    }

    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pos.y += self.speed;
        self.pos.x += self.drift * self.angle.sin();
        self.angle += PETAL_PHASE_STEP;
        if self.pos.y > POSTER_HEIGHT {
            self.respawn(rng);
        }
    }
}

/// Fixed-size pool of petals, filled once the petal sprite is available.
#[derive(Clone, Debug, Default)]
pub struct PetalPool {
    petals: Vec<Petal>,
}

impl PetalPool {
    pub fn fill<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        while self.petals.len() < count {
            self.petals.push(Petal::spawn(rng));
        }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for p in &mut self.petals {
            p.update(rng);
        }
    }

    pub fn petals(&self) -> &[Petal] {
        &self.petals
    }

    pub fn len(&self) -> usize {
        self.petals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.petals.is_empty()
    }
}

// Host-side tests for the falling petal pool.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod poster;

use poster::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn spawned_petals_are_within_parameter_ranges() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let p = Petal::spawn(&mut rng);
        assert!(p.pos.x >= 0.0 && p.pos.x < POSTER_WIDTH);
        assert!(p.pos.y <= 0.0 && p.pos.y > -POSTER_HEIGHT);
        assert!(p.speed >= 1.0 && p.speed < 3.0);
        assert!(p.drift >= -1.0 && p.drift < 1.0);
        assert!(p.size >= 20.0 && p.size < 40.0);
        assert!(p.angle >= 0.0 && p.angle < std::f32::consts::TAU);
    }
}

#[test]
fn update_moves_down_and_advances_phase() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut p = Petal::spawn(&mut rng);
    p.pos.y = 100.0;
    let before = p.clone();
    p.update(&mut rng);
    assert!((p.pos.y - (before.pos.y + before.speed)).abs() < 1e-4);
    assert!((p.pos.x - (before.pos.x + before.drift * before.angle.sin())).abs() < 1e-4);
    assert!((p.angle - (before.angle + PETAL_PHASE_STEP)).abs() < 1e-6);
}

#[test]
fn petal_wraps_above_the_top_instead_of_falling_forever() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut p = Petal::spawn(&mut rng);
    let mut resets = 0;
    for _ in 0..10_000 {
        let prev_y = p.pos.y;
        p.update(&mut rng);
        assert!(p.pos.y <= POSTER_HEIGHT, "petal escaped: y={}", p.pos.y);
        if p.pos.y < prev_y {
            resets += 1;
            assert!(p.pos.y <= 0.0, "respawn must land above the top edge");
        }
    }
    assert!(resets > 0, "petal never recycled");
}

#[test]
fn pool_fill_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut pool = PetalPool::default();
    assert!(pool.is_empty());
    pool.fill(PETAL_COUNT, &mut rng);
    pool.fill(PETAL_COUNT, &mut rng);
    assert_eq!(pool.len(), PETAL_COUNT);
}

// Host-side tests for fish schools: spawning, bouncing, collisions, fleeing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod poster;

use glam::Vec2;
use poster::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

// Frame index that never triggers a spawn
const QUIET_FRAME: u64 = 1;

fn group_at(x: f32, y: f32, direction: f32, speed: f32) -> FishGroup {
    let fish: SmallVec<[Fish; FISH_PER_GROUP_MAX]> = (0..5)
        .map(|i| Fish {
            pos: Vec2::new(x, y + i as f32),
            base_y: y + i as f32,
            velocity: Vec2::new(direction * speed, 0.0),
            size: 40.0,
            opacity: 1.0,
        })
        .collect();
    FishGroup {
        id: 0,
        fish,
        direction,
        immunity: 0,
        collisions: 0,
        fleeing: false,
    }
}

fn pond_with(groups: Vec<FishGroup>) -> FishPond {
    let mut pond = FishPond::default();
    for g in groups {
        pond.push(g);
    }
    pond
}

#[test]
fn spawned_group_has_shared_direction_and_enters_from_its_side() {
    let mut rng = StdRng::seed_from_u64(11);
    for id in 0..200 {
        let g = FishGroup::spawn(id, &mut rng);
        assert!((FISH_PER_GROUP_MIN..=FISH_PER_GROUP_MAX).contains(&g.fish.len()));
        assert!(g.direction == 1.0 || g.direction == -1.0);
        for f in &g.fish {
            assert_eq!(f.velocity.x.signum(), g.direction);
            assert!(f.size >= FISH_SIZE_MIN && f.size < FISH_SIZE_MIN + FISH_SIZE_SPAN);
            assert_eq!(f.opacity, 1.0);
            if g.direction > 0.0 {
                assert!(f.pos.x < 0.0);
            } else {
                assert!(f.pos.x > POSTER_WIDTH);
            }
        }
    }
}

#[test]
fn bob_stays_within_amplitude() {
    let mut g = group_at(300.0, 800.0, 1.0, 1.5);
    for i in 0..200 {
        g.update(i as f32 / 60.0);
        for f in &g.fish {
            assert!((f.pos.y - f.base_y).abs() <= FISH_BOB_AMPLITUDE + 1e-3);
        }
    }
}

#[test]
fn group_bounces_off_right_edge() {
    let mut g = group_at(POSTER_WIDTH - 21.0, 800.0, 1.0, 1.0);
    g.update(0.0);
    assert_eq!(g.direction, -1.0);
    assert!(g.fish.iter().all(|f| f.velocity.x < 0.0));
    let x = g.fish[0].pos.x;
    g.update(0.0);
    assert!(g.fish[0].pos.x < x);
}

#[test]
fn group_bounces_off_left_edge() {
    let mut g = group_at(21.0, 800.0, -1.0, 1.0);
    g.update(0.0);
    assert_eq!(g.direction, 1.0);
    assert!(g.fish.iter().all(|f| f.velocity.x > 0.0));
}

#[test]
fn entering_group_does_not_bounce_off_its_entry_edge() {
    let mut g = group_at(-40.0, 800.0, 1.0, 1.0);
    for _ in 0..10 {
        g.update(0.0);
    }
    assert_eq!(g.direction, 1.0);
}

#[test]
fn fleeing_group_does_not_bounce() {
    let mut g = group_at(POSTER_WIDTH - 21.0, 800.0, 1.0, 1.0);
    g.fleeing = true;
    g.update(0.0);
    assert_eq!(g.direction, 1.0);
}

#[test]
fn overlap_uses_sum_of_radii() {
    let a = group_at(100.0, 800.0, 1.0, 0.0);
    let near = group_at(139.0, 800.0, -1.0, 0.0);
    let far = group_at(141.0, 800.0, -1.0, 0.0);
    assert!(a.overlaps(&near));
    assert!(!a.overlaps(&far));
}

#[test]
fn collision_counts_once_per_overlap_episode() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut pond = pond_with(vec![
        group_at(300.0, 800.0, 1.0, 0.0),
        group_at(310.0, 800.0, -1.0, 0.0),
    ]);

    // sustained overlap, long past the immunity window
    for _ in 0..(COLLISION_IMMUNITY_FRAMES as usize + 100) {
        pond.update(QUIET_FRAME, 0.0, &mut rng);
    }
    for g in pond.groups() {
        assert_eq!(g.collisions, 1);
        assert_eq!(g.immunity, 0);
    }

    // separate, then meet again
    for f in pond.groups_mut()[1].fish.iter_mut() {
        f.pos.x = 700.0;
    }
    pond.update(QUIET_FRAME, 0.0, &mut rng);
    for f in pond.groups_mut()[1].fish.iter_mut() {
        f.pos.x = 310.0;
    }
    pond.update(QUIET_FRAME, 0.0, &mut rng);
    for g in pond.groups() {
        assert_eq!(g.collisions, 2);
        assert_eq!(g.immunity, COLLISION_IMMUNITY_FRAMES);
    }
}

#[test]
fn overlap_during_immunity_is_ignored() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut a = group_at(300.0, 800.0, 1.0, 0.0);
    a.immunity = 50;
    let b = group_at(310.0, 800.0, -1.0, 0.0);
    let mut pond = pond_with(vec![a, b]);
    pond.update(QUIET_FRAME, 0.0, &mut rng);
    for g in pond.groups() {
        assert_eq!(g.collisions, 0);
    }
}

#[test]
fn third_collision_starts_fleeing_and_fades_until_removed() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut a = group_at(300.0, 800.0, 1.0, 1.0);
    let mut b = group_at(310.0, 800.0, -1.0, 1.0);
    a.collisions = COLLISIONS_BEFORE_FLEEING - 1;
    b.collisions = COLLISIONS_BEFORE_FLEEING - 1;
    let mut pond = pond_with(vec![a, b]);

    pond.update(QUIET_FRAME, 0.0, &mut rng);
    assert!(pond.groups().iter().all(|g| g.fleeing));

    let mut prev_opacity: Vec<f32> = pond.groups().iter().map(|g| g.total_opacity()).collect();
    let mut prev_speed: Vec<f32> = pond
        .groups()
        .iter()
        .map(|g| g.fish[0].velocity.length())
        .collect();
    let mut frames = 0;
    while !pond.groups().is_empty() {
        pond.update(QUIET_FRAME, frames as f32 / 60.0, &mut rng);
        frames += 1;
        assert!(frames < 200, "fleeing groups never culled");
        if pond.groups().len() != prev_opacity.len() {
            // culled together: both groups share the same fade schedule
            assert!(pond.groups().is_empty());
            break;
        }
        for (i, g) in pond.groups().iter().enumerate() {
            let op = g.total_opacity();
            let speed = g.fish[0].velocity.length();
            assert!(op < prev_opacity[i], "opacity must strictly fall");
            assert!((speed / prev_speed[i] - FLEE_ACCELERATION).abs() < 1e-4);
            prev_opacity[i] = op;
            prev_speed[i] = speed;
        }
    }
    // 0.95^n < 0.05 first holds at n = 59
    assert!(frames >= 50 && frames <= 60, "culled after {} frames", frames);
}

#[test]
fn spawns_every_interval_up_to_two_groups() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut pond = FishPond::default();
    pond.update(0, 0.0, &mut rng);
    assert_eq!(pond.groups().len(), 1);
    for frame in 1..FISH_SPAWN_INTERVAL {
        pond.update(frame, frame as f32 / 60.0, &mut rng);
        assert_eq!(pond.groups().len(), 1);
    }
    pond.update(FISH_SPAWN_INTERVAL, 1.0, &mut rng);
    assert_eq!(pond.groups().len(), 2);
    for frame in (FISH_SPAWN_INTERVAL + 1)..2000 {
        pond.update(frame, frame as f32 / 60.0, &mut rng);
        assert!(pond.groups().len() <= MAX_FISH_GROUPS);
    }
}

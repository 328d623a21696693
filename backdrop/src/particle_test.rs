#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
    Particle { x, y, vx, vy, r: 2.0 }
}

// --- random ---

#[test]
fn random_particles_start_inside_bounds() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..1000 {
        let p = Particle::random(&mut rng, 640.0, 480.0);
        assert!((0.0..=640.0).contains(&p.x));
        assert!((0.0..=480.0).contains(&p.y));
    }
}

#[test]
fn random_velocity_and_radius_ranges() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..1000 {
        let p = Particle::random(&mut rng, 100.0, 100.0);
        assert!((-1.0..=1.0).contains(&p.vx), "vx out of range: {}", p.vx);
        assert!((-1.0..=1.0).contains(&p.vy), "vy out of range: {}", p.vy);
        assert!((1.0..=3.0).contains(&p.r), "r out of range: {}", p.r);
    }
}

// --- step ---

#[test]
fn step_moves_by_velocity() {
    let mut p = particle(10.0, 20.0, 0.5, -0.25);
    let reflection = p.step(100.0, 100.0);
    assert_eq!(p.x, 10.5);
    assert_eq!(p.y, 19.75);
    assert!(!reflection.any());
}

#[test]
fn step_reflects_left_edge() {
    let mut p = particle(0.25, 50.0, -0.5, 0.0);
    let reflection = p.step(100.0, 100.0);
    assert!(reflection.horizontal);
    assert!(!reflection.vertical);
    assert_eq!(p.vx, 0.5);
    // No positional correction: the particle sits outside for one frame.
    assert_eq!(p.x, -0.25);
}

#[test]
fn step_reflects_right_and_bottom_edges_together() {
    let mut p = particle(99.5, 99.5, 1.0, 1.0);
    let reflection = p.step(100.0, 100.0);
    assert_eq!(reflection, Reflection { horizontal: true, vertical: true });
    assert_eq!(p.vx, -1.0);
    assert_eq!(p.vy, -1.0);
}

#[test]
fn step_on_exact_bound_does_not_reflect() {
    let mut p = particle(99.0, 0.5, 1.0, -0.5);
    let reflection = p.step(100.0, 100.0);
    assert_eq!(p.x, 100.0);
    assert_eq!(p.y, 0.0);
    assert!(!reflection.any());
}

#[test]
fn crossing_flips_once_then_returns_inside() {
    let mut p = particle(0.3, 50.0, -0.8, 0.0);
    assert!(p.step(100.0, 100.0).horizontal);
    assert!(!p.step(100.0, 100.0).horizontal);
    assert!(p.x >= 0.0);
    assert!(p.vx > 0.0);
}

#[test]
fn speed_is_preserved_over_many_frames() {
    let mut rng = SmallRng::seed_from_u64(99);
    for _ in 0..50 {
        let mut p = Particle::random(&mut rng, 120.0, 80.0);
        let initial = p.speed_sq();
        let mut flips = 0;
        for _ in 0..5000 {
            if p.step(120.0, 80.0).any() {
                flips += 1;
            }
            assert_eq!(p.speed_sq(), initial);
        }
        if p.vx.abs() > 0.05 {
            assert!(flips > 0, "a moving particle should hit a wall within 5000 frames");
        }
    }
}

#[test]
fn particles_stay_near_bounds_over_time() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut p = Particle::random(&mut rng, 50.0, 30.0);
    for _ in 0..10_000 {
        p.step(50.0, 30.0);
        assert!(p.x >= -1.0 && p.x <= 51.0);
        assert!(p.y >= -1.0 && p.y <= 31.0);
    }
}

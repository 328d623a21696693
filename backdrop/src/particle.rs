#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

use rand::Rng;

use crate::consts::{MAX_RADIUS, MAX_SPEED, MIN_RADIUS};

/// One drifting point. Position and radius are in CSS pixels, velocity in
/// CSS pixels per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub r: f64,
}

/// Which velocity components were inverted during a [`Particle::step`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reflection {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Reflection {
    #[must_use]
    pub fn any(self) -> bool {
        self.horizontal || self.vertical
    }
}

impl Particle {
    /// Spawn a particle uniformly inside `[0, width] × [0, height]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: rng.random::<f64>() * width,
            y: rng.random::<f64>() * height,
            vx: (rng.random::<f64>() - 0.5) * 2.0 * MAX_SPEED,
            vy: (rng.random::<f64>() - 0.5) * 2.0 * MAX_SPEED,
            r: MIN_RADIUS + rng.random::<f64>() * (MAX_RADIUS - MIN_RADIUS),
        }
    }

    /// Advance one frame, then invert any velocity component whose axis is
    /// now outside the bounds. The position itself is not clamped.
    pub fn step(&mut self, width: f64, height: f64) -> Reflection {
        self.x += self.vx;
        self.y += self.vy;

        let mut reflection = Reflection::default();
        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
            reflection.horizontal = true;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
            reflection.vertical = true;
        }
        reflection
    }

    /// Squared speed; constant across reflections.
    #[must_use]
    pub fn speed_sq(&self) -> f64 {
        self.vx * self.vx + self.vy * self.vy
    }
}

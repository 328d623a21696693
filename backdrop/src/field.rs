//! One surface's particle population.
//!
//! A field is rebuilt wholesale whenever its canvas is resized; individual
//! particles are never added or removed between resizes.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use rand::Rng;

use crate::consts::{AREA_PER_PARTICLE, MAX_PARTICLES};
use crate::particle::Particle;

/// Number of particles for a `width × height` surface:
/// `min(floor(width * height / AREA_PER_PARTICLE), MAX_PARTICLES)`.
///
/// Degenerate sizes (zero, negative, NaN) yield an empty field.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn particle_count(width: f64, height: f64) -> usize {
    let area = width * height;
    if area.is_nan() || area <= 0.0 {
        return 0;
    }
    let count = (area / AREA_PER_PARTICLE).floor();
    if count >= MAX_PARTICLES as f64 { MAX_PARTICLES } else { count as usize }
}

#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt new bounds and regenerate the population from scratch.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width;
        self.height = height;
        let count = particle_count(width, height);
        self.particles.clear();
        self.particles
            .extend((0..count).map(|_| Particle::random(rng, width, height)));
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

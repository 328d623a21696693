//! Shared numeric and colour constants for the backdrop crate.

// ── Density ─────────────────────────────────────────────────────

/// Canvas area in square CSS pixels that earns one particle.
pub const AREA_PER_PARTICLE: f64 = 8000.0;

/// Upper bound on particles per surface; keeps per-frame work bounded.
pub const MAX_PARTICLES: usize = 80;

// ── Motion ──────────────────────────────────────────────────────

/// Velocity components are drawn uniformly from `[-MAX_SPEED, MAX_SPEED)`.
pub const MAX_SPEED: f64 = 1.0;

/// Smallest particle radius in CSS pixels.
pub const MIN_RADIUS: f64 = 1.0;

/// Largest particle radius in CSS pixels.
pub const MAX_RADIUS: f64 = 3.0;

// ── Colour ──────────────────────────────────────────────────────

/// Fill used for every surface except the accent one.
pub const BASE_COLOR: &str = "#3b82f6";

/// Fill used for the accent surface.
pub const ACCENT_COLOR: &str = "#60a5fa";

/// Position of the surface painted with [`ACCENT_COLOR`] (the third canvas).
pub const ACCENT_SURFACE_INDEX: usize = 2;

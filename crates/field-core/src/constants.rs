//! Tuning constants for the particle field
//!
//! Distances are in logical units (CSS-pixel-like), rates are per tick.

/// Particle count when none is configured
pub const DEFAULT_QUANTITY: usize = 30;

/// Global follow-damping divisor (higher = less responsive to the pointer)
pub const DEFAULT_STATICITY: f32 = 50.0;

/// Follow-smoothing divisor (higher = more lag behind the pointer)
pub const DEFAULT_EASE: f32 = 50.0;

/// Width of the band along each edge in which opacity is driven by proximity
pub const EDGE_FADE_DISTANCE: f32 = 20.0;

/// Opacity gained per tick while a particle is clear of the edge band
pub const FADE_IN_STEP: f32 = 0.02;

/// Maximum drift per axis per tick; velocities are sampled in `[-DRIFT_SPEED, DRIFT_SPEED)`
pub const DRIFT_SPEED: f32 = 0.1;

/// Lower bound of the pointer-attraction coefficient
pub const MAGNETISM_MIN: f32 = 0.1;

/// Upper bound (exclusive) of the pointer-attraction coefficient
pub const MAGNETISM_MAX: f32 = 4.1;

/// Halo radius relative to the particle radius
pub const GLOW_SCALE: f32 = 1.5;

/// Shadow blur radius relative to the particle radius
pub const SHADOW_BLUR_SCALE: f32 = 2.0;

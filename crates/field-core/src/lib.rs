//! # Particle Field Core
//!
//! Data model for the pointer-following particle field: the particle record,
//! drawing-surface geometry, the two visual themes and the factory that samples
//! fresh particles for a theme.

pub mod constants;
pub mod factory;
pub mod geometry;
pub mod particle;
pub mod remap;
pub mod theme;

pub use constants::*;
pub use factory::*;
pub use geometry::*;
pub use particle::*;
pub use remap::*;
pub use theme::*;

//! # Particle Field Simulation
//!
//! CPU simulation of the pointer-following particle field: configuration,
//! pointer tracking, the per-tick step and the frame scheduler that drives it.

pub mod error;
pub mod params;
pub mod pointer;
pub mod scheduler;
pub mod simulation;

pub use error::*;
pub use params::*;
pub use pointer::*;
pub use scheduler::*;
pub use simulation::*;

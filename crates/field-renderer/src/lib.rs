//! # Particle Field Renderer
//!
//! Draws particle snapshots: a backend-agnostic canvas adapter, a CPU circle
//! batch, and a wgpu renderer that draws the batch in one instanced pass.

pub mod batch;
pub mod canvas;
pub mod color;
pub mod palette;
pub mod renderer;

pub use batch::*;
pub use canvas::*;
pub use color::*;
pub use palette::*;
pub use renderer::*;

//! Backend-agnostic drawing of particle snapshots

use crate::color::Color;
use crate::palette::{Shadow, ThemePalette};
use field_core::{Geometry, Particle, Theme};
use field_simulation::FrameRenderer;
use glam::Vec2;

/// Minimal immediate-mode 2D drawing context.
///
/// `translate` and `set_shadow` accumulate until `reset_state`.
pub trait Canvas {
    /// Start a frame: drop everything drawn so far and fill with `background`
    fn clear(&mut self, geometry: &Geometry, background: Color);
    fn translate(&mut self, offset: Vec2);
    fn set_shadow(&mut self, shadow: Option<Shadow>);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Back to identity transform and no shadow
    fn reset_state(&mut self);
}

/// Draw one frame of the field onto `canvas`.
///
/// Each particle is drawn at its position shifted by its pointer offset, and
/// the canvas state is reset afterwards so offsets and shadows never compound.
pub fn draw_field<C: Canvas + ?Sized>(
    canvas: &mut C,
    geometry: &Geometry,
    palette: &ThemePalette,
    particles: &[Particle],
) {
    canvas.clear(geometry, palette.background);

    for particle in particles {
        canvas.translate(particle.offset());

        canvas.set_shadow(Some(palette.shadow(particle)));
        canvas.fill_circle(particle.position(), particle.size, palette.fill(particle));

        if let Some((radius, color)) = palette.halo(particle) {
            canvas.set_shadow(None);
            canvas.fill_circle(particle.position(), radius, color);
        }

        canvas.reset_state();
    }
}

/// Adapts a [`Canvas`] to the scheduler's [`FrameRenderer`]
pub struct FieldPainter<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas + ?Sized> FieldPainter<'a, C> {
    pub fn new(canvas: &'a mut C) -> Self {
        Self { canvas }
    }
}

impl<C: Canvas + ?Sized> FrameRenderer for FieldPainter<'_, C> {
    fn draw(&mut self, geometry: &Geometry, theme: Theme, particles: &[Particle]) {
        let palette = ThemePalette::for_theme(theme);
        draw_field(self.canvas, geometry, &palette, particles);
    }
}

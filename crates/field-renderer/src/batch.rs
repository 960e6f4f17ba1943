//! CPU-side circle batch recorded through the [`Canvas`] interface

use crate::canvas::Canvas;
use crate::color::Color;
use crate::palette::Shadow;
use bytemuck::{Pod, Zeroable};
use field_core::Geometry;
use glam::Vec2;

/// Per-circle instance data (matches `CircleInstance` in circle.wgsl)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    /// Center in physical pixels
    pub center: [f32; 2],
    pub radius: f32,
    /// Blur band width; 0 for a crisp fill
    pub softness: f32,
    pub color: [f32; 4],
}

/// One frame of circles in physical pixels, ready for upload.
///
/// Shadows follow 2D canvas semantics: the shadow is drawn first and its
/// opacity is scaled by the opacity of the shape casting it.
#[derive(Debug)]
pub struct CircleBatch {
    instances: Vec<CircleInstance>,
    background: Color,
    scale: f32,

    // Reset per particle
    translation: Vec2,
    shadow: Option<Shadow>,
}

impl Default for CircleBatch {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl CircleBatch {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            background: Color::transparent(),
            scale: 1.0,
            translation: Vec2::ZERO,
            shadow: None,
        }
    }

    pub fn instances(&self) -> &[CircleInstance] {
        &self.instances
    }

    pub fn background(&self) -> Color {
        self.background
    }

    fn push(&mut self, center: Vec2, radius: f32, softness: f32, color: Color) {
        if color.a <= 0.0 || radius <= 0.0 {
            return;
        }

        let center = (center + self.translation) * self.scale;
        self.instances.push(CircleInstance {
            center: center.to_array(),
            radius: radius * self.scale,
            softness: softness * self.scale,
            color: color.to_array(),
        });
    }
}

impl Canvas for CircleBatch {
    fn clear(&mut self, geometry: &Geometry, background: Color) {
        self.instances.clear();
        self.background = background;
        self.scale = if geometry.scale > 0.0 { geometry.scale } else { 1.0 };
        self.reset_state();
    }

    fn translate(&mut self, offset: Vec2) {
        self.translation += offset;
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.shadow = shadow;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        // Shadow goes underneath the fill
        if let Some(shadow) = self.shadow {
            if shadow.blur > 0.0 {
                let alpha = shadow.color.a * color.a;
                self.push(center, radius, shadow.blur, shadow.color.with_alpha(alpha));
            }
        }
        self.push(center, radius, 0.0, color);
    }

    fn reset_state(&mut self) {
        self.translation = Vec2::ZERO;
        self.shadow = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::draw_field;
    use crate::palette::ThemePalette;
    use field_core::{Particle, Theme};

    fn shadow(alpha: f32, blur: f32) -> Shadow {
        Shadow {
            color: Color::new(1.0, 1.0, 1.0, alpha),
            blur,
        }
    }

    #[test]
    fn test_translation_and_scale_apply_to_instances() {
        let mut batch = CircleBatch::default();
        batch.clear(&Geometry::new(100.0, 100.0).with_scale(2.0), Color::transparent());

        batch.translate(Vec2::new(1.0, -2.0));
        batch.fill_circle(Vec2::new(10.0, 10.0), 3.0, Color::new(1.0, 1.0, 1.0, 0.5));

        let instance = batch.instances()[0];
        assert_eq!(instance.center, [22.0, 16.0]);
        assert_eq!(instance.radius, 6.0);
        assert_eq!(instance.softness, 0.0);
    }

    #[test]
    fn test_shadow_is_pushed_before_fill() {
        let mut batch = CircleBatch::default();
        batch.clear(&Geometry::new(100.0, 100.0), Color::transparent());

        batch.set_shadow(Some(shadow(0.5, 4.0)));
        batch.fill_circle(Vec2::new(10.0, 10.0), 2.0, Color::new(1.0, 1.0, 1.0, 0.5));

        let instances = batch.instances();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].softness, 4.0);
        assert_eq!(instances[0].color[3], 0.25);
        assert_eq!(instances[1].softness, 0.0);
        assert_eq!(instances[1].color[3], 0.5);
    }

    #[test]
    fn test_reset_clears_translation_and_shadow() {
        let mut batch = CircleBatch::default();
        batch.clear(&Geometry::new(100.0, 100.0), Color::transparent());

        batch.translate(Vec2::new(5.0, 5.0));
        batch.set_shadow(Some(shadow(1.0, 2.0)));
        batch.reset_state();
        batch.fill_circle(Vec2::new(10.0, 10.0), 2.0, Color::new(1.0, 1.0, 1.0, 1.0));

        assert_eq!(batch.instances().len(), 1);
        assert_eq!(batch.instances()[0].center, [10.0, 10.0]);
    }

    #[test]
    fn test_invisible_circles_are_skipped() {
        let mut batch = CircleBatch::default();
        batch.clear(&Geometry::new(100.0, 100.0), Color::transparent());

        batch.fill_circle(Vec2::new(10.0, 10.0), 2.0, Color::transparent());
        batch.fill_circle(Vec2::new(10.0, 10.0), 0.0, Color::new(1.0, 1.0, 1.0, 1.0));

        assert!(batch.instances().is_empty());
    }

    #[test]
    fn test_unlit_dark_particle_shadow_fainter_than_fill() {
        let palette = ThemePalette::for_theme(Theme::Dark);
        let mut batch = CircleBatch::default();

        for alpha in [0.0, 0.3, 0.6] {
            let mut p = Particle::new(Vec2::new(50.0, 50.0), Vec2::ZERO, 2.0, 0.6, 1.0);
            p.alpha = alpha;

            draw_field(&mut batch, &Geometry::new(100.0, 100.0), &palette, &[p]);

            let instances = batch.instances();
            let (shadow, fill) = (instances[0], instances[1]);
            assert!(shadow.softness > 0.0);
            assert_eq!(fill.softness, 0.0);
            assert!(shadow.color[3] < fill.color[3]);
        }

        // Alpha 0 renders at the fill floor, with the shadow scaled by it
        let mut p = Particle::new(Vec2::new(50.0, 50.0), Vec2::ZERO, 2.0, 0.6, 1.0);
        p.alpha = 0.0;
        draw_field(&mut batch, &Geometry::new(100.0, 100.0), &palette, &[p]);
        assert!((batch.instances()[0].color[3] - 0.3 * 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_clear_starts_a_new_frame() {
        let palette = ThemePalette::for_theme(Theme::Light);
        let mut batch = CircleBatch::default();
        batch.fill_circle(Vec2::new(1.0, 1.0), 1.0, Color::new(1.0, 1.0, 1.0, 1.0));

        batch.clear(&Geometry::new(10.0, 10.0), palette.background);

        assert!(batch.instances().is_empty());
        assert_eq!(batch.background(), palette.background);
    }
}

//! Sampling of fresh particles

use crate::constants::{DRIFT_SPEED, MAGNETISM_MAX, MAGNETISM_MIN};
use crate::geometry::Geometry;
use crate::particle::Particle;
use crate::theme::{Theme, ThemeStyle, ValueRange};
use glam::Vec2;
use rand::Rng;

/// Creates particles styled for the active theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFactory {
    pub light: ThemeStyle,
    pub dark: ThemeStyle,
    pub magnetism: ValueRange,
    pub drift_speed: f32,
}

impl Default for ParticleFactory {
    fn default() -> Self {
        Self {
            light: ThemeStyle::light(),
            dark: ThemeStyle::dark(),
            magnetism: ValueRange::new(MAGNETISM_MIN, MAGNETISM_MAX),
            drift_speed: DRIFT_SPEED,
        }
    }
}

impl ParticleFactory {
    pub fn new(light: ThemeStyle, dark: ThemeStyle) -> Self {
        Self {
            light,
            dark,
            ..Default::default()
        }
    }

    pub fn style(&self, theme: Theme) -> &ThemeStyle {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }

    /// Sample one particle at a uniformly random in-bounds position.
    ///
    /// Always starts fully transparent with no pointer offset.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, geometry: &Geometry, theme: Theme) -> Particle {
        let style = self.style(theme);

        let position = Vec2::new(
            rng.random::<f32>() * geometry.width,
            rng.random::<f32>() * geometry.height,
        );
        let velocity = Vec2::new(
            (rng.random::<f32>() - 0.5) * 2.0 * self.drift_speed,
            (rng.random::<f32>() - 0.5) * 2.0 * self.drift_speed,
        );

        Particle::new(
            position,
            velocity,
            style.size.sample(rng),
            style.target_alpha.sample(rng),
            self.magnetism.sample(rng),
        )
    }

    /// Sample a whole generation of `quantity` particles
    pub fn populate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        geometry: &Geometry,
        theme: Theme,
        quantity: usize,
    ) -> Vec<Particle> {
        (0..quantity)
            .map(|_| self.sample(rng, geometry, theme))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_sample_respects_theme_and_bounds() {
        let factory = ParticleFactory::default();
        let geometry = Geometry::new(320.0, 240.0);
        let mut rng = StdRng::seed_from_u64(42);

        for theme in [Theme::Light, Theme::Dark] {
            let style = *factory.style(theme);
            for _ in 0..500 {
                let p = factory.sample(&mut rng, &geometry, theme);

                assert!(p.position[0] >= 0.0 && p.position[0] <= 320.0);
                assert!(p.position[1] >= 0.0 && p.position[1] <= 240.0);
                assert!(style.size.contains(p.size));
                assert!(style.target_alpha.contains(p.target_alpha));
                assert!(factory.magnetism.contains(p.magnetism));
                assert!(p.velocity[0].abs() <= DRIFT_SPEED);
                assert!(p.velocity[1].abs() <= DRIFT_SPEED);
                assert_eq!(p.alpha, 0.0);
                assert_eq!(p.offset, [0.0, 0.0]);
            }
        }
    }

    #[test]
    fn test_drift_is_symmetric() {
        let factory = ParticleFactory::default();
        let geometry = Geometry::new(100.0, 100.0);
        let mut rng = StdRng::seed_from_u64(3);

        let particles = factory.populate(&mut rng, &geometry, Theme::Light, 4000);
        let mean_dx: f32 =
            particles.iter().map(|p| p.velocity[0]).sum::<f32>() / particles.len() as f32;

        assert!(mean_dx.abs() < 0.01);
        assert!(particles.iter().any(|p| p.velocity[0] < 0.0));
        assert!(particles.iter().any(|p| p.velocity[0] > 0.0));
    }

    #[test]
    fn test_populate_quantity() {
        let factory = ParticleFactory::default();
        let mut rng = StdRng::seed_from_u64(1);
        let particles = factory.populate(&mut rng, &Geometry::new(10.0, 10.0), Theme::Dark, 17);
        assert_eq!(particles.len(), 17);
    }
}

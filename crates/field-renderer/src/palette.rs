//! Theme-dependent particle colors (Catppuccin Latte / Mocha)

use crate::color::Color;
use catppuccin::PALETTE;
use field_core::{Particle, Theme, GLOW_SCALE, SHADOW_BLUR_SCALE};

/// Soft blurred copy drawn beneath a filled circle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub blur: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemePalette {
    pub theme: Theme,
    pub background: Color,
    pub particle: Color,
}

impl ThemePalette {
    pub fn for_theme(theme: Theme) -> Self {
        let flavor = match theme {
            Theme::Light => &PALETTE.latte,
            Theme::Dark => &PALETTE.mocha,
        };

        Self {
            theme,
            background: Color::from(&flavor.colors.base),
            particle: Color::from(&flavor.colors.text),
        }
    }

    /// Fill opacity for a particle opacity.
    ///
    /// Dark: muted to 40% with a visibility floor. Light: slightly boosted with a ceiling.
    pub fn fill_alpha(&self, alpha: f32) -> f32 {
        match self.theme {
            Theme::Dark => (alpha * 0.4).max(0.15),
            Theme::Light => (alpha * 1.1).min(0.8),
        }
    }

    pub fn fill(&self, particle: &Particle) -> Color {
        self.particle.with_alpha(self.fill_alpha(particle.alpha))
    }

    /// Glow behind the fill. The canvas scales its opacity by the fill's.
    pub fn shadow(&self, particle: &Particle) -> Shadow {
        let alpha = match self.theme {
            Theme::Dark => 0.3,
            Theme::Light => particle.alpha * 0.2,
        };

        Shadow {
            color: self.particle.with_alpha(alpha),
            blur: particle.size * SHADOW_BLUR_SCALE,
        }
    }

    /// Outer halo: radius and color. Dark theme only.
    pub fn halo(&self, particle: &Particle) -> Option<(f32, Color)> {
        match self.theme {
            Theme::Dark => Some((
                particle.size * GLOW_SCALE,
                self.particle.with_alpha(particle.alpha * 0.1),
            )),
            Theme::Light => None,
        }
    }
}

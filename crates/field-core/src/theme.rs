//! Visual themes and the per-theme particle styling ranges

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Active visual theme of the host surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Half-open sampling interval `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Uniform sample; collapses to `min` when the range is empty.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max > self.min {
            rng.random_range(self.min..self.max)
        } else {
            self.min
        }
    }

    pub fn contains(&self, value: f32) -> bool {
        if self.max > self.min {
            value >= self.min && value < self.max
        } else {
            value == self.min
        }
    }
}

/// Size and target-opacity ranges for particles spawned under one theme.
///
/// Both are sampled continuously; sizes are not snapped to whole steps and
/// opacities are not rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeStyle {
    /// Radius range in logical units
    pub size: ValueRange,
    /// Steady-state opacity range
    pub target_alpha: ValueRange,
}

impl ThemeStyle {
    /// Medium-weight particles kept dim so they sit quietly on a dark background
    pub const fn dark() -> Self {
        Self {
            size: ValueRange::new(1.5, 4.5),
            target_alpha: ValueRange::new(0.2, 0.6),
        }
    }

    /// Smaller particles with the full opacity range for contrast on a light background
    pub const fn light() -> Self {
        Self {
            size: ValueRange::new(0.5, 3.5),
            target_alpha: ValueRange::new(0.2, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_theme_styles_differ() {
        let dark = ThemeStyle::dark();
        let light = ThemeStyle::light();

        assert!(dark.size.min > light.size.min);
        assert!(dark.size.max > light.size.max);
        assert!(dark.target_alpha.max < light.target_alpha.max);
    }

    #[test]
    fn test_range_sample_stays_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = ValueRange::new(0.5, 3.5);
        for _ in 0..1000 {
            assert!(range.contains(range.sample(&mut rng)));
        }
    }

    #[test]
    fn test_empty_range_collapses_to_min() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = ValueRange::new(2.0, 2.0);
        assert_eq!(range.sample(&mut rng), 2.0);
    }
}

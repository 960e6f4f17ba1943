//! Particle field simulation
//!
//! One `ParticleField` owns a whole generation of particles together with the
//! geometry, theme and pointer target it was built against. A generation is
//! replaced wholesale on resize, theme change and refresh; individual particles
//! are replaced in their own slot when they drift off the surface.
//!
//! A field starts suspended and holds no particles until `resume`. Resets that
//! arrive while suspended only update geometry and theme.

use crate::params::FieldConfig;
use crate::pointer::PointerTracker;
use field_core::{
    remap, Geometry, GeometryTracker, Particle, ParticleFactory, SurfaceMetrics, Theme,
    EDGE_FADE_DISTANCE, FADE_IN_STEP,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Read-only host state sampled right before a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInputs {
    pub theme: Theme,
    /// Latest pointer sample in the shared coordinate space, if any arrived
    pub pointer: Option<Vec2>,
}

/// What a single `step` did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// The surface had no area; nothing was touched
    pub skipped: bool,
    /// Slots refilled with a fresh particle this tick
    pub respawned: usize,
    pub population: usize,
}

impl StepReport {
    fn skipped() -> Self {
        Self {
            skipped: true,
            ..Default::default()
        }
    }
}

pub struct ParticleField {
    config: FieldConfig,
    factory: ParticleFactory,
    rng: StdRng,

    geometry: GeometryTracker,
    theme: Theme,
    pointer: PointerTracker,

    particles: Vec<Particle>,
    generation: u64,
    active: bool,
}

impl ParticleField {
    pub fn new(config: FieldConfig, theme: Theme) -> Self {
        Self::with_rng(config, theme, StdRng::from_os_rng())
    }

    /// Deterministic field, mainly for tests and reproducible captures
    pub fn with_seed(config: FieldConfig, theme: Theme, seed: u64) -> Self {
        Self::with_rng(config, theme, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: FieldConfig, theme: Theme, rng: StdRng) -> Self {
        let factory = config.factory();
        let theme = config.theme.unwrap_or(theme);
        Self {
            config,
            factory,
            rng,
            geometry: GeometryTracker::new(),
            theme,
            pointer: PointerTracker::new(),
            particles: Vec::new(),
            generation: 0,
            active: false,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry.current()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn pointer_target(&self) -> Vec2 {
        self.pointer.target()
    }

    /// Ordered snapshot of the live population
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of full regenerations so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the field holds a live population
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Swap in a new configuration. Regenerates when anything that shapes a
    /// generation changed (quantity, styles, theme override, refresh flag).
    pub fn set_config(&mut self, config: FieldConfig) {
        let regenerate = config.quantity != self.config.quantity
            || config.light != self.config.light
            || config.dark != self.config.dark
            || config.refresh != self.config.refresh
            || config.theme.is_some_and(|theme| theme != self.theme);

        if let Some(theme) = config.theme {
            self.theme = theme;
        }
        self.factory = config.factory();
        self.config = config;

        if regenerate {
            self.regenerate();
        }
    }

    /// Toggle-style refresh signal: a changed value forces a new generation
    pub fn set_refresh(&mut self, refresh: bool) {
        if refresh != self.config.refresh {
            self.config.refresh = refresh;
            self.regenerate();
        }
    }

    /// Re-measure the surface and start a new generation.
    ///
    /// Every resize notification regenerates, even if the measured size is
    /// unchanged.
    pub fn resize(&mut self, surface: &impl SurfaceMetrics) {
        if !self.geometry.remeasure(surface) {
            log::trace!("Resize with unchanged geometry");
        }
        self.regenerate();
    }

    /// Switch theme. A change re-measures the surface and regenerates.
    pub fn set_theme(&mut self, theme: Theme, surface: &impl SurfaceMetrics) {
        let theme = self.config.theme.unwrap_or(theme);
        if theme != self.theme {
            log::debug!("Theme changed: {} -> {}", self.theme, theme);
            self.theme = theme;
            self.geometry.remeasure(surface);
            self.regenerate();
        }
    }

    /// Feed a pointer sample in the shared coordinate space
    pub fn pointer_moved(&mut self, pointer: Vec2) {
        let geometry = self.geometry.current();
        self.pointer.update(pointer, &geometry);
    }

    /// Apply the host's read-only inputs ahead of a step
    pub fn apply(&mut self, inputs: &FrameInputs) {
        let geometry = self.geometry.current();
        self.set_theme(inputs.theme, &geometry);
        if let Some(pointer) = inputs.pointer {
            self.pointer_moved(pointer);
        }
    }

    /// Discard the population and sample `quantity` fresh particles.
    ///
    /// On a degenerate surface the population is left empty until the next resize.
    /// While suspended nothing is sampled; `resume` builds the generation.
    pub fn regenerate(&mut self) {
        let geometry = self.geometry.current();
        self.particles.clear();
        if !self.active {
            log::trace!("Field suspended, regeneration deferred");
            return;
        }
        self.generation += 1;

        if geometry.is_degenerate() {
            log::debug!(
                "Generation {}: surface {}x{} has no area, population left empty",
                self.generation,
                geometry.width,
                geometry.height
            );
            return;
        }

        self.particles = self.factory.populate(
            &mut self.rng,
            &geometry,
            self.theme,
            self.config.quantity,
        );

        log::debug!(
            "Generation {}: {} {} particles on {}x{} @{}x",
            self.generation,
            self.particles.len(),
            self.theme,
            geometry.width,
            geometry.height,
            geometry.scale
        );
    }

    /// Activate the field and build a fresh generation
    pub fn resume(&mut self) {
        self.active = true;
        self.regenerate();
    }

    /// Drop the population and stay empty until the next `resume`
    pub fn suspend(&mut self) {
        self.active = false;
        self.particles.clear();
    }

    /// Advance every particle by one tick.
    ///
    /// The next generation is built into a fresh buffer and swapped in at the
    /// end, so a respawn never shifts or skips another slot.
    pub fn step(&mut self) -> StepReport {
        let geometry = self.geometry.current();
        if geometry.is_degenerate() {
            return StepReport::skipped();
        }

        let staticity = self.config.effective_staticity();
        let ease = self.config.effective_ease();
        let target = self.pointer.target();

        let mut respawned = 0;
        let mut next = Vec::with_capacity(self.particles.len());

        for particle in &self.particles {
            let mut p = *particle;

            // Opacity: free fade-in inside, proximity-driven near the edges
            let fade = remap(p.closest_edge(&geometry), 0.0, EDGE_FADE_DISTANCE, 0.0, 1.0);
            if fade > 1.0 {
                p.alpha = (p.alpha + FADE_IN_STEP).min(p.target_alpha);
            } else {
                p.alpha = p.target_alpha * fade;
            }

            let position = p.position() + p.velocity();
            p.position = position.to_array();

            // Damped approach toward pointer / (staticity / magnetism)
            let pull = if p.magnetism > 0.0 {
                target * (p.magnetism / staticity)
            } else {
                Vec2::ZERO
            };
            let offset = p.offset() + (pull - p.offset()) / ease;
            p.offset = offset.to_array();

            if p.is_within(&geometry) {
                next.push(p);
            } else {
                next.push(self.factory.sample(&mut self.rng, &geometry, self.theme));
                respawned += 1;
            }
        }

        self.particles = next;

        StepReport {
            skipped: false,
            respawned,
            population: self.particles.len(),
        }
    }
}

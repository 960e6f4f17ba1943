//! Frame scheduling: one step + draw per display refresh

use crate::simulation::{ParticleField, StepReport};
use field_core::{Geometry, Particle, Theme};

/// Draws one particle snapshot. Implemented by the rendering backend.
pub trait FrameRenderer {
    fn draw(&mut self, geometry: &Geometry, theme: Theme, particles: &[Particle]);
}

/// Registration handle for the per-refresh callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// A tick ran (the scheduler is registered)
    pub ticked: bool,
    /// The renderer was invoked
    pub drawn: bool,
    pub report: StepReport,
}

/// Owns the start/stop lifecycle of the tick→render cycle.
///
/// Ticks only run while a handle is held. `stop` takes the handle back and
/// tears the population down, so nothing keeps ticking against a surface
/// that is going away.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    handle: Option<FrameHandle>,
    next_id: u64,
    frames: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<FrameHandle> {
        self.handle
    }

    /// Frames run under the current registration
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Register the callback and build the first generation.
    /// Starting an already running scheduler returns the existing handle.
    pub fn start(&mut self, field: &mut ParticleField) -> FrameHandle {
        if let Some(handle) = self.handle {
            return handle;
        }

        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.handle = Some(handle);
        self.frames = 0;

        field.resume();
        log::info!(
            "Frame scheduler started (handle {}, {} particles)",
            handle.id(),
            field.particles().len()
        );
        handle
    }

    /// Deregister the callback and destroy the population
    pub fn stop(&mut self, field: &mut ParticleField) -> Option<FrameHandle> {
        let handle = self.handle.take()?;
        field.suspend();
        log::info!(
            "Frame scheduler stopped (handle {}, {} frames)",
            handle.id(),
            self.frames
        );
        Some(handle)
    }

    /// Run one tick, then draw if a renderer is available.
    ///
    /// A missing renderer (surface not ready, context lost) only skips the
    /// draw; the tick itself still runs.
    pub fn run_frame<R: FrameRenderer + ?Sized>(
        &mut self,
        field: &mut ParticleField,
        renderer: Option<&mut R>,
    ) -> FrameOutcome {
        if self.handle.is_none() {
            return FrameOutcome::default();
        }

        self.frames += 1;
        let report = field.step();

        if report.respawned > 0 {
            log::trace!(
                "Frame {}: respawned {} of {} particles",
                self.frames,
                report.respawned,
                report.population
            );
        }

        if report.skipped {
            log::trace!("Frame {}: surface has no area, step skipped", self.frames);
            return FrameOutcome {
                ticked: true,
                drawn: false,
                report,
            };
        }

        let drawn = match renderer {
            Some(renderer) => {
                renderer.draw(&field.geometry(), field.theme(), field.particles());
                true
            }
            None => false,
        };

        FrameOutcome {
            ticked: true,
            drawn,
            report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::FieldConfig;

    #[derive(Default)]
    struct CountingRenderer {
        draws: usize,
        last_len: usize,
        last_theme: Option<Theme>,
    }

    impl FrameRenderer for CountingRenderer {
        fn draw(&mut self, _geometry: &Geometry, theme: Theme, particles: &[Particle]) {
            self.draws += 1;
            self.last_len = particles.len();
            self.last_theme = Some(theme);
        }
    }

    fn field(width: f32, height: f32) -> ParticleField {
        let mut field = ParticleField::with_seed(FieldConfig::default(), Theme::Dark, 9);
        field.resize(&Geometry::new(width, height));
        field
    }

    #[test]
    fn test_no_ticks_before_start() {
        let mut scheduler = FrameScheduler::new();
        let mut field = field(100.0, 100.0);
        let mut renderer = CountingRenderer::default();

        let outcome = scheduler.run_frame(&mut field, Some(&mut renderer));

        assert!(!outcome.ticked);
        assert_eq!(renderer.draws, 0);
    }

    #[test]
    fn test_running_frame_steps_and_draws() {
        let mut scheduler = FrameScheduler::new();
        let mut field = field(100.0, 100.0);
        let mut renderer = CountingRenderer::default();

        scheduler.start(&mut field);
        for _ in 0..3 {
            let outcome = scheduler.run_frame(&mut field, Some(&mut renderer));
            assert!(outcome.ticked && outcome.drawn);
        }

        assert_eq!(scheduler.frames(), 3);
        assert_eq!(renderer.draws, 3);
        assert_eq!(renderer.last_len, 30);
        assert_eq!(renderer.last_theme, Some(Theme::Dark));
    }

    #[test]
    fn test_missing_renderer_skips_draw_only() {
        let mut scheduler = FrameScheduler::new();
        let mut field = field(100.0, 100.0);
        scheduler.start(&mut field);

        let outcome = scheduler.run_frame::<CountingRenderer>(&mut field, None);

        assert!(outcome.ticked);
        assert!(!outcome.drawn);
        assert!(!outcome.report.skipped);
        assert!(scheduler.is_running());
    }

    #[test]
    fn test_degenerate_surface_skips_tick_without_stopping() {
        let mut scheduler = FrameScheduler::new();
        let mut field = field(0.0, 0.0);
        let mut renderer = CountingRenderer::default();
        scheduler.start(&mut field);

        let outcome = scheduler.run_frame(&mut field, Some(&mut renderer));

        assert!(outcome.report.skipped);
        assert!(!outcome.drawn);
        assert!(scheduler.is_running());

        field.resize(&Geometry::new(40.0, 40.0));
        let outcome = scheduler.run_frame(&mut field, Some(&mut renderer));
        assert!(outcome.drawn);
    }

    #[test]
    fn test_stop_releases_handle_and_population() {
        let mut scheduler = FrameScheduler::new();
        let mut field = field(100.0, 100.0);
        let mut renderer = CountingRenderer::default();

        let handle = scheduler.start(&mut field);
        assert_eq!(scheduler.start(&mut field), handle);

        assert_eq!(scheduler.stop(&mut field), Some(handle));
        assert!(field.particles().is_empty());
        assert_eq!(scheduler.stop(&mut field), None);

        let outcome = scheduler.run_frame(&mut field, Some(&mut renderer));
        assert!(!outcome.ticked);
        assert_eq!(renderer.draws, 0);
    }

    #[test]
    fn test_restart_issues_new_handle_and_generation() {
        let mut scheduler = FrameScheduler::new();
        let mut field = field(100.0, 100.0);

        let first = scheduler.start(&mut field);
        scheduler.stop(&mut field);
        let second = scheduler.start(&mut field);

        assert_ne!(first, second);
        assert_eq!(field.particles().len(), 30);
    }

    #[test]
    fn test_stopped_field_ignores_theme_and_resize() {
        let mut scheduler = FrameScheduler::new();
        let mut field = field(100.0, 100.0);

        scheduler.start(&mut field);
        scheduler.stop(&mut field);

        let geometry = Geometry::new(80.0, 80.0);
        field.set_theme(Theme::Light, &geometry);
        field.resize(&geometry);
        field.set_refresh(true);
        assert!(field.particles().is_empty());

        scheduler.start(&mut field);
        assert_eq!(field.particles().len(), 30);
        assert_eq!(field.theme(), Theme::Light);
    }

    #[test]
    fn test_start_builds_the_first_generation() {
        let mut scheduler = FrameScheduler::new();
        let mut field = field(100.0, 100.0);
        let geometry = Geometry::new(100.0, 100.0);
        field.set_theme(Theme::Light, &geometry);
        field.resize(&geometry);
        assert!(field.particles().is_empty());

        scheduler.start(&mut field);

        assert_eq!(field.generation(), 1);
        assert_eq!(field.particles().len(), 30);
    }
}

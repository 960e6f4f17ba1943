//! Pointer-following particle field
//!
//! Drifting points that fade in and out near the window edges and lean toward
//! the cursor. Resizing the window or switching theme regenerates the field.

mod gpu;

use field_core::{Geometry, SurfaceMetrics, Theme};
use field_renderer::{CircleBatch, FieldPainter};
use field_simulation::{FieldConfig, FrameInputs, FrameScheduler, ParticleField};
use glam::Vec2;
use gpu::GpuState;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

const FRAME_TIME_WINDOW: usize = 100;

/// Reads logical geometry straight off a window
struct WindowMetrics<'a>(&'a Window);

impl SurfaceMetrics for WindowMetrics<'_> {
    fn measure(&self) -> Geometry {
        let scale = self.0.scale_factor();
        let size = self.0.inner_size().to_logical::<f32>(scale);
        Geometry::new(size.width, size.height).with_scale(scale as f32)
    }
}

fn host_theme(theme: winit::window::Theme) -> Theme {
    match theme {
        winit::window::Theme::Light => Theme::Light,
        winit::window::Theme::Dark => Theme::Dark,
    }
}

/// `--config <path>` if present
fn config_path() -> Option<String> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next();
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(path.to_string());
        }
    }
    None
}

fn load_config() -> FieldConfig {
    let Some(path) = config_path() else {
        return FieldConfig::default();
    };

    match FieldConfig::load(&path) {
        Ok(config) => {
            log::info!("✓ Loaded config from {}", path);
            config
        }
        Err(e) => {
            log::warn!("{}; falling back to defaults", e);
            FieldConfig::default()
        }
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,

    field: ParticleField,
    scheduler: FrameScheduler,

    // Host inputs, consumed at the start of each frame
    host_theme: Theme,
    pending_pointer: Option<Vec2>,

    frame_times: VecDeque<f32>,
    last_frame_time: Instant,
}

impl App {
    fn new(config: FieldConfig) -> Self {
        Self {
            window: None,
            gpu_state: None,
            field: ParticleField::new(config, Theme::default()),
            scheduler: FrameScheduler::new(),
            host_theme: Theme::default(),
            pending_pointer: None,
            frame_times: VecDeque::with_capacity(FRAME_TIME_WINDOW),
            last_frame_time: Instant::now(),
        }
    }

    fn title(&self, fps: f32) -> String {
        let mut title = format!(
            "Particle Field - {:.0} FPS - {} particles ({})",
            fps,
            self.field.particles().len(),
            self.field.theme()
        );
        if let Some(class_name) = &self.field.config().class_name {
            title.push_str(" - ");
            title.push_str(class_name);
        }
        if !self.scheduler.is_running() {
            title.push_str(" [paused]");
        }
        title
    }

    fn track_frame_time(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = (now - self.last_frame_time).as_secs_f32() * 1000.0;
        self.last_frame_time = now;

        if self.frame_times.len() == FRAME_TIME_WINDOW {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_time);

        let avg = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        if avg > 0.0 {
            1000.0 / avg
        } else {
            0.0
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let fps = self.track_frame_time();

        // Latest pointer sample and theme go in before the tick reads them
        let inputs = FrameInputs {
            theme: self.host_theme,
            pointer: self.pending_pointer.take(),
        };
        self.field.apply(&inputs);

        let Some(window) = self.window.clone() else {
            return;
        };

        let result = match &mut self.gpu_state {
            Some(gpu_state) => gpu_state.render_frame(&mut self.scheduler, &mut self.field),
            None => Ok(self
                .scheduler
                .run_frame::<FieldPainter<CircleBatch>>(&mut self.field, None)),
        };

        if let Err(e) = result {
            // Surface unavailable: tick without drawing
            self.scheduler
                .run_frame::<FieldPainter<CircleBatch>>(&mut self.field, None);

            match e {
                wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                    if let Some(gpu_state) = &mut self.gpu_state {
                        gpu_state.reconfigure();
                    }
                }
                wgpu::SurfaceError::OutOfMemory => {
                    log::error!("Surface out of memory, exiting");
                    self.scheduler.stop(&mut self.field);
                    event_loop.exit();
                    return;
                }
                e => log::debug!("Skipping draw: {:?}", e),
            }
        }

        window.set_title(&self.title(fps));
    }

    fn toggle_theme(&mut self) {
        let mut config = self.field.config().clone();
        config.theme = Some(self.field.theme().toggled());
        log::info!("Theme override: {}", self.field.theme().toggled());
        self.field.set_config(config);
    }

    fn toggle_refresh(&mut self) {
        let refresh = !self.field.config().refresh;
        log::info!("Refresh -> {}", refresh);
        self.field.set_refresh(refresh);
    }

    fn toggle_running(&mut self) {
        if self.scheduler.is_running() {
            self.scheduler.stop(&mut self.field);
            // No more redraws will come to refresh the title
            if let Some(window) = &self.window {
                window.set_title(&self.title(0.0));
            }
        } else {
            self.scheduler.start(&mut self.field);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title("Particle Field")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(GpuState::new(window.clone())) {
            Ok(gpu_state) => self.gpu_state = Some(gpu_state),
            // Keep ticking without a renderer; draws are skipped
            Err(e) => log::error!("{}", e),
        }

        if let Some(theme) = window.theme() {
            self.host_theme = host_theme(theme);
        }

        // Field is still suspended here: these only record theme and geometry,
        // and `start` builds the single first generation
        let metrics = WindowMetrics(&window);
        self.field.set_theme(self.host_theme, &metrics);
        self.field.resize(&metrics);
        self.scheduler.start(&mut self.field);

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                self.scheduler.stop(&mut self.field);
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match key_code {
                KeyCode::KeyR => self.toggle_refresh(),
                KeyCode::KeyT => self.toggle_theme(),
                KeyCode::Space => self.toggle_running(),
                _ => {}
            },

            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
                if let Some(window) = &self.window {
                    self.field.resize(&WindowMetrics(window));
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(window) = &self.window {
                    self.field.resize(&WindowMetrics(window));
                }
            }

            WindowEvent::ThemeChanged(theme) => {
                self.host_theme = host_theme(theme);
                if let Some(window) = &self.window {
                    self.field.set_theme(self.host_theme, &WindowMetrics(window));
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(window) = &self.window {
                    let logical = position.to_logical::<f32>(window.scale_factor());
                    self.pending_pointer = Some(Vec2::new(logical.x, logical.y));
                }
            }

            WindowEvent::RedrawRequested => self.frame(event_loop),

            _ => {}
        }

        // Keep the cycle going only while registered
        if self.scheduler.is_running() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.scheduler.stop(&mut self.field);
    }
}

fn main() {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting particle field...");

    let config = load_config();
    log::info!(
        "  quantity={} staticity={} ease={}",
        config.quantity,
        config.staticity,
        config.ease
    );

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);

    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
}

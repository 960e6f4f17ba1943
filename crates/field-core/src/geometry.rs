//! Drawing-surface geometry and the tracker that keeps it current

use glam::Vec2;

/// Logical size and pixel density of the drawing surface.
///
/// `origin` is the surface's top-left corner in the shared pointer
/// coordinate space; pointer samples are made surface-local against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

impl Geometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::ZERO,
            width,
            height,
            scale: 1.0,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// A hidden or not-yet-laid-out surface reports no usable area
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite())
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Whether `point` lies within the bounds grown outward by `margin` on every side
    pub fn contains_extended(&self, point: Vec2, margin: f32) -> bool {
        point.x >= -margin
            && point.x <= self.width + margin
            && point.y >= -margin
            && point.y <= self.height + margin
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Anything that can report its current drawing-surface geometry
pub trait SurfaceMetrics {
    fn measure(&self) -> Geometry;
}

impl SurfaceMetrics for Geometry {
    fn measure(&self) -> Geometry {
        *self
    }
}

/// Holds the last measured geometry of a surface
#[derive(Debug, Clone, Default)]
pub struct GeometryTracker {
    current: Geometry,
}

impl GeometryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Geometry {
        self.current
    }

    /// Take a fresh reading. Returns `true` if it differs from the previous one.
    pub fn remeasure(&mut self, surface: &impl SurfaceMetrics) -> bool {
        let measured = surface.measure();
        let changed = measured != self.current;
        self.current = measured;
        changed
    }
}

//! Pointer target shared between the input handler and the simulation step

use field_core::Geometry;
use glam::Vec2;

/// Tracks the pointer in surface-local, center-relative coordinates.
///
/// Samples that fall outside the surface are ignored, so attraction freezes
/// at the last inside position instead of snapping back to the center.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    target: Vec2,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current attraction target relative to the surface center
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Convert a shared-space sample to center-relative surface coordinates
    pub fn to_local(pointer: Vec2, geometry: &Geometry) -> Vec2 {
        pointer - geometry.origin - geometry.center()
    }

    /// Feed one pointer sample. Returns `true` if the target moved.
    pub fn update(&mut self, pointer: Vec2, geometry: &Geometry) -> bool {
        let local = Self::to_local(pointer, geometry);
        let half = geometry.center();
        let inside = local.x.abs() < half.x && local.y.abs() < half.y;

        if inside && local != self.target {
            self.target = local;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_sample_becomes_center_relative() {
        let geometry = Geometry::new(200.0, 100.0);
        let mut tracker = PointerTracker::new();

        assert!(tracker.update(Vec2::new(150.0, 25.0), &geometry));
        assert_eq!(tracker.target(), Vec2::new(50.0, -25.0));
    }

    #[test]
    fn test_origin_is_subtracted() {
        let geometry = Geometry {
            origin: Vec2::new(300.0, 40.0),
            ..Geometry::new(100.0, 100.0)
        };
        let mut tracker = PointerTracker::new();

        tracker.update(Vec2::new(350.0, 90.0), &geometry);
        assert_eq!(tracker.target(), Vec2::ZERO);

        tracker.update(Vec2::new(310.0, 130.0), &geometry);
        assert_eq!(tracker.target(), Vec2::new(-40.0, 40.0));
    }

    #[test]
    fn test_outside_sample_keeps_previous_target() {
        let geometry = Geometry::new(100.0, 100.0);
        let mut tracker = PointerTracker::new();
        tracker.update(Vec2::new(80.0, 70.0), &geometry);

        assert!(!tracker.update(Vec2::new(500.0, 50.0), &geometry));
        assert!(!tracker.update(Vec2::new(50.0, -1.0), &geometry));
        assert_eq!(tracker.target(), Vec2::new(30.0, 20.0));
    }

    #[test]
    fn test_boundary_is_outside() {
        let geometry = Geometry::new(100.0, 100.0);
        let mut tracker = PointerTracker::new();

        assert!(!tracker.update(Vec2::new(100.0, 50.0), &geometry));
        assert!(!tracker.update(Vec2::new(0.0, 50.0), &geometry));
        assert_eq!(tracker.target(), Vec2::ZERO);
    }
}

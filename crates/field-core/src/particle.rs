//! Particle record for the pointer-following field

use crate::geometry::Geometry;
use glam::Vec2;

/// A single drifting point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in logical surface units
    pub position: [f32; 2],
    /// Constant drift per tick
    pub velocity: [f32; 2],
    /// Pointer-follow displacement, applied on top of `position`
    pub offset: [f32; 2],
    /// Radius
    pub size: f32,
    /// Current opacity, always within `[0, target_alpha]`
    pub alpha: f32,
    /// Opacity the particle settles at once clear of the edges
    pub target_alpha: f32,
    /// How strongly the particle is pulled toward the pointer
    pub magnetism: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, size: f32, target_alpha: f32, magnetism: f32) -> Self {
        Self {
            position: position.to_array(),
            velocity: velocity.to_array(),
            offset: [0.0; 2],
            size,
            alpha: 0.0,
            target_alpha,
            magnetism,
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::from_array(self.position)
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::from_array(self.velocity)
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::from_array(self.offset)
    }

    /// Where the particle is actually drawn: position plus pointer offset
    pub fn rendered_position(&self) -> Vec2 {
        self.position() + self.offset()
    }

    /// Distances from the rendered circle's rim to the left, right, top and bottom edges.
    /// Negative once the rim crosses an edge.
    pub fn edge_distances(&self, geometry: &Geometry) -> [f32; 4] {
        let p = self.rendered_position();
        [
            p.x - self.size,
            geometry.width - p.x - self.size,
            p.y - self.size,
            geometry.height - p.y - self.size,
        ]
    }

    pub fn closest_edge(&self, geometry: &Geometry) -> f32 {
        self.edge_distances(geometry)
            .into_iter()
            .fold(f32::INFINITY, f32::min)
    }

    /// Inside the bounds grown outward by the particle's own radius
    pub fn is_within(&self, geometry: &Geometry) -> bool {
        geometry.contains_extended(self.rendered_position(), self.size)
    }
}

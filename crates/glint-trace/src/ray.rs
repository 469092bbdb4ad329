//! Ray representation and the per-hit result value.

use glint_math::{Point3, Vec3};
use glint_shape::Material;

/// A ray in 3D space defined by origin and direction.
///
/// The direction is kept exactly as supplied, not normalized: every
/// intersector is exact for arbitrary nonzero directions, and hit distances
/// are measured in units of the direction's length.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}

/// A single ray-surface intersection.
///
/// Transient per query; not persisted. The normal is unit length and is
/// reported exactly as the surface stores or derives it, never flipped
/// toward the ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitpoint {
    /// Distance from the ray origin along the ray direction, `>= 0`.
    pub distance: f64,
    /// Unit surface normal at the hit.
    pub normal: Vec3,
    /// Material resolved from the surface texture at the hit.
    pub material: Material,
}

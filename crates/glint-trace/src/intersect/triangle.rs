//! Ray-triangle intersection (Möller-Trumbore).

use crate::ray::{Hitpoint, Ray};
use glint_math::EPSILON;
use glint_shape::Triangle;

/// Intersect a ray with a triangle.
///
/// Möller-Trumbore: the hit is located in barycentric coordinates without
/// first intersecting the containing plane. The normal follows the vertex
/// winding (`(b-a) × (c-a)`, normalized) and is never flipped toward the
/// ray; both faces are renderable.
///
/// The material is resolved once at texture coordinates (0, 0): triangles
/// carry a single constant material over their whole surface rather than
/// per-point texturing.
pub fn intersect_triangle(ray: &Ray, triangle: &Triangle) -> Option<Hitpoint> {
    let e1 = triangle.b - triangle.a;
    let e2 = triangle.c - triangle.a;

    let p = ray.direction.cross(&e2);
    let det = e1.dot(&p);

    // Ray is parallel to the triangle's plane
    if det.abs() < EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;

    let s = ray.origin - triangle.a;
    let u = s.dot(&p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&e1);
    let v = ray.direction.dot(&q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = e2.dot(&q) * inv_det;
    if t <= EPSILON {
        return None;
    }

    Some(Hitpoint {
        distance: t,
        normal: e1.cross(&e2).normalize(),
        material: triangle.texture.material(0.0, 0.0),
    })
}

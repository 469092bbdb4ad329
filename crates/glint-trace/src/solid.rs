//! Solidity classification for CSG merging.
//!
//! Planes and triangles have no interior volume: their surface is the whole
//! shape, so every ray crossing is necessarily a boundary and the union
//! merge must not pair such hits into entry/exit spans. These predicates
//! decide when a shape, or the specific point that was struck, behaves as a
//! zero-thickness sheet rather than a solid region.

use crate::ray::{Hitpoint, Ray};
use glint_math::{Point3, EPSILON};
use glint_shape::{CsgOp, Shape, Triangle};

/// Whether `point` lies on a zero-thickness surface of `shape`.
///
/// Planes answer by coplanarity, triangles by barycentric containment,
/// composites by either child. Spheres are solid and never count as a
/// boundary sheet here.
pub fn lies_on_non_solid(point: &Point3, shape: &Shape) -> bool {
    match shape {
        Shape::Plane(plane) => {
            (point - plane.origin).dot(plane.normal.as_ref()).abs() < EPSILON
        }
        Shape::Triangle(triangle) => barycentric_within(point, triangle),
        Shape::Sphere(_) => false,
        Shape::Composite(c) => {
            lies_on_non_solid(point, &c.left) || lies_on_non_solid(point, &c.right)
        }
    }
}

/// Barycentric containment by the ratio of sub-triangle areas.
///
/// Each coordinate is the unsigned area opposite one vertex over the full
/// area; the point counts as contained when all three lie in
/// `[-EPSILON, 1 + EPSILON]`.
fn barycentric_within(point: &Point3, triangle: &Triangle) -> bool {
    let area = (triangle.b - triangle.a)
        .cross(&(triangle.c - triangle.a))
        .norm();
    // Collinear vertices span no area
    if area < EPSILON {
        return false;
    }

    let alpha = (triangle.b - point).cross(&(triangle.c - point)).norm() / area;
    let beta = (triangle.c - point).cross(&(triangle.a - point)).norm() / area;
    let gamma = (triangle.a - point).cross(&(triangle.b - point)).norm() / area;

    let contained = |x: f64| (-EPSILON..=1.0 + EPSILON).contains(&x);
    contained(alpha) && contained(beta) && contained(gamma)
}

/// Whether the shape a hit originated from behaves as a zero-thickness
/// surface for that hit.
///
/// Primitives answer for themselves. For composites the answer depends on
/// the operator: an intersection is non-solid as soon as either operand is
/// (the lower dimensionality is contagious), a subtraction inherits from
/// its minuend only, and a union is decided at the struck point itself,
/// because which sub-surface was hit determines the local solidity.
pub fn is_non_solid(ray: &Ray, hit: &Hitpoint, shape: &Shape) -> bool {
    match shape {
        Shape::Plane(_) | Shape::Triangle(_) => true,
        Shape::Sphere(_) => false,
        Shape::Composite(c) => match c.op {
            CsgOp::Intersection => {
                is_non_solid(ray, hit, &c.left) || is_non_solid(ray, hit, &c.right)
            }
            CsgOp::Subtraction => is_non_solid(ray, hit, &c.left),
            CsgOp::Union => lies_on_non_solid(&ray.at(hit.distance), shape),
        },
    }
}

//! Ray-sphere intersection (quadratic equation).

use crate::ray::{Hitpoint, Ray};
use crate::{Result, TraceError};
use glint_math::{quadratic_roots, Point2, Vec3};
use glint_shape::Sphere;
use std::f64::consts::PI;

/// Intersect a ray with a sphere.
///
/// Expands `|origin + t*direction - center|^2 = radius^2` into a quadratic
/// in `t` and keeps each root independently iff it is positive, so the
/// result holds 0, 1, or 2 hits in ascending distance. A tangent ray
/// contributes its single root under the same filter. Normals point
/// outward from the center.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Result<Vec<Hitpoint>> {
    let oc = ray.origin - sphere.center;
    let d = &ray.direction;

    let a = d.dot(d);
    let b = 2.0 * oc.dot(d);
    let c = oc.dot(&oc) - sphere.radius * sphere.radius;

    let mut hits = Vec::new();
    for t in quadratic_roots(a, b, c) {
        if t <= 0.0 {
            continue;
        }

        let point = ray.at(t);
        let normal = (point - sphere.center).normalize();
        let uv = sphere_uv(&normal);
        let material = sphere.texture.material(uv.x, uv.y);
        hits.push(Hitpoint {
            distance: t,
            normal,
            material,
        });
    }

    if hits.len() > 2 {
        return Err(TraceError::InvariantViolation(
            "sphere intersection produced more than two surviving roots",
        ));
    }

    Ok(hits)
}

/// Spherical (u, v) parameters for an outward unit normal.
///
/// `u` is the azimuth `atan2(x, z)` wrapped into `[0, 2π)` and scaled to
/// `[0, 1)`; `v` runs from 0 at the south pole to 1 at the north pole.
fn sphere_uv(normal: &Vec3) -> Point2 {
    let theta = normal.y.clamp(-1.0, 1.0).acos();
    let phi = normal.x.atan2(normal.z);
    let phi = if phi < 0.0 { phi + 2.0 * PI } else { phi };
    Point2::new(phi / (2.0 * PI), 1.0 - theta / PI)
}

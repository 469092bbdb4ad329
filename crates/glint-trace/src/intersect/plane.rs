//! Ray-plane intersection (closed-form).

use crate::ray::{Hitpoint, Ray};
use glint_math::EPSILON;
use glint_shape::Plane;

/// Intersect a ray with an infinite plane.
///
/// Returns `Some(hit)` unless the ray is parallel to the plane or the
/// intersection lies behind the ray origin. Both faces are renderable, so
/// there is no back-face culling on the sign of the incidence angle, and
/// the reported normal is the stored one, never flipped toward the ray.
///
/// Texture coordinates come from the world x and z of the hit point, each
/// wrapped modulo 1 and taken absolute; the coordinate along the plane's
/// up axis is ignored. Oblique planes therefore stretch their texture, a
/// known limitation of this parameterization.
pub fn intersect_plane(ray: &Ray, plane: &Plane) -> Option<Hitpoint> {
    let normal = plane.normal.as_ref();
    let rdn = ray.direction.dot(normal);

    // Ray is parallel to the plane
    if rdn.abs() < EPSILON {
        return None;
    }

    let t = (plane.origin - ray.origin).dot(normal) / rdn;

    // Intersection is behind the ray origin
    if t < 0.0 {
        return None;
    }

    let point = ray.at(t);
    let u = (point.x % 1.0).abs();
    let v = (point.z % 1.0).abs();
    let material = plane.texture.material(u, v);

    Some(Hitpoint {
        distance: t,
        normal: *normal,
        material,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::{Point3, Vec3};
    use glint_shape::{Material, Rgb, Texture};

    fn floor_plane(texture: Texture) -> Plane {
        Plane::new(Point3::origin(), Vec3::y(), texture).unwrap()
    }

    fn gray() -> Texture {
        Texture::Uniform(Material::matte(Rgb::splat(0.5)))
    }

    #[test]
    fn test_perpendicular_hit() {
        let plane = floor_plane(gray());
        let ray = Ray::new(Point3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = intersect_plane(&ray, &plane).unwrap();
        assert!((hit.distance - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_parallel_miss() {
        let plane = floor_plane(gray());
        let ray = Ray::new(Point3::new(0.0, 5.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(intersect_plane(&ray, &plane).is_none());
    }

    #[test]
    fn test_behind_origin_miss() {
        let plane = floor_plane(gray());
        let ray = Ray::new(Point3::new(0.0, -5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(intersect_plane(&ray, &plane).is_none());
    }

    #[test]
    fn test_normal_not_flipped_toward_ray() {
        let plane = floor_plane(gray());
        // Approaching from below: the stored +Y normal is still reported.
        let ray = Ray::new(Point3::new(0.0, -5.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        let hit = intersect_plane(&ray, &plane).unwrap();
        assert!((hit.normal.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_in_direction_units() {
        let plane = floor_plane(gray());
        // Direction of length 2: the same geometric hit is at half the t.
        let ray = Ray::new(Point3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -2.0, 0.0));
        let hit = intersect_plane(&ray, &plane).unwrap();
        assert!((hit.distance - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_texture_coordinates_wrap() {
        let even = Material::matte(Rgb::splat(1.0));
        let odd = Material::matte(Rgb::splat(0.0));
        let checker = Texture::Checker {
            even,
            odd,
            scale: 0.5,
        };
        let plane = floor_plane(checker);

        // Hits at world (0.25, 0, 0.75) and (7.25, 0, 3.75) wrap to the
        // same (u, v) = (0.25, 0.75) and must resolve the same material.
        let down = Vec3::new(0.0, -1.0, 0.0);
        let a = intersect_plane(&Ray::new(Point3::new(0.25, 1.0, 0.75), down), &plane).unwrap();
        let b = intersect_plane(&Ray::new(Point3::new(7.25, 1.0, 3.75), down), &plane).unwrap();
        assert_eq!(a.material, b.material);
        assert_eq!(a.material, checker.material(0.25, 0.75));
    }

    #[test]
    fn test_negative_coordinates_take_absolute_remainder() {
        let checker = Texture::Checker {
            even: Material::matte(Rgb::splat(1.0)),
            odd: Material::matte(Rgb::splat(0.0)),
            scale: 0.5,
        };
        let plane = floor_plane(checker);
        let down = Vec3::new(0.0, -1.0, 0.0);
        // x = -0.75 has remainder -0.75, so u = 0.75 (not the Euclidean 0.25).
        let hit = intersect_plane(&Ray::new(Point3::new(-0.75, 1.0, 0.25), down), &plane).unwrap();
        assert_eq!(hit.material, checker.material(0.75, 0.25));
    }
}

#![warn(missing_docs)]

//! Shape construction and the CSG shape tree for the glint intersection
//! core.
//!
//! Shapes are built once through validating constructors and are immutable
//! afterwards. Primitives carry their texture; composites own their two
//! children and the boolean operator combining them. The tree is a plain
//! sum type so the intersectors dispatch with an exhaustive `match`.

use glint_math::{Dir3, Point3, Transform, Vec3, EPSILON};

mod error;
mod material;
mod texture;

pub use error::{Result, ShapeError};
pub use material::{Material, Rgb};
pub use texture::Texture;

// =============================================================================
// Boolean operators
// =============================================================================

/// The boolean operator attached to a composite shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsgOp {
    /// Points inside either operand.
    Union,
    /// Points inside the left operand but not the right.
    Subtraction,
    /// Points inside both operands.
    Intersection,
}

impl std::fmt::Display for CsgOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CsgOp::Union => "union",
            CsgOp::Subtraction => "subtraction",
            CsgOp::Intersection => "intersection",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Primitives
// =============================================================================

/// An infinite plane defined by a point on it and its normal.
///
/// Both faces are renderable; the stored normal is what hit queries report,
/// regardless of which side the ray approaches from.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// A point on the plane.
    pub origin: Point3,
    /// Unit normal, fixed at construction.
    pub normal: Dir3,
    /// Texture sampled at the hit point.
    pub texture: Texture,
}

impl Plane {
    /// Create a plane through `origin` facing along `up`.
    ///
    /// Fails with [`ShapeError::InvalidShape`] if `up` has zero magnitude.
    /// The normal is normalized once here so hit queries can return it
    /// as stored.
    pub fn new(origin: Point3, up: Vec3, texture: Texture) -> Result<Self> {
        if up.norm() < EPSILON {
            return Err(ShapeError::InvalidShape(
                "plane normal has zero magnitude".into(),
            ));
        }
        Ok(Self {
            origin,
            normal: Dir3::new_normalize(up),
            texture,
        })
    }

    /// This plane rigidly placed by `t`.
    pub fn transform(&self, t: &Transform) -> Self {
        Self {
            origin: t.apply_point(&self.origin),
            normal: Dir3::new_normalize(t.apply_vec(self.normal.as_ref())),
            texture: self.texture,
        }
    }
}

/// A sphere defined by center and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Point3,
    /// Radius, strictly positive.
    pub radius: f64,
    /// Texture sampled in spherical coordinates.
    pub texture: Texture,
}

impl Sphere {
    /// Create a sphere.
    ///
    /// Fails with [`ShapeError::NonPositiveSize`] if `radius <= 0`.
    pub fn new(center: Point3, radius: f64, texture: Texture) -> Result<Self> {
        if radius <= 0.0 {
            return Err(ShapeError::NonPositiveSize(format!(
                "sphere radius must be positive, got {radius}"
            )));
        }
        Ok(Self {
            center,
            radius,
            texture,
        })
    }

    /// This sphere rigidly placed by `t`. The radius is unchanged.
    pub fn transform(&self, t: &Transform) -> Self {
        Self {
            center: t.apply_point(&self.center),
            radius: self.radius,
            texture: self.texture,
        }
    }
}

/// A triangle defined by three vertices.
///
/// The geometric normal follows the `(b - a) × (c - a)` winding. Triangles
/// carry a single constant material over their whole surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub a: Point3,
    /// Second vertex.
    pub b: Point3,
    /// Third vertex.
    pub c: Point3,
    /// Texture; always uniform for a triangle.
    pub texture: Texture,
}

impl Triangle {
    /// Create a triangle from three vertices and its material.
    ///
    /// Fails with [`ShapeError::NonPositiveSize`] if any two vertices
    /// coincide. The material is wrapped in a uniform texture.
    pub fn new(a: Point3, b: Point3, c: Point3, material: Material) -> Result<Self> {
        if (b - a).norm() < EPSILON || (c - a).norm() < EPSILON || (c - b).norm() < EPSILON {
            return Err(ShapeError::NonPositiveSize(
                "triangle vertices coincide".into(),
            ));
        }
        Ok(Self {
            a,
            b,
            c,
            texture: Texture::Uniform(material),
        })
    }

    /// This triangle rigidly placed by `t`.
    pub fn transform(&self, t: &Transform) -> Self {
        Self {
            a: t.apply_point(&self.a),
            b: t.apply_point(&self.b),
            c: t.apply_point(&self.c),
            texture: self.texture,
        }
    }
}

// =============================================================================
// Composites and the shape tree
// =============================================================================

/// A boolean combination of two shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    /// Left operand.
    pub left: Box<Shape>,
    /// Right operand.
    pub right: Box<Shape>,
    /// Operator combining the operands.
    pub op: CsgOp,
}

/// A shape: a primitive or a boolean combination of shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Infinite plane.
    Plane(Plane),
    /// Sphere.
    Sphere(Sphere),
    /// Triangle.
    Triangle(Triangle),
    /// Boolean combination of two shapes.
    Composite(Composite),
}

impl Shape {
    /// Combine with `other` into a union composite.
    pub fn union(self, other: Shape) -> Shape {
        Shape::compose(self, other, CsgOp::Union)
    }

    /// Combine with `other` into a subtraction composite (`self - other`).
    pub fn subtraction(self, other: Shape) -> Shape {
        Shape::compose(self, other, CsgOp::Subtraction)
    }

    /// Combine with `other` into an intersection composite.
    pub fn intersection(self, other: Shape) -> Shape {
        Shape::compose(self, other, CsgOp::Intersection)
    }

    /// Combine two shapes under `op`. Any two shapes may be combined; no
    /// validation is performed.
    pub fn compose(left: Shape, right: Shape, op: CsgOp) -> Shape {
        Shape::Composite(Composite {
            left: Box::new(left),
            right: Box::new(right),
            op,
        })
    }

    /// This shape rigidly placed by `t`, rebuilding the whole tree.
    pub fn transform(&self, t: &Transform) -> Shape {
        match self {
            Shape::Plane(p) => Shape::Plane(p.transform(t)),
            Shape::Sphere(s) => Shape::Sphere(s.transform(t)),
            Shape::Triangle(tri) => Shape::Triangle(tri.transform(t)),
            Shape::Composite(c) => Shape::Composite(Composite {
                left: Box::new(c.left.transform(t)),
                right: Box::new(c.right.transform(t)),
                op: c.op,
            }),
        }
    }
}

impl From<Plane> for Shape {
    fn from(p: Plane) -> Self {
        Shape::Plane(p)
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self {
        Shape::Sphere(s)
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}

impl From<Composite> for Shape {
    fn from(c: Composite) -> Self {
        Shape::Composite(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn tex() -> Texture {
        Texture::Uniform(Material::matte(Rgb::splat(0.8)))
    }

    #[test]
    fn test_plane_rejects_zero_normal() {
        let result = Plane::new(Point3::origin(), Vec3::zeros(), tex());
        assert!(matches!(result, Err(ShapeError::InvalidShape(_))));
    }

    #[test]
    fn test_plane_normalizes_normal() {
        let plane = Plane::new(Point3::origin(), Vec3::new(0.0, 5.0, 0.0), tex()).unwrap();
        assert!((plane.normal.as_ref().norm() - 1.0).abs() < 1e-12);
        assert!((plane.normal.as_ref().y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_rejects_zero_radius() {
        let result = Sphere::new(Point3::origin(), 0.0, tex());
        assert!(matches!(result, Err(ShapeError::NonPositiveSize(_))));
    }

    #[test]
    fn test_sphere_rejects_negative_radius() {
        let result = Sphere::new(Point3::origin(), -1.0, tex());
        assert!(matches!(result, Err(ShapeError::NonPositiveSize(_))));
    }

    #[test]
    fn test_triangle_rejects_coincident_vertices() {
        let m = Material::matte(Rgb::splat(0.5));
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let result = Triangle::new(a, b, a, m);
        assert!(matches!(result, Err(ShapeError::NonPositiveSize(_))));
    }

    #[test]
    fn test_triangle_wraps_material_in_uniform_texture() {
        let m = Material::matte(Rgb::new(0.1, 0.2, 0.3));
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            m,
        )
        .unwrap();
        assert_eq!(tri.texture.material(0.7, 0.2), m);
    }

    #[test]
    fn test_composites_accept_any_operands() {
        let s1: Shape = Sphere::new(Point3::origin(), 1.0, tex()).unwrap().into();
        let s2: Shape = Sphere::new(Point3::new(3.0, 0.0, 0.0), 1.0, tex())
            .unwrap()
            .into();
        let p: Shape = Plane::new(Point3::origin(), Vec3::y(), tex())
            .unwrap()
            .into();

        // Composites nest freely, including composites of composites.
        let nested = s1.union(s2).intersection(p.clone()).subtraction(p);
        match nested {
            Shape::Composite(c) => assert_eq!(c.op, CsgOp::Subtraction),
            _ => panic!("expected a composite"),
        }
    }

    #[test]
    fn test_transform_places_whole_tree() {
        let s1: Shape = Sphere::new(Point3::origin(), 1.0, tex()).unwrap().into();
        let s2: Shape = Sphere::new(Point3::new(2.0, 0.0, 0.0), 1.0, tex())
            .unwrap()
            .into();
        let moved = s1.union(s2).transform(&Transform::translation(0.0, 5.0, 0.0));

        match moved {
            Shape::Composite(c) => {
                match (*c.left, *c.right) {
                    (Shape::Sphere(l), Shape::Sphere(r)) => {
                        assert!((l.center.y - 5.0).abs() < 1e-12);
                        assert!((r.center.x - 2.0).abs() < 1e-12);
                        assert!((r.center.y - 5.0).abs() < 1e-12);
                        assert!((l.radius - 1.0).abs() < 1e-12);
                    }
                    _ => panic!("expected sphere children"),
                }
            }
            _ => panic!("expected a composite"),
        }
    }

    #[test]
    fn test_transform_rotates_plane_normal() {
        let plane = Plane::new(Point3::origin(), Vec3::y(), tex()).unwrap();
        let rotated = plane.transform(&Transform::rotation_x(PI / 2.0));
        // +Y rotated a quarter turn about X points along +Z
        assert!(rotated.normal.as_ref().y.abs() < 1e-12);
        assert!((rotated.normal.as_ref().z - 1.0).abs() < 1e-12);
    }
}

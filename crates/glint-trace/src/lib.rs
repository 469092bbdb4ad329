#![warn(missing_docs)]

//! Ray intersection and CSG hit merging for the glint renderer.
//!
//! This crate answers one question: where does a ray cross the boundary of
//! a shape? Primitives are solved in closed form; composites recursively
//! intersect their operands and merge the raw hits into the true boundary
//! crossings of the combined solid, treating zero-thickness surfaces
//! (planes, triangles) as always-boundary sheets.
//!
//! # Architecture
//!
//! - [`Ray`] / [`Hitpoint`] - the query and per-hit result values
//! - [`intersect`] - the single entry point, dispatching per shape variant
//! - [`solid`] - solidity classification for the merge's special cases
//! - [`TraceError`] - fail-fast errors for unsupported operators and
//!   broken pipeline invariants
//!
//! # Example
//!
//! ```
//! use glint_math::{Point3, Vec3};
//! use glint_shape::{Material, Rgb, Sphere, Shape, Texture};
//! use glint_trace::{intersect, Ray};
//!
//! let tex = Texture::Uniform(Material::matte(Rgb::splat(0.8)));
//! let near = Sphere::new(Point3::new(0.0, 0.0, 0.0), 2.0, tex).unwrap();
//! let far = Sphere::new(Point3::new(3.0, 0.0, 0.0), 2.0, tex).unwrap();
//! let blob = Shape::from(near).union(far.into());
//!
//! let ray = Ray::new(Point3::new(-10.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
//! let hits = intersect(&ray, &blob).unwrap();
//! assert_eq!(hits.len(), 2);
//! ```

mod csg;
mod error;
pub mod intersect;
mod ray;
pub mod solid;

pub use error::{Result, TraceError};
pub use intersect::intersect;
pub use ray::{Hitpoint, Ray};

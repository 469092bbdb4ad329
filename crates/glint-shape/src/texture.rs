//! Texture lookup: mapping normalized surface coordinates to a material.

use crate::material::Material;

/// A texture maps surface parameter coordinates `(u, v)` to a material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Texture {
    /// Every surface point maps to the same material.
    Uniform(Material),
    /// Alternating tiles of two materials, `scale` units per tile.
    Checker {
        /// Material of the tile containing the parameter origin.
        even: Material,
        /// Material of the alternate tiles.
        odd: Material,
        /// Side length of one tile in parameter units.
        scale: f64,
    },
}

impl Texture {
    /// Resolve the material at parameter coordinates `(u, v)`.
    pub fn material(&self, u: f64, v: f64) -> Material {
        match self {
            Texture::Uniform(material) => *material,
            Texture::Checker { even, odd, scale } => {
                let tile = (u / scale).floor() + (v / scale).floor();
                if (tile as i64).rem_euclid(2) == 0 {
                    *even
                } else {
                    *odd
                }
            }
        }
    }
}

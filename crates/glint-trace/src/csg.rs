//! Merging per-operand hits into boundary crossings of a composite.
//!
//! A composite's children are intersected independently; each raw hit is
//! then either a true boundary of the combined solid or an interior
//! crossing shadowed inside the other operand. The union merge below keeps
//! exactly the former. Subtraction and intersection composites construct
//! fine but their hit testing is deliberately unsupported and reported as
//! [`TraceError::Unimplemented`].

use crate::intersect::intersect;
use crate::ray::{Hitpoint, Ray};
use crate::solid::is_non_solid;
use crate::{Result, TraceError};
use glint_math::EPSILON;
use glint_shape::{Composite, CsgOp, Shape};

/// Which operand of the composite a hit originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    Left,
    Right,
}

/// A raw hit tagged with its operand and originating sub-shape.
struct TaggedHit<'a> {
    hit: Hitpoint,
    branch: Branch,
    shape: &'a Shape,
}

/// Intersect a ray with a composite shape.
pub(crate) fn intersect_composite(ray: &Ray, composite: &Composite) -> Result<Vec<Hitpoint>> {
    match composite.op {
        CsgOp::Union => merge_union(ray, &composite.left, &composite.right),
        op => Err(TraceError::Unimplemented(op)),
    }
}

/// Merge the raw hits of two union operands into the union's boundary.
///
/// Hits are tagged by operand, concatenated left-then-right, and stably
/// sorted by distance, so left hits stay ahead of right hits at equal
/// distance. The scan then walks the front of the sequence:
///
/// 1. a grazing hit, or one whose originating shape is a zero-thickness
///    surface there, is a boundary on its own;
/// 2. two leading hits from the same operand span a lobe lying entirely
///    within that operand: keep both;
/// 3. two leading hits from different operands mean the ray entered the
///    second operand while still inside the first: keep the first entry,
///    find the exit crossing, and drop the shadowed hits between;
/// 4. a lone trailing hit is kept.
///
/// The exit scan of rule 3 restarts per pair, so a pathological sequence
/// alternating operands is merged in quadratic time; hit counts per ray
/// are small in practice (bounded by the primitives along the ray).
fn merge_union(ray: &Ray, left: &Shape, right: &Shape) -> Result<Vec<Hitpoint>> {
    let mut tagged: Vec<TaggedHit> = Vec::new();
    for hit in intersect(ray, left)? {
        tagged.push(TaggedHit {
            hit,
            branch: Branch::Left,
            shape: left,
        });
    }
    for hit in intersect(ray, right)? {
        tagged.push(TaggedHit {
            hit,
            branch: Branch::Right,
            shape: right,
        });
    }
    tagged.sort_by(|a, b| {
        a.hit
            .distance
            .partial_cmp(&b.hit.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut kept = Vec::new();
    let mut i = 0;
    while i < tagged.len() {
        let front = &tagged[i];

        let grazing = ray.direction.dot(&front.hit.normal).abs() < EPSILON;
        if grazing || is_non_solid(ray, &front.hit, front.shape) {
            kept.push(front.hit);
            i += 1;
            continue;
        }

        if i + 1 == tagged.len() {
            kept.push(front.hit);
            break;
        }

        if tagged[i + 1].branch == front.branch {
            kept.push(front.hit);
            kept.push(tagged[i + 1].hit);
            i += 2;
            continue;
        }

        // The leading pair crosses operands: the ray entered the second
        // operand while still inside the first, so everything up to the
        // union's exit is interior. The exit is the later hit of the first
        // adjacent pair whose operands differ: at the earlier hit of that
        // pair the ray is back to a region bounded by one operand, and the
        // later hit leaves it.
        let exit = find_exit(&tagged, i + 2)?;
        kept.push(front.hit);
        kept.push(tagged[exit].hit);
        i = exit + 1;
    }

    Ok(kept)
}

fn find_exit(tagged: &[TaggedHit], start: usize) -> Result<usize> {
    let mut j = start;
    while j + 1 < tagged.len() {
        if tagged[j].branch != tagged[j + 1].branch {
            return Ok(j + 1);
        }
        j += 1;
    }
    Err(TraceError::InvariantViolation(
        "union merge ran out of hits while scanning for an exit crossing",
    ))
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Candidate separating-axis sets.

use sat_math::Vec3;

use super::shape::ConvexPolygon;

/// Cross products with a smaller squared length are treated as degenerate.
const DEGENERATE_CROSS_SQ: f64 = 1e-6;

/// Fills `out` with the axes an axis-aligned mover tests against an obstacle.
///
/// Order: the three world axes, then for every obstacle normal the normal
/// itself followed by its non-degenerate normalized crosses with each world
/// axis.
pub fn build_obstacle_axes(normals: &[Vec3], out: &mut Vec<Vec3>) {
    out.clear();
    out.extend_from_slice(&Vec3::UNIT_AXES);
    for normal in normals {
        out.push(*normal);
        push_crosses(normal, &Vec3::UNIT_AXES, out);
    }
}

/// Fills `out` with the standard separating-axis set for two boxes: both
/// boxes' face normals and every non-degenerate pairwise cross product.
pub fn box_pair_axes<A, B>(a: &A, b: &B, out: &mut Vec<Vec3>)
where
    A: ConvexPolygon + ?Sized,
    B: ConvexPolygon + ?Sized,
{
    out.clear();
    out.extend_from_slice(a.normals());
    out.extend_from_slice(b.normals());
    for na in a.normals() {
        push_crosses(na, b.normals(), out);
    }
}

fn push_crosses(normal: &Vec3, others: &[Vec3], out: &mut Vec<Vec3>) {
    for other in others {
        let cross = normal.cross(other);
        if cross.length_squared() > DEGENERATE_CROSS_SQ {
            out.push(cross.normalize());
        }
    }
}

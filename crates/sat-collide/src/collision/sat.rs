// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Separating-axis collider.
//!
//! A pair is disjoint as soon as one supplied axis separates the projections.
//! Otherwise the axis needing the smallest push is reported, optionally
//! reprojected onto a caller-forced direction.

use sat_math::Vec3;

use super::interval::Interval;
use super::result::{CollisionResult, TimeToCollisionResult};
use super::shape::ConvexPolygon;

/// Responses and projections smaller than this count as separated.
pub const SEPARATION_EPSILON: f64 = 1e-6;

/// Narrow-phase collision test between two convex shapes.
///
/// Implementations are expected to be pure: results depend only on the
/// arguments and are written into the caller-owned result objects.
pub trait ConvexCollider {
    /// Tests `a` against `b` on every axis in `axes`.
    ///
    /// Without `forced_axis` the result holds the axis with the smallest
    /// penetration and its signed offset. With `forced_axis` every candidate
    /// response is reprojected onto that direction and the smallest
    /// reprojected offset is reported along `forced_axis`.
    fn check_if_colliding<A, B>(
        &self,
        a: &A,
        b: &B,
        axes: &[Vec3],
        forced_axis: Option<&Vec3>,
        result: &mut CollisionResult,
    ) where
        A: ConvexPolygon + ?Sized,
        B: ConvexPolygon + ?Sized;

    /// Computes when `a`, moving at `velocity`, first touches the stationary `b`.
    fn time_to_collision<A, B>(
        &self,
        a: &A,
        b: &B,
        velocity: &Vec3,
        axes: &[Vec3],
        result: &mut TimeToCollisionResult,
    ) where
        A: ConvexPolygon + ?Sized,
        B: ConvexPolygon + ?Sized;
}

/// Separating-axis collider.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SatCollider;

impl ConvexCollider for SatCollider {
    fn check_if_colliding<A, B>(
        &self,
        a: &A,
        b: &B,
        axes: &[Vec3],
        forced_axis: Option<&Vec3>,
        result: &mut CollisionResult,
    ) where
        A: ConvexPolygon + ?Sized,
        B: ConvexPolygon + ?Sized,
    {
        let mut best: Option<(Vec3, f64)> = None;
        let mut best_depth = f64::INFINITY;

        for axis in axes {
            let response = compute_collision_response_along_normal(a, b, axis);
            if response.abs() < SEPARATION_EPSILON {
                result.set_not_colliding();
                return;
            }

            match forced_axis {
                None => {
                    let depth = response.abs();
                    if depth < best_depth {
                        best_depth = depth;
                        best = Some((*axis, response));
                    }
                }
                Some(forced) => {
                    let alignment = forced.dot(axis);
                    if alignment.abs() < SEPARATION_EPSILON {
                        continue;
                    }
                    let offset = response / alignment;
                    let depth = offset.abs();
                    if depth < best_depth {
                        best_depth = depth;
                        best = Some((*forced, offset));
                    }
                }
            }
        }

        match best {
            Some((axis, offset)) => result.set_colliding(axis, offset),
            None => result.set_not_colliding(),
        }
    }

    fn time_to_collision<A, B>(
        &self,
        a: &A,
        b: &B,
        velocity: &Vec3,
        axes: &[Vec3],
        result: &mut TimeToCollisionResult,
    ) where
        A: ConvexPolygon + ?Sized,
        B: ConvexPolygon + ?Sized,
    {
        result.set_initially_colliding();

        let mut latest: Option<(f64, Vec3)> = None;
        for axis in axes {
            let t = compute_time_to_collision_along_normal(a, b, velocity, axis);
            if t.is_infinite() {
                result.set_never_colliding();
                return;
            }
            if t != 0.0 && latest.is_none_or(|(best, _)| t > best) {
                latest = Some((t, *axis));
            }
        }

        if let Some((t, axis)) = latest {
            result.set_collides_at(t, axis);
        }
    }
}

/// Signed response moving `a` out of `b` along `normal`, `0.0` when separated.
#[must_use]
pub fn compute_collision_response_along_normal<A, B>(a: &A, b: &B, normal: &Vec3) -> f64
where
    A: ConvexPolygon + ?Sized,
    B: ConvexPolygon + ?Sized,
{
    let pa = a.projection_along_axis(normal);
    let pb = b.projection_along_axis(normal);
    Interval::compute_collision_response(&pa, &pb, 0.0)
}

/// Time for `a` moving at `velocity` to reach `b` along `normal`.
///
/// `0.0` when the projections already overlap, `f64::INFINITY` when they
/// never will.
#[must_use]
pub fn compute_time_to_collision_along_normal<A, B>(a: &A, b: &B, velocity: &Vec3, normal: &Vec3) -> f64
where
    A: ConvexPolygon + ?Sized,
    B: ConvexPolygon + ?Sized,
{
    let pa = a.projection_along_axis(normal);
    let pb = b.projection_along_axis(normal);
    Interval::compute_collision_time(&pa, &pb, velocity.dot(normal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::shape::TransformedBox;
    use crate::types::aabb::Aabb;

    fn cube(min: [f64; 3], max: [f64; 3]) -> TransformedBox {
        TransformedBox::from_aabb(&Aabb::new(min.into(), max.into()), None)
    }

    #[test]
    fn empty_axis_set_is_not_colliding() {
        let a = cube([0.0; 3], [1.0; 3]);
        let mut r = CollisionResult::new();
        r.set_colliding(Vec3::UNIT_X, 1.0);
        SatCollider.check_if_colliding(&a, &a, &[], None, &mut r);
        assert!(!r.is_colliding());
    }

    #[test]
    fn forced_axis_reprojects_smallest_response() {
        // B overlaps A's top by 0.1 and its right side by 0.2.
        let a = cube([0.0; 3], [1.0; 3]);
        let b = cube([0.8, 0.9, 0.0], [2.0, 2.0, 1.0]);
        let mut r = CollisionResult::new();
        SatCollider.check_if_colliding(&a, &b, &Vec3::UNIT_AXES, Some(&Vec3::UNIT_Y), &mut r);
        assert!(r.is_colliding());
        assert_eq!(r.collision_axis(), Ok(Vec3::UNIT_Y));
        let offset = r.penetration_offset().unwrap_or_default();
        assert!((offset + 0.1).abs() < 1e-9, "offset {offset}");
    }

    #[test]
    fn forced_axis_orthogonal_to_every_axis_is_not_colliding() {
        let a = cube([0.0; 3], [1.0; 3]);
        let mut r = CollisionResult::new();
        SatCollider.check_if_colliding(&a, &a, &[Vec3::UNIT_X], Some(&Vec3::UNIT_Y), &mut r);
        assert!(!r.is_colliding());
    }

    #[test]
    fn time_to_collision_reports_bottleneck_axis() {
        // Gap of 1 along X and 0.5 along Y; diagonal velocity reaches Y first.
        let a = cube([0.0; 3], [1.0; 3]);
        let b = cube([2.0, 1.5, 0.0], [3.0, 2.5, 1.0]);
        let mut r = TimeToCollisionResult::new();
        SatCollider.time_to_collision(&a, &b, &Vec3::new(1.0, 1.0, 0.0), &Vec3::UNIT_AXES, &mut r);
        assert_eq!(r.time_to_collision(), Ok(1.0));
        assert_eq!(r.collision_axis(), Ok(Vec3::UNIT_X));
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Convex shapes: arbitrary point clouds and the in-place transformed box.

use sat_math::{Mat4, Vec3};

use super::interval::Interval;
use crate::types::aabb::Aabb;

/// A convex polyhedron exposed as a point cloud plus candidate face normals.
///
/// Implementors guarantee at least one point. Normals need not be unique or
/// outward-facing; they are only used as separating-axis candidates.
pub trait ConvexPolygon {
    /// Vertex positions.
    fn points(&self) -> &[Vec3];

    /// Face normals used as candidate separating axes.
    fn normals(&self) -> &[Vec3];

    /// Opaque id of the thing this shape belongs to, if any.
    fn owner(&self) -> Option<u64> {
        None
    }

    /// Projects every vertex onto `axis` and returns the covered range.
    ///
    /// `axis` is not normalized here; callers pass unit vectors when they need
    /// metric distances.
    fn projection_along_axis(&self, axis: &Vec3) -> Interval {
        let mut out = Interval::empty();
        for p in self.points() {
            out.include(p.dot(axis));
        }
        out
    }

    /// Tight AABB around the vertices.
    fn enclosing_aabb(&self) -> Aabb {
        Aabb::from_points(self.points())
    }

    /// Mean of the vertices, or the origin for a shape without any.
    fn center(&self) -> Vec3 {
        let points = self.points();
        if points.is_empty() {
            return Vec3::ZERO;
        }
        let sum = points.iter().fold(Vec3::ZERO, |acc, p| acc.add(p));
        #[allow(clippy::cast_precision_loss)]
        let n = points.len() as f64;
        sum.scale(1.0 / n)
    }
}

impl<T: ConvexPolygon + ?Sized> ConvexPolygon for &T {
    fn points(&self) -> &[Vec3] {
        (**self).points()
    }

    fn normals(&self) -> &[Vec3] {
        (**self).normals()
    }

    fn owner(&self) -> Option<u64> {
        (**self).owner()
    }
}

/// Owned general convex shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexShape {
    points: Vec<Vec3>,
    normals: Vec<Vec3>,
    owner: Option<u64>,
}

impl ConvexShape {
    /// Builds a shape from its vertices and face normals.
    ///
    /// # Panics
    /// Panics if `points` is empty.
    #[must_use]
    pub fn new(points: Vec<Vec3>, normals: Vec<Vec3>) -> Self {
        assert!(!points.is_empty(), "convex shape requires at least one point");
        Self {
            points,
            normals,
            owner: None,
        }
    }

    /// Tags the shape with an owner id.
    #[must_use]
    pub fn with_owner(mut self, owner: u64) -> Self {
        self.owner = Some(owner);
        self
    }
}

impl ConvexPolygon for ConvexShape {
    fn points(&self) -> &[Vec3] {
        &self.points
    }

    fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    fn owner(&self) -> Option<u64> {
        self.owner
    }
}

/// A box as eight corners and three face normals, optionally transformed.
///
/// Fixed-size storage so one instance can be rebuilt in place for every
/// obstacle a resolver visits.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformedBox {
    points: [Vec3; 8],
    normals: [Vec3; 3],
    owner: Option<u64>,
}

impl TransformedBox {
    /// Builds the box covering `aabb`, transformed by `transform` when given.
    #[must_use]
    pub fn from_aabb(aabb: &Aabb, transform: Option<&Mat4>) -> Self {
        let mut out = Self::unit_cube();
        out.set_from_aabb(aabb, transform);
        out
    }

    /// The untransformed unit cube.
    #[must_use]
    pub fn unit_cube() -> Self {
        Self {
            points: Aabb::unit_cube().corners(),
            normals: Vec3::UNIT_AXES,
            owner: None,
        }
    }

    /// Tags the box with an owner id.
    #[must_use]
    pub fn with_owner(mut self, owner: u64) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Replaces the owner id.
    pub fn set_owner(&mut self, owner: Option<u64>) {
        self.owner = owner;
    }

    /// Rebuilds this box in place from `aabb` and an optional transform.
    ///
    /// Corners go through the full transform. Normals go through its linear
    /// part and are renormalized so projections stay in world units.
    pub fn set_from_aabb(&mut self, aabb: &Aabb, transform: Option<&Mat4>) -> &mut Self {
        self.points = aabb.corners();
        self.normals = Vec3::UNIT_AXES;
        if let Some(m) = transform {
            for p in &mut self.points {
                *p = m.transform_point(p);
            }
            for n in &mut self.normals {
                *n = m.transform_direction(n).normalize();
            }
        }
        self
    }
}

impl Default for TransformedBox {
    fn default() -> Self {
        Self::unit_cube()
    }
}

impl ConvexPolygon for TransformedBox {
    fn points(&self) -> &[Vec3] {
        &self.points
    }

    fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    fn owner(&self) -> Option<u64> {
        self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_4;

    #[test]
    fn projection_spans_all_points() {
        let shape = ConvexShape::new(
            vec![Vec3::new(-1.0, 0.0, 0.0), Vec3::new(3.0, 1.0, 0.0)],
            vec![Vec3::UNIT_X],
        );
        assert_eq!(shape.projection_along_axis(&Vec3::UNIT_X), Interval::new(-1.0, 3.0));
        assert_eq!(shape.projection_along_axis(&Vec3::UNIT_Y), Interval::new(0.0, 1.0));
    }

    struct Hollow;

    impl ConvexPolygon for Hollow {
        fn points(&self) -> &[Vec3] {
            &[]
        }

        fn normals(&self) -> &[Vec3] {
            &[]
        }
    }

    #[test]
    fn center_of_pointless_shape_is_origin() {
        assert_eq!(Hollow.center(), Vec3::ZERO);
    }

    #[test]
    fn rotated_box_normals_stay_unit_length() {
        let m = Mat4::rotation_y(FRAC_PI_4).multiply(&Mat4::scale(3.0, 1.0, 2.0));
        let b = TransformedBox::from_aabb(&Aabb::unit_cube(), Some(&m));
        for n in b.normals() {
            assert!((n.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn rebuilding_in_place_replaces_previous_geometry() {
        let mut b = TransformedBox::from_aabb(&Aabb::unit_cube(), Some(&Mat4::translation(5.0, 0.0, 0.0)));
        b.set_from_aabb(&Aabb::from_bounds(0.0, 0.0, 0.0, 2.0, 2.0, 2.0), None);
        assert_eq!(b.enclosing_aabb(), Aabb::from_bounds(0.0, 0.0, 0.0, 2.0, 2.0, 2.0));
        assert_eq!(b.center().to_array(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn owner_passes_through_references() {
        let b = TransformedBox::unit_cube().with_owner(7);
        let r = &b;
        assert_eq!(ConvexPolygon::owner(&r), Some(7));
    }
}

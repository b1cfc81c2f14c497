// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use sat_math::Vec3;

/// Axis-aligned bounding box in world coordinates.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - Values are `f64` and represent meters in world space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Constructs an AABB from its minimum and maximum corners.
    ///
    /// # Panics
    /// Panics if any component of `min` is greater than its counterpart in `max`.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        let a = min.to_array();
        let b = max.to_array();
        assert!(
            a[0] <= b[0] && a[1] <= b[1] && a[2] <= b[2],
            "invalid AABB: min > max"
        );
        Self { min, max }
    }

    /// Shorthand for [`Aabb::new`] taking six scalars.
    ///
    /// # Panics
    /// Panics if a minimum exceeds its maximum.
    #[must_use]
    pub fn from_bounds(min_x: f64, min_y: f64, min_z: f64, max_x: f64, max_y: f64, max_z: f64) -> Self {
        Self::new(Vec3::new(min_x, min_y, min_z), Vec3::new(max_x, max_y, max_z))
    }

    /// The unit cube `[0,0,0]-[1,1,1]`.
    #[must_use]
    pub const fn unit_cube() -> Self {
        Self {
            min: Vec3::ZERO,
            max: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Geometric center of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.min.add(&self.max).scale(0.5)
    }

    /// Returns the eight corners in `(x, y, z)` binary order: bit 2 selects
    /// max X, bit 1 max Y, bit 0 max Z.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let [minx, miny, minz] = self.min.to_array();
        let [maxx, maxy, maxz] = self.max.to_array();
        [
            Vec3::new(minx, miny, minz),
            Vec3::new(minx, miny, maxz),
            Vec3::new(minx, maxy, minz),
            Vec3::new(minx, maxy, maxz),
            Vec3::new(maxx, miny, minz),
            Vec3::new(maxx, miny, maxz),
            Vec3::new(maxx, maxy, minz),
            Vec3::new(maxx, maxy, maxz),
        ]
    }

    /// Returns this box moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vec3) -> Self {
        Self {
            min: self.min.add(offset),
            max: self.max.add(offset),
        }
    }

    /// Grows the box toward `displacement` so it covers every position the
    /// box passes through while translating by it.
    ///
    /// Positive components push the max face, negative ones the min face.
    #[must_use]
    pub fn extend(&self, displacement: &Vec3) -> Self {
        let mut min = self.min.to_array();
        let mut max = self.max.to_array();
        for (i, d) in displacement.to_array().into_iter().enumerate() {
            if d > 0.0 {
                max[i] += d;
            } else {
                min[i] += d;
            }
        }
        Self {
            min: Vec3::from(min),
            max: Vec3::from(max),
        }
    }

    /// Returns the bottom slab of the box, `fraction` of its height tall.
    #[must_use]
    pub fn feet(&self, fraction: f64) -> Self {
        let height = self.max.y() - self.min.y();
        Self {
            min: self.min,
            max: self.max.with_y(self.min.y() + fraction * height),
        }
    }

    /// Signed distance from the box surface to `point`.
    ///
    /// Positive outside (Euclidean distance to the nearest surface point),
    /// negative inside (minus the distance to the nearest face).
    #[must_use]
    pub fn signed_distance_to(&self, point: &Vec3) -> f64 {
        let below = self.min.sub(point).to_array();
        let above = point.sub(&self.max).to_array();
        let d = [
            below[0].max(above[0]),
            below[1].max(above[1]),
            below[2].max(above[2]),
        ];
        let outside = Vec3::new(d[0].max(0.0), d[1].max(0.0), d[2].max(0.0)).length();
        let inside = d[0].max(d[1]).max(d[2]).min(0.0);
        outside + inside
    }

    /// Builds the minimal AABB that contains all `points`.
    ///
    /// # Panics
    /// Panics if `points` is empty.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Self {
        assert!(!points.is_empty(), "from_points requires at least one point");
        let (min, max) = points[1..]
            .iter()
            .fold((points[0], points[0]), |(min, max), p| (min.min(p), max.max(p)));
        Self { min, max }
    }
}

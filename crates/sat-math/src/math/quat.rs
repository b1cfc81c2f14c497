// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Mat4, Vec3, EPSILON};

/// Rotation quaternion `w + xi + yj + zk`. Angles are in radians.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quat {
    v: Vec3,
    w: f64,
}

impl Quat {
    /// Creates a quaternion from its `(x, y, z, w)` components.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self {
            v: Vec3::new(x, y, z),
            w,
        }
    }

    /// Returns `[x, y, z, w]`.
    pub fn to_array(self) -> [f64; 4] {
        let [x, y, z] = self.v.to_array();
        [x, y, z, self.w]
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// Axes shorter than `EPSILON` produce the identity.
    pub fn from_axis_angle(axis: Vec3, angle: f64) -> Self {
        let unit = axis.normalize();
        if unit == Vec3::ZERO {
            return Self::identity();
        }
        let (s, c) = (angle * 0.5).sin_cos();
        Self { v: unit.scale(s), w: c }
    }

    /// Hamilton product `self * other`: applies `other` first, then `self`.
    pub fn multiply(&self, other: &Self) -> Self {
        let v = other
            .v
            .scale(self.w)
            .add(&self.v.scale(other.w))
            .add(&self.v.cross(&other.v));
        Self {
            v,
            w: self.w * other.w - self.v.dot(&other.v),
        }
    }

    /// Unit-length copy; degenerate quaternions collapse to the identity.
    pub fn normalize(&self) -> Self {
        let len = (self.v.length_squared() + self.w * self.w).sqrt();
        if len <= EPSILON {
            return Self::identity();
        }
        Self {
            v: self.v.scale(1.0 / len),
            w: self.w / len,
        }
    }

    /// The no-op rotation.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Rotates `p` by this quaternion (normalized first).
    pub fn rotate(&self, p: &Vec3) -> Vec3 {
        let q = self.normalize();
        // p' = p + 2w(v × p) + 2v × (v × p)
        let t = q.v.cross(p).scale(2.0);
        p.add(&t.scale(q.w)).add(&q.v.cross(&t))
    }

    /// Rotation matrix whose columns are the rotated world axes.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_basis(
            &self.rotate(&Vec3::UNIT_X),
            &self.rotate(&Vec3::UNIT_Y),
            &self.rotate(&Vec3::UNIT_Z),
            &Vec3::ZERO,
        )
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f64; 4]> for Quat {
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

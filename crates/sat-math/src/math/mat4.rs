// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Quat, Vec3};

/// Column-major 4×4 affine matrix.
///
/// Places box shapes in a shared frame: corners go through
/// [`Mat4::transform_point`], face normals through
/// [`Mat4::transform_direction`]. The bottom row is never read, so projective
/// matrices are not supported.
///
/// # Examples
/// ```
/// use sat_math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    cols: [[f64; 4]; 4],
}

impl Mat4 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::scale(1.0, 1.0, 1.0)
    }

    /// Builds a translation matrix in meters.
    pub const fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        let mut m = Self::identity();
        m.cols[3] = [tx, ty, tz, 1.0];
        m
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            cols: [
                [sx, 0.0, 0.0, 0.0],
                [0.0, sy, 0.0, 0.0],
                [0.0, 0.0, sz, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Builds the affine matrix whose linear part maps the world axes onto
    /// `x`, `y`, `z` and whose origin moves to `origin`.
    pub fn from_basis(x: &Vec3, y: &Vec3, z: &Vec3, origin: &Vec3) -> Self {
        let col = |v: &Vec3, w: f64| {
            let [a, b, c] = v.to_array();
            [a, b, c, w]
        };
        Self {
            cols: [col(x, 0.0), col(y, 0.0), col(z, 0.0), col(origin, 1.0)],
        }
    }

    /// Rotation of `angle` radians about `axis`; a zero-length axis yields
    /// the identity.
    pub fn rotation_axis_angle(axis: Vec3, angle: f64) -> Self {
        Self::from_quat(&Quat::from_axis_angle(axis, angle))
    }

    /// Rotation about +X by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_basis(&Vec3::UNIT_X, &Vec3::new(0.0, c, s), &Vec3::new(0.0, -s, c), &Vec3::ZERO)
    }

    /// Rotation about +Y by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_basis(&Vec3::new(c, 0.0, -s), &Vec3::UNIT_Y, &Vec3::new(s, 0.0, c), &Vec3::ZERO)
    }

    /// Rotation about +Z by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_basis(&Vec3::new(c, s, 0.0), &Vec3::new(-s, c, 0.0), &Vec3::UNIT_Z, &Vec3::ZERO)
    }

    /// Rotation matrix of a (normalized internally) quaternion.
    pub fn from_quat(q: &Quat) -> Self {
        q.to_mat4()
    }

    /// Creates a matrix from 16 column-major values.
    pub fn new(data: [f64; 16]) -> Self {
        let mut cols = [[0.0; 4]; 4];
        for (i, col) in cols.iter_mut().enumerate() {
            col.copy_from_slice(&data[i * 4..i * 4 + 4]);
        }
        Self { cols }
    }

    /// Returns the 16 values in column-major order.
    pub fn to_array(self) -> [f64; 16] {
        let mut out = [0.0; 16];
        for (chunk, col) in out.chunks_exact_mut(4).zip(self.cols.iter()) {
            chunk.copy_from_slice(col);
        }
        out
    }

    /// Matrix product `self * rhs`.
    ///
    /// # Examples
    /// ```
    /// use sat_math::Mat4;
    /// let b = Mat4::scale(2.0, 3.0, 4.0);
    /// assert_eq!(Mat4::identity().multiply(&b), b);
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut cols = [[0.0; 4]; 4];
        for (out, r) in cols.iter_mut().zip(rhs.cols.iter()) {
            for (row, cell) in out.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.cols[k][row] * r[k]).sum();
            }
        }
        Self { cols }
    }

    /// Maps a point (`w = 1`).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.transform_direction(point).add(&self.origin())
    }

    /// Maps a direction (`w = 0`); translation is ignored.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let [x, y, z] = direction.to_array();
        self.axis(0)
            .scale(x)
            .add(&self.axis(1).scale(y))
            .add(&self.axis(2).scale(z))
    }

    fn axis(&self, i: usize) -> Vec3 {
        let [a, b, c, _] = self.cols[i];
        Vec3::new(a, b, c)
    }

    fn origin(&self) -> Vec3 {
        self.axis(3)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f64; 16]> for Mat4 {
    fn from(value: [f64; 16]) -> Self {
        Self::new(value)
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

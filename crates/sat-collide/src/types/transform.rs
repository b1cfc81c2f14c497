// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use sat_math::{Mat4, Quat, Vec3};

/// Placement of a shape in the common collision frame.
///
/// Applied as scale, then rotation, then translation. The rotation is
/// normalized when the matrix is built, so callers may pass any non-zero
/// quaternion.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Transform {
    const UNIT_SCALE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    /// No translation, no rotation, unit scale.
    #[must_use]
    pub const fn identity() -> Self {
        Self::from_translation(Vec3::ZERO)
    }

    /// Creates a transform from components.
    #[must_use]
    pub const fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Pure translation.
    #[must_use]
    pub const fn from_translation(translation: Vec3) -> Self {
        Self::new(translation, Quat::identity(), Self::UNIT_SCALE)
    }

    /// Translation in meters.
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Orientation.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Per-axis scale.
    #[must_use]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Affine matrix equal to `T * R * S`.
    #[must_use]
    pub fn to_mat4(&self) -> Mat4 {
        let [sx, sy, sz] = self.scale.to_array();
        Mat4::from_basis(
            &self.rotation.rotate(&Vec3::UNIT_X).scale(sx),
            &self.rotation.rotate(&Vec3::UNIT_Y).scale(sy),
            &self.rotation.rotate(&Vec3::UNIT_Z).scale(sz),
            &self.translation,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

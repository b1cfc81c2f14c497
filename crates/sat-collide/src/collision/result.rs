// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Reusable outputs of the discrete and swept collision tests.

use sat_math::Vec3;

use crate::error::CollisionError;

/// Which way along the collision axis the first shape must move to separate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CollisionDirection {
    /// Move along `+axis`.
    SameAsAxis,
    /// Move along `-axis`.
    OppositeOfAxis,
}

/// Outcome of an overlap test between two convex shapes.
///
/// Axis and offset are only meaningful while [`Self::is_colliding`] is
/// `true`; reading them otherwise yields [`CollisionError::NotColliding`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CollisionResult {
    colliding: bool,
    axis: Vec3,
    penetration_offset: f64,
}

impl CollisionResult {
    /// A fresh, non-colliding result.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colliding: false,
            axis: Vec3::ZERO,
            penetration_offset: 0.0,
        }
    }

    /// Whether the last test found an overlap.
    #[must_use]
    pub fn is_colliding(&self) -> bool {
        self.colliding
    }

    /// Unit axis of minimum separation.
    ///
    /// # Errors
    /// [`CollisionError::NotColliding`] if the shapes were not colliding.
    pub fn collision_axis(&self) -> Result<Vec3, CollisionError> {
        self.guard()?;
        Ok(self.axis)
    }

    /// Signed distance to move the first shape along the axis to separate.
    ///
    /// # Errors
    /// [`CollisionError::NotColliding`] if the shapes were not colliding.
    pub fn penetration_offset(&self) -> Result<f64, CollisionError> {
        self.guard()?;
        Ok(self.penetration_offset)
    }

    /// Sign of the penetration offset relative to the axis.
    ///
    /// # Errors
    /// [`CollisionError::NotColliding`] if the shapes were not colliding.
    pub fn direction(&self) -> Result<CollisionDirection, CollisionError> {
        self.guard()?;
        Ok(if self.penetration_offset >= 0.0 {
            CollisionDirection::SameAsAxis
        } else {
            CollisionDirection::OppositeOfAxis
        })
    }

    /// Displacement `axis * offset` that separates the first shape.
    ///
    /// # Errors
    /// [`CollisionError::NotColliding`] if the shapes were not colliding.
    pub fn collision_response(&self) -> Result<Vec3, CollisionError> {
        self.guard()?;
        Ok(self.axis * self.penetration_offset)
    }

    /// Marks the result as colliding along `axis` with the given offset.
    pub fn set_colliding(&mut self, axis: Vec3, penetration_offset: f64) {
        self.colliding = true;
        self.axis = axis;
        self.penetration_offset = penetration_offset;
    }

    /// Marks the result as not colliding.
    pub fn set_not_colliding(&mut self) {
        self.colliding = false;
    }

    fn guard(&self) -> Result<(), CollisionError> {
        if self.colliding {
            Ok(())
        } else {
            Err(CollisionError::NotColliding)
        }
    }
}

impl Default for CollisionResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a time-to-collision query.
///
/// Exactly one of three states holds: initially colliding (`time == 0`),
/// never colliding (`time == ∞`), or colliding later along [`Self::collision_axis`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TimeToCollisionResult {
    initially_colliding: bool,
    time: f64,
    axis: Vec3,
}

impl TimeToCollisionResult {
    /// A result in the "initially colliding" state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initially_colliding: true,
            time: 0.0,
            axis: Vec3::ZERO,
        }
    }

    /// Whether the shapes already overlapped at `t = 0`.
    #[must_use]
    pub fn is_initially_colliding(&self) -> bool {
        self.initially_colliding
    }

    /// Whether the shapes never meet under the given velocity.
    #[must_use]
    pub fn is_never_colliding(&self) -> bool {
        self.time.is_infinite()
    }

    /// Time of first contact in velocity units.
    ///
    /// # Errors
    /// [`CollisionError::Colliding`] if the shapes already overlapped.
    pub fn time_to_collision(&self) -> Result<f64, CollisionError> {
        if self.initially_colliding {
            return Err(CollisionError::Colliding);
        }
        Ok(self.time)
    }

    /// Axis along which contact first happens.
    ///
    /// # Errors
    /// [`CollisionError::Colliding`] if the shapes already overlapped, or
    /// [`CollisionError::NeverColliding`] if they never meet.
    pub fn collision_axis(&self) -> Result<Vec3, CollisionError> {
        if self.initially_colliding {
            return Err(CollisionError::Colliding);
        }
        if self.is_never_colliding() {
            return Err(CollisionError::NeverColliding);
        }
        Ok(self.axis)
    }

    /// Resets to the "initially colliding" state.
    pub fn set_initially_colliding(&mut self) {
        self.initially_colliding = true;
        self.time = 0.0;
    }

    /// Marks the shapes as never meeting.
    pub fn set_never_colliding(&mut self) {
        self.initially_colliding = false;
        self.time = f64::INFINITY;
    }

    /// Records first contact at `time` along `axis`.
    pub fn set_collides_at(&mut self, time: f64, axis: Vec3) {
        self.initially_colliding = false;
        self.time = time;
        self.axis = axis;
    }
}

impl Default for TimeToCollisionResult {
    fn default() -> Self {
        Self::new()
    }
}

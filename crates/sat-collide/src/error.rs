// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Read-after-check violations on collision result objects.
///
/// Every variant means the caller read a field without first checking the
/// guard flag that makes it meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollisionError {
    /// Axis, offset or direction was read from a non-colliding result.
    #[error("cannot read collision data: shapes are not colliding")]
    NotColliding,
    /// Axis or time was read from a result whose shapes already overlap.
    #[error("cannot read time-to-collision data: shapes are already colliding")]
    Colliding,
    /// Axis was read from a result whose shapes will never collide.
    #[error("cannot read collision axis: shapes will never collide")]
    NeverColliding,
}

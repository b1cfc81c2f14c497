// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the collision layer (transform, AABB).
//!
//! Conventions:
//! - Overlap along an axis is strict; touching faces are not a collision.
//! - Boxes are always expressed in the caller's common coordinate frame.

#[doc = "Axis-aligned bounding boxes (world space)."]
pub mod aabb;
#[doc = "Rigid transforms with non-uniform scale."]
pub mod transform;

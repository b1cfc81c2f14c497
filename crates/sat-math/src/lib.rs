// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! sat-math: double-precision linear algebra for the convex collision core.
//!
//! Everything here is `Copy` and stack-allocated so the collision hot paths
//! can do vector math by value without touching the heap.
#![forbid(unsafe_code)]

/// Vector, matrix, and quaternion primitives.
pub mod math;

pub use math::{Mat4, Quat, Vec3, EPSILON};

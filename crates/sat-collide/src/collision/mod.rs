// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Narrow-phase collision between convex shapes.
//!
//! Shapes are point clouds with candidate face normals ([`shape`]). Overlap
//! and time-to-impact are decided per axis on 1-D projections ([`interval`])
//! and folded into caller-owned result objects ([`result`]) by a
//! [`sat::ConvexCollider`].
//!
//! The caller owns axis sufficiency: [`axes`] builds the usual sets, but the
//! collider tests exactly the axes it is given.

pub mod axes;
pub mod interval;
pub mod result;
pub mod sat;
pub mod shape;
pub mod stream;

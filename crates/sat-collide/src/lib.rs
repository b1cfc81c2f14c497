// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Convex collision for Echo.

This crate provides:
- Axis-aligned bounding boxes (`Aabb`) and rigid transforms (`Transform`).
- Convex shapes and the separating-axis collider (`SatCollider`): overlap
  with an optional forced response axis, and time-to-collision.
- An entity movement resolver with slope and step climbing
  (`EntityCollisionResolver`), tuned through `ResolverConfig`.

Design notes:
- Stateless core: results land in caller-owned result objects; the resolver
  carries only reusable scratch.
- Float64 throughout; the caller supplies the separating-axis set.
- Reading a result field without checking its guard flag is a
  `CollisionError`, never a panic.
"]

/// Narrow-phase collision primitives.
pub mod collision;
mod error;
/// Entity movement resolution.
pub mod resolver;
/// Foundational geometric types.
pub mod types;

pub use collision::interval::Interval;
pub use collision::result::{CollisionDirection, CollisionResult, TimeToCollisionResult};
pub use collision::sat::{ConvexCollider, SatCollider};
pub use collision::shape::{ConvexPolygon, ConvexShape, TransformedBox};
pub use error::CollisionError;
pub use resolver::{ConfigError, EntityCollisionResolver, ResolverConfig};
pub use types::aabb::Aabb;
pub use types::transform::Transform;

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Movement resolution for axis-aligned entities against convex obstacles.

pub mod config;
pub mod entity;

pub use config::{ConfigError, ResolverConfig};
pub use entity::{apply_response, apply_response_one_axis, EntityCollisionResolver};

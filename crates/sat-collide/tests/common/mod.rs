// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use sat_collide::{Aabb, TransformedBox};
use sat_math::Vec3;

/// Absolute tolerance used by the float helpers below.
pub const TOL: f64 = 1e-9;

/// Axis-aligned box from two corners.
pub fn aabb(min: [f64; 3], max: [f64; 3]) -> Aabb {
    Aabb::new(Vec3::from(min), Vec3::from(max))
}

/// Untransformed box shape covering `[min, max]`.
pub fn cube(min: [f64; 3], max: [f64; 3]) -> TransformedBox {
    TransformedBox::from_aabb(&aabb(min, max), None)
}

/// Asserts two scalars agree within [`TOL`].
pub fn approx_eq(a: f64, b: f64) {
    assert!((a - b).abs() <= TOL, "{a} vs {b}");
}

/// Asserts two vectors agree component-wise within [`TOL`].
pub fn approx_eq3(a: Vec3, b: [f64; 3]) {
    let a = a.to_array();
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() <= TOL, "index {i}: {a:?} vs {b:?}");
    }
}

/// Installs a fmt subscriber honouring `RUST_LOG`; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f64::consts::FRAC_PI_2;
use proptest::prelude::*;
use sat_math::math::{self, Mat4, Quat, Vec3};

fn approx_eq3(a: [f64; 3], b: [f64; 3]) {
    const TOL: f64 = 1e-12;
    for i in 0..3 {
        let diff = (a[i] - b[i]).abs();
        assert!(diff <= TOL, "index {i}: {a:?} vs {b:?}, diff={diff}");
    }
}

#[test]
fn vec3_normalize_degenerate_returns_zero() {
    let v = Vec3::new(1e-12, -1e-12, 0.0);
    assert_eq!(v.normalize().to_array(), [0.0, 0.0, 0.0]);
}

#[test]
fn vec3_cross_of_parallel_axes_is_zero() {
    let c = Vec3::UNIT_Y.cross(&Vec3::UNIT_Y.scale(3.0));
    assert_eq!(c.length_squared(), 0.0);
}

#[test]
fn vec3_cross_follows_right_hand_rule() {
    approx_eq3(Vec3::UNIT_X.cross(&Vec3::UNIT_Y).to_array(), [0.0, 0.0, 1.0]);
    approx_eq3(Vec3::UNIT_Y.cross(&Vec3::UNIT_Z).to_array(), [1.0, 0.0, 0.0]);
}

#[test]
fn horizontal_length_ignores_y() {
    let v = Vec3::new(3.0, 100.0, 4.0);
    assert_eq!(v.horizontal_length(), 5.0);
}

#[test]
fn rot_z_maps_x_to_y() {
    let y = Mat4::rotation_z(FRAC_PI_2).transform_direction(&Vec3::UNIT_X);
    approx_eq3(y.to_array(), [0.0, 1.0, 0.0]);
}

#[test]
fn quat_matches_axis_rotation_matrix() {
    let q = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    let a = q.to_mat4().transform_direction(&Vec3::UNIT_Z);
    let b = Mat4::rotation_y(FRAC_PI_2).transform_direction(&Vec3::UNIT_Z);
    approx_eq3(a.to_array(), b.to_array());
}

#[test]
fn rot_x_maps_y_to_z() {
    let z = Mat4::rotation_x(FRAC_PI_2).transform_direction(&Vec3::UNIT_Y);
    approx_eq3(z.to_array(), [0.0, 0.0, 1.0]);
}

#[test]
fn axis_angle_matrix_agrees_with_quat() {
    let axis = Vec3::new(1.0, 2.0, -0.5);
    let a = Mat4::rotation_axis_angle(axis, 0.7).transform_direction(&Vec3::UNIT_X);
    let b = Mat4::from_quat(&Quat::from_axis_angle(axis, 0.7)).transform_direction(&Vec3::UNIT_X);
    approx_eq3(a.to_array(), b.to_array());
    assert!((a.length() - 1.0).abs() < 1e-12);
}

#[test]
fn column_major_layout_round_trips() {
    let t = Mat4::translation(4.0, 5.0, 6.0);
    let raw = t.to_array();
    assert_eq!(&raw[12..15], &[4.0, 5.0, 6.0]);
    assert_eq!(Mat4::from(raw), t);
    assert_eq!(t * Mat4::identity(), t);
}

#[test]
fn quat_identity_properties() {
    let id = Quat::identity();
    assert_eq!(id.multiply(&id).to_array(), id.to_array());
    assert_eq!(id.to_mat4().to_array(), Mat4::identity().to_array());
}

#[test]
fn translation_moves_points_but_not_directions() {
    let t = Mat4::translation(1.0, 2.0, 3.0);
    let p = t.transform_point(&Vec3::ZERO);
    let d = t.transform_direction(&Vec3::UNIT_X);
    approx_eq3(p.to_array(), [1.0, 2.0, 3.0]);
    approx_eq3(d.to_array(), [1.0, 0.0, 0.0]);
}

#[test]
fn deg_rad_roundtrip_basic_angles() {
    for deg in [0.0f64, 45.0, 90.0, 180.0, -90.0] {
        let back = math::rad_to_deg(math::deg_to_rad(deg));
        assert!((back - deg).abs() < 1e-12, "{deg} -> {back}");
    }
}

proptest! {
    #[test]
    fn normalized_vectors_are_unit_or_zero(
        x in -1.0e3f64..1.0e3,
        y in -1.0e3f64..1.0e3,
        z in -1.0e3f64..1.0e3,
    ) {
        let n = Vec3::new(x, y, z).normalize();
        let len = n.length();
        prop_assert!(len == 0.0 || (len - 1.0).abs() < 1e-9);
    }
}

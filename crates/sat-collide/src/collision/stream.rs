// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Batch helper for boxes that share one transform.

use super::shape::TransformedBox;
use crate::types::aabb::Aabb;
use crate::types::transform::Transform;

/// Visits each AABB as a transformed box without allocating.
///
/// `scratch` is rebuilt in place for every element and handed to `visit`; its
/// contents after the call are those of the last element.
pub fn for_each_transformed_box<'a, I, F>(
    aabbs: I,
    transform: &Transform,
    scratch: &mut TransformedBox,
    mut visit: F,
) where
    I: IntoIterator<Item = &'a Aabb>,
    F: FnMut(&TransformedBox),
{
    let m = transform.to_mat4();
    for aabb in aabbs {
        scratch.set_from_aabb(aabb, Some(&m));
        visit(&*scratch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::shape::ConvexPolygon;
    use sat_math::Vec3;

    #[test]
    fn visits_every_box_through_the_transform() {
        let boxes = [
            Aabb::unit_cube(),
            Aabb::from_bounds(2.0, 0.0, 0.0, 3.0, 1.0, 1.0),
        ];
        let t = Transform::from_translation(Vec3::new(0.0, 10.0, 0.0));
        let mut scratch = TransformedBox::default();
        let mut centers = Vec::new();
        for_each_transformed_box(&boxes, &t, &mut scratch, |b| centers.push(b.center().to_array()));
        assert_eq!(centers, vec![[0.5, 10.5, 0.5], [2.5, 10.5, 0.5]]);
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Two-pass movement resolver for an axis-aligned entity.

use sat_math::{math::deg_to_rad, Vec3};
use tracing::{debug, instrument, trace};

use super::config::{validate_slope_angle, ConfigError, ResolverConfig};
use crate::collision::axes::build_obstacle_axes;
use crate::collision::result::CollisionResult;
use crate::collision::sat::{ConvexCollider, SatCollider};
use crate::collision::shape::{ConvexPolygon, TransformedBox};
use crate::types::aabb::Aabb;

/// Simulated vertical velocities below this magnitude are snapped to zero.
const VERTICAL_SNAP: f64 = 1e-8;

/// Adjusts an axis-aligned entity's movement so it does not sink into convex
/// obstacles, letting it walk up slopes and small steps.
///
/// Holds reusable scratch (axis list, obstacle order, swept box, two
/// collision results), so one resolver serves many calls without allocating
/// once its buffers have grown. Use one resolver per thread.
#[derive(Debug, Clone)]
pub struct EntityCollisionResolver<C = SatCollider> {
    collider: C,
    config: ResolverConfig,
    axes: Vec<Vec3>,
    order: Vec<(f64, usize)>,
    entity: TransformedBox,
    natural: CollisionResult,
    forced: CollisionResult,
}

impl EntityCollisionResolver<SatCollider> {
    /// Creates a resolver backed by [`SatCollider`].
    ///
    /// # Errors
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn new(config: ResolverConfig) -> Result<Self, ConfigError> {
        Self::with_collider(SatCollider, config)
    }
}

impl<C: ConvexCollider> EntityCollisionResolver<C> {
    /// Creates a resolver backed by a custom narrow-phase collider.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn with_collider(collider: C, config: ResolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            collider,
            config,
            axes: Vec::new(),
            order: Vec::new(),
            entity: TransformedBox::default(),
            natural: CollisionResult::new(),
            forced: CollisionResult::new(),
        })
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Returns `movement` adjusted so the entity occupying `bounding_box` ends
    /// up touching, not penetrating, `obstacles`.
    ///
    /// Horizontal movement is resolved first (with slope and step climbing),
    /// then the vertical component from the horizontally shifted box.
    /// `step_height` is accepted and not used.
    #[instrument(
        level = "debug",
        skip(self, bounding_box, step_height, obstacles),
        fields(obstacles = obstacles.len())
    )]
    pub fn adjust_entity_movement_for_polygon_collisions<P: ConvexPolygon>(
        &mut self,
        movement: Vec3,
        bounding_box: &Aabb,
        step_height: f64,
        obstacles: &[P],
    ) -> Vec3 {
        let angle = self.config.max_slope_climb_angle_deg;
        let horizontal = self.horizontal_pass(bounding_box, movement, obstacles, angle);
        let shifted = bounding_box.translated(&Vec3::new(horizontal.x(), 0.0, horizontal.z()));
        let adjusted =
            self.adjust_movement_along_one_axis(&shifted, horizontal, obstacles, &Vec3::UNIT_Y, angle);
        debug!(?movement, ?horizontal, ?adjusted, "resolved entity movement");
        adjusted
    }

    /// Resolves the horizontal pass alone, climbing slopes up to
    /// `max_slope_deg` degrees.
    ///
    /// # Errors
    /// [`ConfigError::InvalidSlopeAngle`] if `max_slope_deg` is outside `0..=90`.
    #[instrument(level = "debug", skip(self, bounding_box, obstacles), fields(obstacles = obstacles.len()))]
    pub fn handle_horizontal_collisions<P: ConvexPolygon>(
        &mut self,
        bounding_box: &Aabb,
        velocity: Vec3,
        obstacles: &[P],
        max_slope_deg: f64,
    ) -> Result<Vec3, ConfigError> {
        validate_slope_angle(max_slope_deg)?;
        Ok(self.horizontal_pass(bounding_box, velocity, obstacles, max_slope_deg))
    }

    /// Pushes `velocity` out of every obstacle along `forced_axis` only.
    ///
    /// The entity is swept along `forced_axis` by the velocity's component on
    /// it. `_angle` is accepted for call-site symmetry with the horizontal
    /// pass and is not used.
    #[instrument(level = "trace", skip(self, bounding_box, obstacles), fields(obstacles = obstacles.len()))]
    pub fn adjust_movement_along_one_axis<P: ConvexPolygon>(
        &mut self,
        bounding_box: &Aabb,
        velocity: Vec3,
        obstacles: &[P],
        forced_axis: &Vec3,
        _angle: f64,
    ) -> Vec3 {
        let Self {
            collider,
            axes,
            entity,
            forced,
            ..
        } = self;

        let mut new_velocity = velocity;
        for obstacle in obstacles {
            build_obstacle_axes(obstacle.normals(), axes);
            let sweep = forced_axis.scale(new_velocity.dot(forced_axis));
            entity.set_from_aabb(&bounding_box.extend(&sweep), None);
            collider.check_if_colliding(&*entity, obstacle, axes, Some(forced_axis), forced);
            if let Ok(response) = forced.collision_response() {
                trace!(?response, "one-axis push");
                new_velocity = apply_response(&new_velocity, &response);
            }
        }
        new_velocity
    }

    fn horizontal_pass<P: ConvexPolygon>(
        &mut self,
        bounding_box: &Aabb,
        velocity: Vec3,
        obstacles: &[P],
        max_slope_deg: f64,
    ) -> Vec3 {
        let Self {
            collider,
            config,
            axes,
            order,
            entity,
            natural,
            forced,
        } = self;

        let max_step =
            (velocity.horizontal_length() * deg_to_rad(max_slope_deg).cos()).max(config.min_step);

        order.clear();
        if config.sort_obstacles_by_feet_distance {
            let feet = bounding_box.feet(config.feet_height_fraction);
            order.extend(
                obstacles
                    .iter()
                    .enumerate()
                    .map(|(i, o)| (feet.signed_distance_to(&o.center()), i)),
            );
            order.sort_by(|a, b| a.0.total_cmp(&b.0));
        } else {
            order.extend((0..obstacles.len()).map(|i| (0.0, i)));
        }

        let mut new_velocity = velocity;
        for &(_, index) in &*order {
            let obstacle = &obstacles[index];
            build_obstacle_axes(obstacle.normals(), axes);
            entity.set_from_aabb(&bounding_box.extend(&new_velocity), None);

            collider.check_if_colliding(&*entity, obstacle, axes, None, natural);
            let Ok(natural_response) = natural.collision_response() else {
                continue;
            };

            collider.check_if_colliding(&*entity, obstacle, axes, Some(&Vec3::UNIT_Y), forced);
            let climbed = forced.collision_response().ok().and_then(|up| {
                let mut simulated = apply_response(&new_velocity, &up);
                if simulated.y().abs() < VERTICAL_SNAP {
                    simulated = simulated.with_y(0.0);
                }
                (up.y() >= 0.0 && simulated.y() < max_step).then_some(simulated)
            });

            new_velocity = match climbed {
                Some(simulated) => {
                    trace!(index, y = simulated.y(), max_step, "climbing obstacle");
                    simulated
                }
                None => {
                    trace!(index, ?natural_response, "blocked by obstacle");
                    apply_response(&new_velocity, &natural_response)
                }
            };
        }
        new_velocity
    }
}

/// Folds a collision response into a velocity, component by component.
#[must_use]
pub fn apply_response(velocity: &Vec3, response: &Vec3) -> Vec3 {
    Vec3::new(
        apply_response_one_axis(velocity.x(), response.x()),
        apply_response_one_axis(velocity.y(), response.y()),
        apply_response_one_axis(velocity.z(), response.z()),
    )
}

/// Same signs keep the larger magnitude; otherwise the two are summed.
///
/// Zero has its own sign here, so `(0, r)` and `(v, 0)` always sum.
#[must_use]
pub fn apply_response_one_axis(velocity: f64, response: f64) -> f64 {
    let sv = sign(velocity);
    let sr = sign(response);
    if sv == sr {
        f64::from(sr) * velocity.abs().max(response.abs())
    } else {
        velocity + response
    }
}

fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_axis_same_sign_keeps_larger_magnitude() {
        assert_eq!(apply_response_one_axis(0.5, 0.3), 0.5);
        assert_eq!(apply_response_one_axis(-0.2, -0.7), -0.7);
    }

    #[test]
    fn one_axis_opposite_or_zero_sums() {
        assert_eq!(apply_response_one_axis(0.5, -0.25), 0.25);
        assert_eq!(apply_response_one_axis(0.0, 0.3), 0.3);
        assert_eq!(apply_response_one_axis(0.4, 0.0), 0.4);
        assert_eq!(apply_response_one_axis(0.0, 0.0), 0.0);
    }
}

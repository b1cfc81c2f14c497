// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! One-dimensional projection ranges and the per-axis overlap, response and
//! time-of-impact rules built on them.

/// Velocities with a smaller magnitude than this never close a gap.
pub const VELOCITY_EPSILON: f64 = 1e-6;

/// A 1-D `[min, max]` range, typically a shape's projection onto an axis.
///
/// Projection writes `min ≤ max`; the constructor does not enforce it so the
/// type can also hold the empty seed `[+∞, -∞]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    /// Creates an interval from its bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The empty interval `[+∞, -∞]`; widening it by any value yields that value.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Overwrites both bounds.
    pub fn set(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
    }

    /// Grows the interval to include `value`.
    pub fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// If `a` and `b` overlap (touching counts), writes the shared range into
    /// `out` and returns `true`; otherwise leaves `out` untouched.
    pub fn compute_overlap(a: &Self, b: &Self, out: &mut Self) -> bool {
        let max_of_mins = a.min.max(b.min);
        let min_of_maxs = a.max.min(b.max);
        if max_of_mins <= min_of_maxs {
            out.set(max_of_mins, min_of_maxs);
            true
        } else {
            false
        }
    }

    /// Signed offset that moves `a` out of `b` along this axis, or `0.0` when
    /// they are separated (touching included).
    ///
    /// `velocity_a` widens the push in the direction `a` is travelling, so a
    /// moving interval is treated as its swept range.
    ///
    /// ```
    /// use sat_collide::collision::interval::Interval;
    /// let a = Interval::new(0.8, 1.0);
    /// let b = Interval::new(0.0, 1.0);
    /// assert!((Interval::compute_collision_response(&a, &b, 0.0) - 0.2).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn compute_collision_response(a: &Self, b: &Self, velocity_a: f64) -> f64 {
        let mut push_left = -a.max + b.min;
        let mut push_right = -a.min + b.max;

        if velocity_a > 0.0 {
            push_left -= velocity_a;
        } else {
            push_right -= velocity_a;
        }

        if push_right <= 0.0 || push_left >= 0.0 {
            return 0.0;
        }

        if push_right.abs() < push_left.abs() {
            push_right
        } else {
            push_left
        }
    }

    /// Earliest time at which `a`, moving at `velocity_a`, starts to overlap
    /// the stationary `b`.
    ///
    /// Returns `0.0` if they already overlap (touching counts) and
    /// `f64::INFINITY` if `a` is moving away or moving slower than
    /// [`VELOCITY_EPSILON`].
    #[must_use]
    pub fn compute_collision_time(a: &Self, b: &Self, velocity_a: f64) -> f64 {
        if a.max >= b.min && a.min <= b.max {
            return 0.0;
        }

        if a.min > b.max {
            // `a` is above `b`; it has to travel down.
            if velocity_a <= -VELOCITY_EPSILON {
                (a.min - b.max) / -velocity_a
            } else {
                f64::INFINITY
            }
        } else if velocity_a >= VELOCITY_EPSILON {
            (b.min - a.max) / velocity_a
        } else {
            f64::INFINITY
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

//! Incremental error stepping shared by lines and triangle edges.
//!
//! The stepper follows one coordinate (the *minor* axis) while the caller
//! advances the other (the *major* axis) one unit at a time. All arithmetic
//! is integer: the ideal fractional offset is kept as an error term scaled
//! by `2 * major_extent`.
//!
//! ```text
//! error += 2 * |minor_delta|          each major step
//! while error > major_extent:
//!     minor += sign(minor_delta)
//!     error -= 2 * major_extent
//! ```
//!
//! For lines the minor delta never exceeds the major extent, so the loop body
//! runs at most once per step. A shallow triangle edge walked one scanline at
//! a time can cross several columns per row, hence the loop.

/// Tracks the minor-axis coordinate of a walk along the major axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErrorStepper {
    minor: i32,
    direction: i32,
    error_step: i32,
    major_extent: i32,
    error: i32,
}

impl ErrorStepper {
    /// Start a walk at `minor_start` that must travel `minor_delta` over
    /// `major_extent` unit steps.
    ///
    /// A zero `major_extent` describes a walk that is already complete:
    /// [`step`](Self::step) leaves the minor coordinate where it is.
    pub fn new(minor_start: i32, minor_delta: i32, major_extent: i32) -> Self {
        debug_assert!(major_extent >= 0, "major axis must be normalized first");
        Self {
            minor: minor_start,
            direction: minor_delta.signum(),
            error_step: minor_delta.abs() * 2,
            major_extent,
            error: 0,
        }
    }

    /// Current minor-axis coordinate.
    #[inline]
    pub fn minor(&self) -> i32 {
        self.minor
    }

    /// Advance the major axis by one unit.
    #[inline]
    pub fn step(&mut self) {
        if self.major_extent == 0 {
            return;
        }
        self.error += self.error_step;
        while self.error > self.major_extent {
            self.minor += self.direction;
            self.error -= self.major_extent * 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(minor_start: i32, minor_delta: i32, major_extent: i32) -> Vec<i32> {
        let mut stepper = ErrorStepper::new(minor_start, minor_delta, major_extent);
        let mut trace = Vec::new();
        for _ in 0..=major_extent {
            trace.push(stepper.minor());
            stepper.step();
        }
        trace
    }

    #[test]
    fn half_slope_trace() {
        // dx = 4, dy = 2: the minor axis moves on every second step.
        assert_eq!(walk(0, 2, 4), vec![0, 0, 1, 1, 2]);
    }

    #[test]
    fn negative_delta_walks_down() {
        assert_eq!(walk(10, -2, 4), vec![10, 10, 9, 9, 8]);
    }

    #[test]
    fn zero_extent_holds_position() {
        let mut stepper = ErrorStepper::new(7, 25, 0);
        for _ in 0..5 {
            stepper.step();
            assert_eq!(stepper.minor(), 7);
        }
    }

    #[test]
    fn shallow_walk_moves_several_units_per_step() {
        // 10 columns over 2 rows: 5 per row.
        assert_eq!(walk(0, 10, 2), vec![0, 5, 10]);
    }

    #[test]
    fn ends_exactly_on_target() {
        for extent in 0..12 {
            for delta in -30..=30 {
                if extent == 0 && delta != 0 {
                    continue;
                }
                let trace = walk(3, delta, extent);
                assert_eq!(
                    *trace.last().unwrap(),
                    3 + delta,
                    "delta {delta} over extent {extent}"
                );
            }
        }
    }

    #[test]
    fn stays_within_half_a_unit_of_ideal() {
        let (delta, extent) = (7, 19);
        for (k, minor) in walk(0, delta, extent).into_iter().enumerate() {
            // |minor - k * delta / extent| <= 1/2, scaled by 2 * extent.
            let drift = (2 * minor * extent - 2 * k as i32 * delta).abs();
            assert!(drift <= extent, "step {k}: minor {minor}");
        }
    }
}

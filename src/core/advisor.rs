use serde::{Deserialize, Serialize};

use super::kinematics::{MotionResult, compute_motion};

pub const LEVEL_GROUND_OPTIMAL_DEG: f64 = 45.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimalLaunch {
    pub angle_deg: f64,
    pub range_m: f64,
    pub motion: MotionResult,
}

/// Launch angle with the longest range for the given speed, height and gravity.
///
/// From ground level this is exactly 45 degrees. From a positive height the
/// optimum is `atan(v0 / sqrt(v0^2 + 2*g*h))`, which drops below 45 degrees as
/// the height grows.
pub fn optimal_angle(speed_mps: f64, height_m: f64, gravity_mps2: f64) -> OptimalLaunch {
    let angle_deg = if height_m == 0.0 {
        LEVEL_GROUND_OPTIMAL_DEG
    } else {
        let landing_speed = (speed_mps * speed_mps + 2.0 * gravity_mps2 * height_m).sqrt();
        (speed_mps / landing_speed).atan().to_degrees()
    };

    let motion = compute_motion(speed_mps, angle_deg.to_radians(), height_m, gravity_mps2);
    OptimalLaunch {
        angle_deg,
        range_m: motion.range_m,
        motion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: f64 = 9.81;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn range_at(speed: f64, angle_deg: f64, height: f64) -> f64 {
        compute_motion(speed, angle_deg.to_radians(), height, G).range_m
    }

    #[test]
    fn level_ground_uses_exactly_45_degrees() {
        let best = optimal_angle(20.0, 0.0, G);

        assert_eq!(best.angle_deg, 45.0);
        assert_close(best.range_m, 400.0 / G, 1e-9);
    }

    #[test]
    fn raised_launch_lowers_the_optimal_angle() {
        let best = optimal_angle(20.0, 30.0, G);

        assert!(best.angle_deg < 45.0);
        assert!(best.angle_deg > 0.0);
        assert_eq!(best.range_m, best.motion.range_m);
    }

    #[test]
    fn raised_launch_range_matches_closed_form() {
        // R_max = v0 * sqrt(v0^2 + 2gh) / g
        let (v0, h) = (15.0, 12.0);
        let best = optimal_angle(v0, h, G);

        assert_close(best.range_m, v0 * (v0 * v0 + 2.0 * G * h).sqrt() / G, 1e-9);
    }

    #[test]
    fn beats_neighbouring_angles() {
        let (v0, h) = (25.0, 18.0);
        let best = optimal_angle(v0, h, G);

        for delta in [-5.0, -1.0, -0.5, 0.5, 1.0, 5.0] {
            assert!(best.range_m >= range_at(v0, best.angle_deg + delta, h));
        }
    }

    #[test]
    fn standing_drop_has_zero_optimal_angle() {
        let best = optimal_angle(0.0, 10.0, G);

        assert_eq!(best.angle_deg, 0.0);
        assert_eq!(best.range_m, 0.0);
    }
}

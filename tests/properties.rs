use projectile_calculator::calculator::calculate;
use projectile_calculator::core::advisor::optimal_angle;
use projectile_calculator::core::kinematics::{FlightStatus, compute_motion};
use projectile_calculator::core::params::LaunchParameters;
use projectile_calculator::core::trajectory::{DEFAULT_RESOLUTION, sample_trajectory};

const SPEEDS: [f64; 5] = [0.0, 1.0, 12.5, 47.0, 100.0];
const HEIGHTS: [f64; 4] = [0.0, 0.5, 10.0, 50.0];
const GRAVITIES: [f64; 4] = [0.1, 1.62, 9.81, 20.0];

fn angles(step_deg: f64) -> impl Iterator<Item = f64> {
    let steps = (90.0 / step_deg).round() as usize;
    (0..=steps).map(move |i| i as f64 * step_deg)
}

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "actual={actual}, expected={expected}, tolerance={tolerance}"
    );
}

#[test]
fn horizontal_velocity_is_conserved() {
    for v0 in SPEEDS {
        for h in HEIGHTS {
            for g in GRAVITIES {
                for angle in angles(7.5) {
                    let result = compute_motion(v0, angle.to_radians(), h, g);
                    assert_eq!(result.final_vx, result.v0x);
                    assert!(result.flight_time_s >= 0.0);
                    assert!(result.range_m >= 0.0);
                }
            }
        }
    }
}

#[test]
fn standing_start_on_the_ground_never_flies() {
    for g in GRAVITIES {
        for angle in angles(15.0) {
            let result = compute_motion(0.0, angle.to_radians(), 0.0, g);
            assert_eq!(result.flight_time_s, 0.0);
            assert_eq!(result.flight, FlightStatus::Grounded);
        }
    }
}

#[test]
fn level_launch_conserves_kinetic_energy() {
    for v0 in SPEEDS.into_iter().filter(|v| *v > 0.0) {
        for angle in angles(5.0).filter(|a| *a > 0.0) {
            let result = compute_motion(v0, angle.to_radians(), 0.0, 9.81);
            let before = 0.5 * v0 * v0;
            let after = 0.5 * result.final_speed * result.final_speed;
            assert_close(after, before, 1e-9 * before);
        }
    }
}

#[test]
fn complementary_angles_share_range_on_level_ground() {
    for v0 in SPEEDS {
        for g in GRAVITIES {
            for angle in angles(2.5) {
                let low = compute_motion(v0, angle.to_radians(), 0.0, g).range_m;
                let high = compute_motion(v0, (90.0 - angle).to_radians(), 0.0, g).range_m;
                let scale = v0 * v0 / g;
                assert_close(low, high, 1e-9 * scale.max(1.0));
            }
        }
    }
}

#[test]
fn optimal_angle_beats_every_grid_angle() {
    for v0 in SPEEDS.into_iter().filter(|v| *v > 0.0) {
        for h in HEIGHTS {
            for g in GRAVITIES {
                let best = optimal_angle(v0, h, g);
                for angle in angles(0.5) {
                    let range = compute_motion(v0, angle.to_radians(), h, g).range_m;
                    assert!(
                        best.range_m >= range - 1e-9 * range.max(1.0),
                        "v0={v0} h={h} g={g}: {angle} deg reaches {range}, optimum reaches {}",
                        best.range_m
                    );
                }
            }
        }
    }
}

#[test]
fn sampler_covers_flight_with_fixed_resolution() {
    for v0 in SPEEDS {
        for h in HEIGHTS {
            for angle in angles(15.0) {
                let params = LaunchParameters::new(v0, angle, h, 9.81);
                let result = compute_motion(v0, params.angle_rad(), h, 9.81);
                let plot = sample_trajectory(&params, &result, DEFAULT_RESOLUTION);

                if result.flight_time_s <= 0.0 {
                    assert!(plot.samples.is_empty());
                    continue;
                }

                assert_eq!(plot.samples.len(), DEFAULT_RESOLUTION);
                assert_eq!(plot.samples[0].time_s, 0.0);
                assert_eq!(plot.samples[0].y_m, h);
                let last = plot.samples[DEFAULT_RESOLUTION - 1];
                assert_close(last.time_s, result.flight_time_s, 1e-9);

                let tolerance = 1e-9 * result.apex_height_m.max(1.0);
                for sample in &plot.samples[..DEFAULT_RESOLUTION - 1] {
                    assert!(sample.y_m >= -tolerance, "sample dipped below ground: {sample:?}");
                }
            }
        }
    }
}

#[test]
fn scenario_level_launch_at_45_degrees() {
    let calc = calculate(LaunchParameters::new(20.0, 45.0, 0.0, 9.81), 100, 1.0)
        .expect("valid parameters");

    assert_close(calc.motion.flight_time_s, 2.88, 0.005);
    assert_close(calc.motion.range_m, 40.77, 0.005);
    assert_close(calc.motion.apex_height_m, 10.19, 0.005);
}

#[test]
fn scenario_pure_fall() {
    for angle in [0.0, 33.0, 90.0] {
        let calc = calculate(LaunchParameters::new(0.0, angle, 10.0, 9.81), 100, 1.0)
            .expect("valid parameters");

        assert_close(calc.motion.flight_time_s, 1.428, 0.001);
        assert_eq!(calc.motion.range_m, 0.0);
        assert_eq!(calc.motion.apex_height_m, 10.0);
    }
}

#[test]
fn scenario_horizontal_from_ground() {
    let calc = calculate(LaunchParameters::new(20.0, 0.0, 0.0, 9.81), 100, 1.0)
        .expect("valid parameters");

    assert_eq!(calc.motion.flight_time_s, 0.0);
    assert_eq!(calc.motion.range_m, 0.0);
    assert_eq!(calc.motion.apex_height_m, 0.0);
    assert!(!calc.trajectory.is_plottable());
}

#[test]
fn scenario_straight_up() {
    let calc = calculate(LaunchParameters::new(20.0, 90.0, 0.0, 9.81), 100, 1.0)
        .expect("valid parameters");

    assert_close(calc.motion.range_m, 0.0, 1e-9);
    assert_close(calc.motion.apex_height_m, 20.39, 0.005);
}

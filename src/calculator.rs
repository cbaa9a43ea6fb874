use serde::{Deserialize, Serialize};

use crate::core::advisor::{OptimalLaunch, optimal_angle};
use crate::core::energy::{EnergySummary, energy_summary};
use crate::core::kinematics::{MotionResult, compute_launch};
use crate::core::params::{LaunchParameters, ParameterError};
use crate::core::trajectory::{TrajectoryPlot, sample_trajectory};

/// Everything derived from one set of launch parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub params: LaunchParameters,
    pub motion: MotionResult,
    pub trajectory: TrajectoryPlot,
    pub optimal: OptimalLaunch,
    pub energy: EnergySummary,
}

/// Runs one full computation cycle. Nothing is cached between calls.
pub fn calculate(
    params: LaunchParameters,
    resolution: usize,
    mass_kg: f64,
) -> Result<Calculation, ParameterError> {
    params.validate()?;

    let motion = compute_launch(&params);
    let trajectory = sample_trajectory(&params, &motion, resolution);
    let optimal = optimal_angle(params.speed_mps, params.height_m, params.gravity_mps2);
    let energy = energy_summary(&params, &motion, mass_kg);

    tracing::debug!(
        flight_time_s = motion.flight_time_s,
        range_m = motion.range_m,
        samples = trajectory.samples.len(),
        "computed projectile motion"
    );

    Ok(Calculation {
        params,
        motion,
        trajectory,
        optimal,
        energy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::energy::DEFAULT_MASS_KG;
    use crate::core::trajectory::DEFAULT_RESOLUTION;

    #[test]
    fn default_parameters_produce_full_calculation() {
        let calc = calculate(LaunchParameters::default(), DEFAULT_RESOLUTION, DEFAULT_MASS_KG)
            .expect("defaults are valid");

        assert_eq!(calc.trajectory.samples.len(), DEFAULT_RESOLUTION);
        assert_eq!(calc.optimal.angle_deg, 45.0);
        assert_eq!(calc.optimal.range_m, calc.motion.range_m);
        assert_eq!(calc.energy.total_j, 200.0);
    }

    #[test]
    fn invalid_parameters_are_rejected_before_computing() {
        let err = calculate(
            LaunchParameters::new(10.0, 45.0, -1.0, 9.81),
            DEFAULT_RESOLUTION,
            DEFAULT_MASS_KG,
        )
        .expect_err("negative height");

        assert_eq!(err, ParameterError::NegativeHeight(-1.0));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let params = LaunchParameters::new(33.0, 27.5, 14.0, 3.71);
        let a = calculate(params, 64, 1.0).expect("valid");
        let b = calculate(params, 64, 1.0).expect("valid");
        assert_eq!(a, b);
    }
}

use serde::{Deserialize, Serialize};

use super::kinematics::MotionResult;
use super::params::LaunchParameters;

pub const DEFAULT_MASS_KG: f64 = 1.0;

/// Mechanical energy of the launch for a projectile of `mass_kg`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnergySummary {
    pub mass_kg: f64,
    pub kinetic_j: f64,
    pub potential_j: f64,
    pub total_j: f64,
    /// Kinetic energy at impact; equals `total_j` without drag.
    pub impact_kinetic_j: f64,
}

pub fn energy_summary(
    params: &LaunchParameters,
    result: &MotionResult,
    mass_kg: f64,
) -> EnergySummary {
    let kinetic_j = 0.5 * mass_kg * params.speed_mps * params.speed_mps;
    let potential_j = mass_kg * params.gravity_mps2 * params.height_m;
    EnergySummary {
        mass_kg,
        kinetic_j,
        potential_j,
        total_j: kinetic_j + potential_j,
        impact_kinetic_j: 0.5 * mass_kg * result.final_speed * result.final_speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kinematics::compute_launch;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn default_launch_energy() {
        let params = LaunchParameters::default();
        let energy = energy_summary(&params, &compute_launch(&params), DEFAULT_MASS_KG);

        assert_eq!(energy.kinetic_j, 200.0);
        assert_eq!(energy.potential_j, 0.0);
        assert_eq!(energy.total_j, 200.0);
        assert_close(energy.impact_kinetic_j, 200.0, 1e-9);
    }

    #[test]
    fn raised_launch_converts_potential_energy() {
        let params = LaunchParameters::new(12.0, 35.0, 20.0, 9.81);
        let energy = energy_summary(&params, &compute_launch(&params), 2.5);

        assert_close(energy.potential_j, 2.5 * 9.81 * 20.0, 1e-12);
        assert_close(energy.impact_kinetic_j, energy.total_j, 1e-9 * energy.total_j);
    }
}

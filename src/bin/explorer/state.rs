use projectile_calculator::calculator::{Calculation, calculate};
use projectile_calculator::config::Config;
use projectile_calculator::core::params::{LaunchParameters, ParameterError};

/// Slider values. Sliders work in f32, the calculator in f64.
pub(crate) struct ExplorerState {
    pub(crate) speed_mps: f32,
    pub(crate) angle_deg: f32,
    pub(crate) height_m: f32,
    pub(crate) gravity_mps2: f32,
    pub(crate) show_equations: bool,
    defaults: LaunchParameters,
    resolution: usize,
    mass_kg: f64,
}

/// Config launch values the sliders can actually show.
fn slider_defaults(launch: LaunchParameters) -> LaunchParameters {
    if let Err(err) = launch.check_input_ranges() {
        let clamped = launch.clamped_to_input_ranges();
        tracing::warn!(%err, ?clamped, "config launch defaults outside slider ranges, clamping");
        return clamped;
    }
    launch
}

impl ExplorerState {
    pub(crate) fn new(config: &Config) -> Self {
        let mut state = Self {
            speed_mps: 0.0,
            angle_deg: 0.0,
            height_m: 0.0,
            gravity_mps2: 0.0,
            show_equations: false,
            defaults: slider_defaults(config.launch),
            resolution: config.sampling.resolution,
            mass_kg: config.energy.mass_kg,
        };
        state.reset();
        state
    }

    pub(crate) fn reset(&mut self) {
        self.speed_mps = self.defaults.speed_mps as f32;
        self.angle_deg = self.defaults.angle_deg as f32;
        self.height_m = self.defaults.height_m as f32;
        self.gravity_mps2 = self.defaults.gravity_mps2 as f32;
    }

    pub(crate) fn params(&self) -> LaunchParameters {
        LaunchParameters::new(
            f64::from(self.speed_mps),
            f64::from(self.angle_deg),
            f64::from(self.height_m),
            f64::from(self.gravity_mps2),
        )
    }

    /// Fresh calculation for the current slider values.
    pub(crate) fn calculate(&self) -> Result<Calculation, ParameterError> {
        calculate(self.params(), self.resolution, self.mass_kg)
    }
}

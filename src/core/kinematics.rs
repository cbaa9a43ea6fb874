use serde::{Deserialize, Serialize};

use super::params::LaunchParameters;

/// How the flight time of a [`MotionResult`] came about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightStatus {
    /// The projectile leaves the ground and lands after `flight_time_s > 0`.
    Airborne,
    /// Launched at ground level with no upward velocity: flight time is zero.
    Grounded,
    /// `vy^2 + 2*g*h` was negative, so there is no real landing time.
    NoRealLanding,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionResult {
    pub v0x: f64,
    pub v0y: f64,
    pub flight_time_s: f64,
    pub apex_height_m: f64,
    pub apex_time_s: f64,
    pub range_m: f64,
    pub final_vx: f64,
    pub final_vy: f64,
    pub final_speed: f64,
    pub flight: FlightStatus,
}

impl MotionResult {
    pub fn is_airborne(&self) -> bool {
        self.flight == FlightStatus::Airborne
    }

    /// Horizontal position of the apex.
    pub fn apex_distance_m(&self) -> f64 {
        self.v0x * self.apex_time_s
    }
}

pub fn velocity_components(speed_mps: f64, angle_rad: f64) -> (f64, f64) {
    (speed_mps * angle_rad.cos(), speed_mps * angle_rad.sin())
}

/// Closed-form projectile motion under constant gravity.
///
/// `gravity_mps2` must be strictly positive; it is a divisor and is not
/// checked here (see [`LaunchParameters::validate`]).
pub fn compute_motion(
    speed_mps: f64,
    angle_rad: f64,
    height_m: f64,
    gravity_mps2: f64,
) -> MotionResult {
    let (v0x, v0y) = velocity_components(speed_mps, angle_rad);

    let disc = v0y * v0y + 2.0 * gravity_mps2 * height_m;
    // NaN when disc < 0, g == 0 with v0y == 0, or any input is NaN
    let t_land = (v0y + disc.sqrt()) / gravity_mps2;
    let (flight_time_s, flight) = if t_land > 0.0 {
        (t_land, FlightStatus::Airborne)
    } else if t_land.is_nan() {
        tracing::warn!(
            discriminant = disc,
            gravity = gravity_mps2,
            "no real landing time, reporting zero flight time"
        );
        (0.0, FlightStatus::NoRealLanding)
    } else {
        (0.0, FlightStatus::Grounded)
    };

    let apex_height_m = height_m + (v0y * v0y) / (2.0 * gravity_mps2);
    let apex_time_s = v0y / gravity_mps2;
    let range_m = v0x * flight_time_s;

    let final_vx = v0x;
    let final_vy = v0y - gravity_mps2 * flight_time_s;
    let final_speed = (final_vx * final_vx + final_vy * final_vy).sqrt();

    MotionResult {
        v0x,
        v0y,
        flight_time_s,
        apex_height_m,
        apex_time_s,
        range_m,
        final_vx,
        final_vy,
        final_speed,
        flight,
    }
}

pub fn compute_launch(params: &LaunchParameters) -> MotionResult {
    compute_motion(
        params.speed_mps,
        params.angle_rad(),
        params.height_m,
        params.gravity_mps2,
    )
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EARTH_GRAVITY_MPS2: f64 = 9.81;

/// Closed interval a launch parameter may take in the input widgets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputRange {
    pub name: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl InputRange {
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Nearest value inside the range. Non-finite values fall back to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }

    fn check(&self, value: f64) -> Result<(), ParameterError> {
        if !value.is_finite() {
            return Err(ParameterError::NotFinite { name: self.name });
        }
        if !self.contains(value) {
            return Err(ParameterError::OutOfRange {
                name: self.name,
                value,
                min: self.min,
                max: self.max,
                unit: self.unit,
            });
        }
        Ok(())
    }
}

pub const SPEED_RANGE: InputRange = InputRange {
    name: "speed",
    unit: "m/s",
    min: 1.0,
    max: 100.0,
    default: 20.0,
};

pub const ANGLE_RANGE: InputRange = InputRange {
    name: "angle",
    unit: "deg",
    min: 0.0,
    max: 90.0,
    default: 45.0,
};

pub const HEIGHT_RANGE: InputRange = InputRange {
    name: "height",
    unit: "m",
    min: 0.0,
    max: 50.0,
    default: 0.0,
};

pub const GRAVITY_RANGE: InputRange = InputRange {
    name: "gravity",
    unit: "m/s^2",
    min: 0.1,
    max: 20.0,
    default: EARTH_GRAVITY_MPS2,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("{name} must be a finite number")]
    NotFinite { name: &'static str },
    #[error("{name} must be within [{min}, {max}] {unit}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
        unit: &'static str,
    },
    #[error("speed cannot be negative, got {0}")]
    NegativeSpeed(f64),
    #[error("angle must be between 0 and 90 degrees, got {0}")]
    AngleOutOfDomain(f64),
    #[error("launch height cannot be negative, got {0}")]
    NegativeHeight(f64),
    #[error("gravity must be strictly positive, got {0}")]
    NonPositiveGravity(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchParameters {
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub height_m: f64,
    pub gravity_mps2: f64,
}

impl Default for LaunchParameters {
    fn default() -> Self {
        Self {
            speed_mps: SPEED_RANGE.default,
            angle_deg: ANGLE_RANGE.default,
            height_m: HEIGHT_RANGE.default,
            gravity_mps2: GRAVITY_RANGE.default,
        }
    }
}

impl LaunchParameters {
    pub fn new(speed_mps: f64, angle_deg: f64, height_m: f64, gravity_mps2: f64) -> Self {
        Self {
            speed_mps,
            angle_deg,
            height_m,
            gravity_mps2,
        }
    }

    pub fn angle_rad(&self) -> f64 {
        self.angle_deg.to_radians()
    }

    /// Checks the physical domain the engine is defined on: finite values,
    /// non-negative speed and height, angle in [0, 90] and g > 0.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (name, value) in [
            ("speed", self.speed_mps),
            ("angle", self.angle_deg),
            ("height", self.height_m),
            ("gravity", self.gravity_mps2),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite { name });
            }
        }
        if self.speed_mps < 0.0 {
            return Err(ParameterError::NegativeSpeed(self.speed_mps));
        }
        if !(0.0..=90.0).contains(&self.angle_deg) {
            return Err(ParameterError::AngleOutOfDomain(self.angle_deg));
        }
        if self.height_m < 0.0 {
            return Err(ParameterError::NegativeHeight(self.height_m));
        }
        if self.gravity_mps2 <= 0.0 {
            return Err(ParameterError::NonPositiveGravity(self.gravity_mps2));
        }
        Ok(())
    }

    /// Stricter check against the ranges offered by the input widgets.
    pub fn check_input_ranges(&self) -> Result<(), ParameterError> {
        SPEED_RANGE.check(self.speed_mps)?;
        ANGLE_RANGE.check(self.angle_deg)?;
        HEIGHT_RANGE.check(self.height_m)?;
        GRAVITY_RANGE.check(self.gravity_mps2)
    }

    /// Copy with every field pulled into its input widget range.
    pub fn clamped_to_input_ranges(&self) -> Self {
        Self {
            speed_mps: SPEED_RANGE.clamp(self.speed_mps),
            angle_deg: ANGLE_RANGE.clamp(self.angle_deg),
            height_m: HEIGHT_RANGE.clamp(self.height_m),
            gravity_mps2: GRAVITY_RANGE.clamp(self.gravity_mps2),
        }
    }
}

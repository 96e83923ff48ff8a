use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

use crate::utils::errors::ConfigError;

/// Tunable constants of the flight model, shared by every aircraft.
///
/// Per-aircraft differences are expressed as multipliers in
/// [`VehicleProfile`](crate::components::VehicleProfile); these values set
/// the baseline the multipliers scale. The defaults are the tuned arcade
/// feel and most callers never override them.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct FlightConstants {
    /// Forward acceleration at full average throttle
    pub max_thrust: f64,

    /// Downward pull applied every tick while airborne
    pub gravity: f64,

    /// Lift gained per unit of squared speed
    pub lift_coefficient: f64,

    /// Drag lost per unit of squared speed
    pub drag_coefficient: f64,

    /// Base rotation rate at full control deflection [rad per tick]
    pub rotation_speed: f64,

    /// Reference speed at which control authority reaches full strength
    pub min_takeoff_speed: f64,

    /// Speed ceiling, scaled per aircraft. Also normalizes the lift factor
    pub max_speed: f64,

    /// Speed below which an airborne aircraft is considered stalled
    pub stall_speed: f64,

    /// Resting altitude of the aircraft origin when on the ground
    pub ground_level: f64,

    /// Largest timestep a single tick will integrate [s].
    /// Longer frame gaps are clamped, slowing the simulation instead of
    /// letting one giant step tunnel through the ground.
    pub max_timestep: f64,
}

impl Default for FlightConstants {
    fn default() -> Self {
        Self {
            max_thrust: 0.5,
            gravity: 0.08,
            lift_coefficient: 0.002,
            drag_coefficient: 0.0005,
            rotation_speed: 0.02,
            min_takeoff_speed: 0.8,
            max_speed: 4.0,
            stall_speed: 0.5,
            ground_level: 0.6,
            max_timestep: 0.1, // 100 ms
        }
    }
}

impl FlightConstants {
    /// Loads constants from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let constants: Self = serde_yaml::from_reader(file)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Writes the constants to a YAML file readable by [`Self::from_file`].
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Checks the constants for values the integrator cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("max_thrust", self.max_thrust),
            ("gravity", self.gravity),
            ("lift_coefficient", self.lift_coefficient),
            ("drag_coefficient", self.drag_coefficient),
            ("rotation_speed", self.rotation_speed),
            ("min_takeoff_speed", self.min_takeoff_speed),
            ("max_speed", self.max_speed),
            ("stall_speed", self.stall_speed),
            ("max_timestep", self.max_timestep),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be finite and positive, got {}",
                    field, value
                )));
            }
        }
        if !self.ground_level.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "ground_level must be finite, got {}",
                self.ground_level
            )));
        }
        if self.stall_speed >= self.min_takeoff_speed {
            return Err(ConfigError::ValidationError(format!(
                "stall_speed ({}) must be below min_takeoff_speed ({})",
                self.stall_speed, self.min_takeoff_speed
            )));
        }
        if self.min_takeoff_speed >= self.max_speed {
            return Err(ConfigError::ValidationError(format!(
                "min_takeoff_speed ({}) must be below max_speed ({})",
                self.min_takeoff_speed, self.max_speed
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_validate() {
        let constants = FlightConstants::default();
        assert!(constants.validate().is_ok());
        assert_relative_eq!(constants.max_thrust, 0.5);
        assert_relative_eq!(constants.gravity, 0.08);
        assert_relative_eq!(constants.ground_level, 0.6);
    }

    #[test]
    fn test_validate_ordering() {
        let mut constants = FlightConstants::default();
        constants.stall_speed = 1.0;
        assert!(
            constants.validate().is_err(),
            "Stall speed above takeoff speed should be rejected"
        );

        let mut constants = FlightConstants::default();
        constants.min_takeoff_speed = 5.0;
        assert!(constants.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut constants = FlightConstants::default();
        constants.gravity = f64::NAN;
        assert!(constants.validate().is_err());

        let mut constants = FlightConstants::default();
        constants.max_timestep = 0.0;
        assert!(constants.validate().is_err());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let mut constants = FlightConstants::default();
        constants.max_speed = 6.0;
        let file = tempfile::NamedTempFile::new().unwrap();

        constants.save(file.path()).unwrap();
        let loaded = FlightConstants::from_file(file.path()).unwrap();

        assert_relative_eq!(loaded.max_speed, 6.0);
        assert_relative_eq!(loaded.lift_coefficient, constants.lift_coefficient);
        assert_relative_eq!(loaded.max_timestep, constants.max_timestep);
    }
}

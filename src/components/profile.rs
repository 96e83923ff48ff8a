use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

use crate::utils::errors::ConfigError;

/// Handling characteristics of one aircraft type.
///
/// Profiles scale the shared [`FlightConstants`](crate::resources::FlightConstants)
/// rather than replacing them, so every aircraft obeys the same flight model
/// and differs only in multipliers. All multipliers are dimensionless and
/// 1.0 reproduces the baseline trainer.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Display name used in logs and telemetry overlays
    pub name: String,

    /// Scales maximum thrust per engine
    pub thrust_mult: f64,

    /// Scales the lift coefficient
    pub lift_mult: f64,

    /// Scales the drag coefficient
    pub drag_mult: f64,

    /// Scales pitch/roll/yaw rotation rates
    pub turn_speed_mult: f64,

    /// Scales the speed ceiling
    pub max_speed_mult: f64,

    /// Number of independently throttleable engines
    pub engine_count: usize,
}

impl Default for VehicleProfile {
    fn default() -> Self {
        Self::trainer()
    }
}

impl VehicleProfile {
    /// Single-engine trainer, the baseline aircraft. All multipliers 1.0.
    pub fn trainer() -> Self {
        Self {
            name: "Trainer".to_string(),
            thrust_mult: 1.0,
            lift_mult: 1.0,
            drag_mult: 1.0,
            turn_speed_mult: 1.0,
            max_speed_mult: 1.0,
            engine_count: 1,
        }
    }

    /// Twin-engine commuter. Slightly heavier handling, two throttles so
    /// differential thrust becomes available.
    pub fn twin_commuter() -> Self {
        Self {
            name: "Twin Commuter".to_string(),
            thrust_mult: 0.9,
            lift_mult: 1.1,
            drag_mult: 1.1,
            turn_speed_mult: 0.8,
            max_speed_mult: 1.1,
            engine_count: 2,
        }
    }

    /// Four-engine freighter. Sluggish in roll and pitch but fast in a
    /// straight line once it finally gets going.
    pub fn heavy_freighter() -> Self {
        Self {
            name: "Heavy Freighter".to_string(),
            thrust_mult: 1.0,
            lift_mult: 0.9,
            drag_mult: 1.3,
            turn_speed_mult: 0.5,
            max_speed_mult: 1.3,
            engine_count: 4,
        }
    }

    /// Aerobatic single. Twitchy rotation rates and low drag, stalls easily.
    pub fn aerobat() -> Self {
        Self {
            name: "Aerobat".to_string(),
            thrust_mult: 1.1,
            lift_mult: 0.8,
            drag_mult: 0.8,
            turn_speed_mult: 1.6,
            max_speed_mult: 1.2,
            engine_count: 1,
        }
    }

    /// Loads a profile from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let profile: Self = serde_yaml::from_reader(file)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Checks that every multiplier is finite and positive and that the
    /// aircraft has at least one engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let multipliers = [
            ("thrust_mult", self.thrust_mult),
            ("lift_mult", self.lift_mult),
            ("drag_mult", self.drag_mult),
            ("turn_speed_mult", self.turn_speed_mult),
            ("max_speed_mult", self.max_speed_mult),
        ];
        for (field, value) in multipliers {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be finite and positive, got {}",
                    field, value
                )));
            }
        }
        if self.engine_count == 0 {
            return Err(ConfigError::ValidationError(
                "engine_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

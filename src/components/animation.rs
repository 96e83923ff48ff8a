use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Cosmetic articulation state for a rendered aircraft model.
///
/// Everything here is presentation only. The physics never reads these
/// values; they chase the applied control inputs so that surfaces, gear and
/// propellers look right even when inputs jump discontinuously.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct AnimationState {
    /// Elevator deflection, positive trailing edge up [-1, 1]
    pub elevator: f64,

    /// Left aileron deflection [-1, 1]
    pub aileron_left: f64,

    /// Right aileron deflection, mirrors the left [-1, 1]
    pub aileron_right: f64,

    /// Rudder deflection, positive trailing edge right [-1, 1]
    pub rudder: f64,

    /// Flap extension fraction [0, 1]
    pub flap_extension: f64,

    /// Landing gear extension fraction, 0 retracted, 1 down and locked
    pub gear_extension: f64,

    /// Accumulated propeller rotation [rad]
    pub propeller_angle: f64,

    /// Current propeller spin rate [rad/s]
    pub propeller_rate: f64,
}

impl Default for AnimationState {
    /// Parked pose: surfaces neutral, gear down, propeller stopped.
    fn default() -> Self {
        Self {
            elevator: 0.0,
            aileron_left: 0.0,
            aileron_right: 0.0,
            rudder: 0.0,
            flap_extension: 0.0,
            gear_extension: 1.0,
            propeller_angle: 0.0,
            propeller_rate: 0.0,
        }
    }
}

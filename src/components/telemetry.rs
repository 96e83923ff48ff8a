use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::{ControlInput, FlightState};

/// Read-only flight data published after every tick.
///
/// Consumers (HUD overlays, instrument panels, recorders) read this instead
/// of poking at [`FlightState`](crate::components::FlightState) directly.
/// Angles are instrument-style Euler angles in radians derived from the
/// attitude quaternion, so they are safe to format but should not be fed
/// back into the physics.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    /// World position at the end of the tick
    pub position: Vector3<f64>,

    /// Nose elevation above the horizon [rad]
    pub pitch: f64,

    /// Bank angle, positive right wing down [rad]
    pub roll: f64,

    /// Heading, 0 along -Z increasing to the right [rad]
    pub yaw: f64,

    /// Scalar speed [world units per simulated second]
    pub speed: f64,

    /// Height above the world floor
    pub altitude: f64,

    /// Sanitized per-engine throttle percentages applied this tick [0, 100]
    pub throttles: Vec<f64>,

    /// Landing gear extended
    pub gear: bool,

    /// Flap notch applied this tick
    pub flaps: u8,

    /// Wheel brake engaged
    pub brake: bool,

    /// Sanitized pitch axis demand applied this tick [-1, 1]
    pub pitch_input: f64,

    /// Sanitized roll axis demand applied this tick [-1, 1]
    pub roll_input: f64,

    /// Sanitized yaw axis demand applied this tick [-1, 1]
    pub yaw_input: f64,
}

impl Default for TelemetrySnapshot {
    /// Snapshot of an aircraft parked at the origin with neutral controls.
    fn default() -> Self {
        Self {
            position: Vector3::new(
                0.0,
                crate::resources::FlightConstants::default().ground_level,
                0.0,
            ),
            pitch: 0.0,
            roll: 0.0,
            yaw: 0.0,
            speed: 0.0,
            altitude: crate::resources::FlightConstants::default().ground_level,
            throttles: vec![0.0],
            gear: true,
            flaps: 0,
            brake: false,
            pitch_input: 0.0,
            roll_input: 0.0,
            yaw_input: 0.0,
        }
    }
}

impl TelemetrySnapshot {
    /// Reads the state back into instrument form.
    ///
    /// `input` is expected to be the sanitized input the tick actually
    /// applied, so the echo fields report what the physics saw rather than
    /// what the pilot asked for.
    pub fn capture(state: &FlightState, input: &ControlInput) -> Self {
        let (forward, up, right) = state.basis_vectors();

        // Instrument angles from the rotated basis. asin argument is clamped
        // against float drift pushing it past one.
        let pitch = forward.y.clamp(-1.0, 1.0).asin();
        let yaw = forward.x.atan2(-forward.z);
        let roll = (-right.y).atan2(up.y);

        Self {
            position: state.position,
            pitch,
            roll,
            yaw,
            speed: state.speed(),
            altitude: state.altitude(),
            throttles: input.throttles.clone(),
            gear: input.gear,
            flaps: input.flaps,
            brake: input.brake,
            pitch_input: input.pitch,
            roll_input: input.roll,
            yaw_input: input.yaw,
        }
    }

    /// Mean of the throttle settings applied this tick.
    pub fn average_throttle(&self) -> f64 {
        if self.throttles.is_empty() {
            return 0.0;
        }
        self.throttles.iter().sum::<f64>() / self.throttles.len() as f64
    }

    /// Whether the aircraft is slow enough to warrant a stall warning.
    ///
    /// Fires only while airborne above the low-altitude grace band; taxiing
    /// slowly is not a stall.
    pub fn stall_warning(&self, constants: &crate::resources::FlightConstants) -> bool {
        self.altitude > constants.ground_level + crate::utils::STALL_GRACE_ALTITUDE
            && self.speed < constants.stall_speed
    }
}

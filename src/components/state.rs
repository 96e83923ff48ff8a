use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Continuous physical state of one aircraft.
///
/// The state is owned exclusively by whatever drives the integrator (a
/// [`FlightSession`](crate::session::FlightSession) or a Bevy entity) and is
/// mutated exactly once per simulation tick. Restarting a flight or changing
/// aircraft rebuilds the state wholesale via [`FlightState::grounded`]; it is
/// never repaired field-by-field from outside.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct FlightState {
    /// Position in world space, +Y up [world units]
    pub position: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame).
    /// Renormalized after every composition to counter drift.
    pub attitude: UnitQuaternion<f64>,

    /// Linear velocity in world space [world units per simulated second]
    pub velocity: Vector3<f64>,
}

impl Default for FlightState {
    /// At rest on the ground at the world origin.
    fn default() -> Self {
        Self::grounded(crate::resources::FlightConstants::default().ground_level)
    }
}

impl FlightState {
    /// Creates a fresh state parked at ground level: position
    /// `(0, ground_level, 0)`, zero velocity, identity attitude.
    pub fn grounded(ground_level: f64) -> Self {
        Self {
            position: Vector3::new(0.0, ground_level, 0.0),
            attitude: UnitQuaternion::identity(),
            velocity: Vector3::zeros(),
        }
    }

    /// Scalar speed, the norm of the velocity vector.
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Altitude above the world floor (the +Y coordinate).
    pub fn altitude(&self) -> f64 {
        self.position.y
    }

    /// Whether the aircraft is classified as on the ground.
    ///
    /// Ground contact triggers rolling friction, ground steering, and the
    /// downward-velocity clamp inside the integrator.
    pub fn on_ground(&self, ground_level: f64) -> bool {
        self.position.y <= ground_level
    }

    /// Body axes rotated into the world frame: `(forward, up, right)`.
    ///
    /// The local frame is +Y up, forward -Z, right +X.
    pub fn basis_vectors(&self) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
        let forward = self.attitude * Vector3::new(0.0, 0.0, -1.0);
        let up = self.attitude * Vector3::new(0.0, 1.0, 0.0);
        let right = self.attitude * Vector3::new(1.0, 0.0, 0.0);
        (forward, up, right)
    }

    /// True when every component of position, velocity and attitude is finite.
    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|v| v.is_finite())
            && self.velocity.iter().all(|v| v.is_finite())
            && self.attitude.as_ref().coords.iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grounded_state() {
        let state = FlightState::grounded(0.6);
        assert_relative_eq!(state.position.y, 0.6);
        assert_relative_eq!(state.speed(), 0.0);
        assert!(state.on_ground(0.6));
        assert_relative_eq!(state.attitude.as_ref().norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_basis_vectors_identity() {
        let state = FlightState::grounded(0.6);
        let (forward, up, right) = state.basis_vectors();
        assert_relative_eq!(forward.z, -1.0, epsilon = 1e-12);
        assert_relative_eq!(up.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(right.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_basis_vectors_orthonormal_after_rotation() {
        let mut state = FlightState::grounded(0.6);
        state.attitude = UnitQuaternion::from_euler_angles(0.3, -0.7, 1.2);
        let (forward, up, right) = state.basis_vectors();
        assert_relative_eq!(forward.norm(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(forward.dot(&up), 0.0, epsilon = 1e-9);
        assert_relative_eq!(forward.dot(&right), 0.0, epsilon = 1e-9);
        assert_relative_eq!(up.dot(&right), 0.0, epsilon = 1e-9);
    }
}

#![allow(dead_code)]

use aerobat::{FlightConstants, FlightState, TelemetrySnapshot};
use approx::assert_relative_eq;

/// Assert that every component of the flight state is finite
#[track_caller]
pub fn assert_state_valid(state: &FlightState) {
    assert!(state.position.x.is_finite(), "Position x is not finite");
    assert!(state.position.y.is_finite(), "Position y is not finite");
    assert!(state.position.z.is_finite(), "Position z is not finite");

    assert!(state.velocity.x.is_finite(), "Velocity x is not finite");
    assert!(state.velocity.y.is_finite(), "Velocity y is not finite");
    assert!(state.velocity.z.is_finite(), "Velocity z is not finite");

    assert!(
        state.attitude.as_ref().coords.iter().all(|v| v.is_finite()),
        "Attitude quaternion contains non-finite values"
    );
}

/// Assert that the attitude quaternion is still unit length
#[track_caller]
pub fn assert_attitude_normalized(state: &FlightState) {
    let norm = state.attitude.as_ref().norm();
    assert_relative_eq!(norm, 1.0, epsilon = 1e-6);
}

/// Assert that the aircraft is resting on the ground at rest
#[track_caller]
pub fn assert_parked(state: &FlightState, constants: &FlightConstants) {
    assert_relative_eq!(state.position.y, constants.ground_level, epsilon = 1e-9);
    assert_relative_eq!(state.speed(), 0.0, epsilon = 1e-9);
}

/// Assert that the aircraft has left the ground
#[track_caller]
pub fn assert_airborne(state: &FlightState, constants: &FlightConstants) {
    assert!(
        state.position.y > constants.ground_level,
        "Expected airborne, but altitude {} is at or below ground level {}",
        state.position.y,
        constants.ground_level
    );
}

/// Assert that telemetry agrees with the state it was captured from
#[track_caller]
pub fn assert_telemetry_consistent(telemetry: &TelemetrySnapshot, state: &FlightState) {
    assert_relative_eq!(telemetry.speed, state.speed(), epsilon = 1e-12);
    assert_relative_eq!(telemetry.altitude, state.position.y, epsilon = 1e-12);
    assert_relative_eq!(
        (telemetry.position - state.position).norm(),
        0.0,
        epsilon = 1e-12
    );
}

#![allow(dead_code)]

use aerobat::{ControlInput, FlightSession, FlightState, VehicleProfile};

/// The tick length the flight model is tuned around.
pub const DT: f64 = 1.0 / 60.0;

/// Fresh trainer session parked at the origin.
pub fn trainer_session() -> FlightSession {
    FlightSession::new(VehicleProfile::trainer()).expect("trainer preset must validate")
}

/// Neutral controls with every engine at full power.
pub fn full_throttle(engine_count: usize) -> ControlInput {
    let mut input = ControlInput::neutral(engine_count);
    input.set_throttle(100.0);
    input
}

/// A level cruise state at altitude, flying along -Z.
pub fn cruising_state(altitude: f64, speed: f64) -> FlightState {
    let mut state = FlightState::grounded(0.6);
    state.position.y = altitude;
    state.velocity = nalgebra::Vector3::new(0.0, 0.0, -speed);
    state
}

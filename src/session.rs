use crate::components::{ControlInput, FlightState, TelemetrySnapshot, VehicleProfile};
use crate::resources::FlightConstants;
use crate::systems::flight::advance;
use crate::utils::errors::ConfigError;

/// A self-contained flight, driven without any ECS machinery.
///
/// Owns one aircraft, its state and the constants it flies under. Callers
/// push a [`ControlInput`] plus elapsed time per tick and read telemetry
/// back. Strictly sequential and allocation-free per step, so it suits
/// tests, replays and training loops; interactive hosts usually prefer
/// [`FlightDynamicsPlugin`](crate::plugins::FlightDynamicsPlugin) instead.
///
/// Two sessions never share state, so simulations can run side by side.
#[derive(Debug, Clone)]
pub struct FlightSession {
    profile: VehicleProfile,
    constants: FlightConstants,
    state: FlightState,
    telemetry: TelemetrySnapshot,
    elapsed: f64,
    ticks: u64,
}

impl FlightSession {
    /// Starts a session with the default constants, parked on the ground.
    pub fn new(profile: VehicleProfile) -> Result<Self, ConfigError> {
        Self::with_constants(profile, FlightConstants::default())
    }

    /// Starts a session with explicit constants.
    pub fn with_constants(
        profile: VehicleProfile,
        constants: FlightConstants,
    ) -> Result<Self, ConfigError> {
        profile.validate()?;
        constants.validate()?;

        let state = FlightState::grounded(constants.ground_level);
        let telemetry =
            TelemetrySnapshot::capture(&state, &ControlInput::neutral(profile.engine_count));
        Ok(Self {
            profile,
            constants,
            state,
            telemetry,
            elapsed: 0.0,
            ticks: 0,
        })
    }

    /// Advances the flight by `dt` seconds under `input`.
    ///
    /// Time accounting mirrors the integrator's policy: non-positive `dt`
    /// refreshes telemetry without advancing anything, and oversized steps
    /// count as [`FlightConstants::max_timestep`] of simulated time.
    pub fn step(&mut self, input: &ControlInput, dt: f64) -> &TelemetrySnapshot {
        self.telemetry = advance(
            &mut self.state,
            &self.profile,
            input,
            &self.constants,
            dt,
        );
        if dt > 0.0 {
            self.elapsed += dt.min(self.constants.max_timestep);
            self.ticks += 1;
        }
        &self.telemetry
    }

    /// Puts the current aircraft back on the ground with the clock zeroed.
    pub fn reset(&mut self) {
        self.state = FlightState::grounded(self.constants.ground_level);
        self.telemetry = TelemetrySnapshot::capture(
            &self.state,
            &ControlInput::neutral(self.profile.engine_count),
        );
        self.elapsed = 0.0;
        self.ticks = 0;
    }

    /// Swaps to a different aircraft and restarts the flight.
    ///
    /// The old aircraft keeps flying if the new profile fails validation.
    pub fn change_aircraft(&mut self, profile: VehicleProfile) -> Result<(), ConfigError> {
        profile.validate()?;
        self.profile = profile;
        self.reset();
        Ok(())
    }

    pub fn profile(&self) -> &VehicleProfile {
        &self.profile
    }

    pub fn constants(&self) -> &FlightConstants {
        &self.constants
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    pub fn telemetry(&self) -> &TelemetrySnapshot {
        &self.telemetry
    }

    /// Simulated seconds accumulated since the last reset.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Ticks integrated since the last reset.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use aerobat::{ControlInput, FlightDynamicsPlugin, FlightState, VehicleProfile};

/// Builds a headless app running the flight plugin at a manually driven
/// clock: every `App::update` advances virtual time by exactly one physics
/// timestep, so frames map 1:1 onto fixed ticks and runs are deterministic.
///
/// The returned app has already run its startup schedule, so the aircraft
/// is spawned and parked.
pub fn fixed_step_app(profile: VehicleProfile) -> App {
    let plugin = FlightDynamicsPlugin::with_aircraft(profile);
    let timestep = plugin.timestep;

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(plugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(
            Duration::from_secs_f64(timestep),
        ));

    // First update spawns the aircraft; the clock only starts on the next.
    app.update();
    app
}

/// Overwrites the control input on the single spawned aircraft.
pub fn set_input(app: &mut App, input: ControlInput) {
    let world = app.world_mut();
    let mut query = world.query::<&mut ControlInput>();
    *query.single_mut(world) = input;
}

/// Clones the current flight state of the single spawned aircraft.
pub fn flight_state(app: &mut App) -> FlightState {
    let world = app.world_mut();
    let mut query = world.query::<&FlightState>();
    query.single(world).clone()
}

/// Runs `ticks` frames of simulation.
pub fn run_ticks(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.update();
    }
}

use bevy::prelude::*;

use crate::components::{
    AnimationState, ControlInput, FlightState, TelemetrySnapshot, VehicleProfile,
};
use crate::resources::FlightConstants;
use crate::systems::{
    cosmetic_animation_system, flight_dynamics_system, sync_render_transform_system,
};

/// Flight simulation stages within the fixed timestep.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    Reset,
    Physics,
}

/// Rebuilds every flight in progress from a cold start.
///
/// With a `profile` the aircraft is swapped at the same time; profiles are
/// validated first and an invalid one keeps the current aircraft instead of
/// poisoning the simulation.
#[derive(Event, Debug, Clone, Default)]
pub struct ResetFlightEvent {
    pub profile: Option<VehicleProfile>,
}

/// Core simulation plugin: fixed-timestep flight dynamics plus the
/// presentation-side animation and transform sync.
///
/// Input wiring is deliberately absent. Hosts write [`ControlInput`]
/// components from whatever source they have (keyboard, gamepad, replay,
/// agent) and read [`TelemetrySnapshot`] back.
pub struct FlightDynamicsPlugin {
    pub timestep: f64,
    spawn: Option<VehicleProfile>,
}

impl Default for FlightDynamicsPlugin {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 60.0, // 60 Hz, the rate the model is tuned for
            spawn: None,
        }
    }
}

impl FlightDynamicsPlugin {
    /// Plugin that also spawns a ready-to-fly aircraft at startup.
    pub fn with_aircraft(profile: VehicleProfile) -> Self {
        Self {
            spawn: Some(profile),
            ..Default::default()
        }
    }

    fn setup_aircraft(
        mut commands: Commands,
        constants: Res<FlightConstants>,
        profile: VehicleProfile,
    ) {
        info!("Spawning aircraft: {}", profile.name);
        commands.spawn((
            Name::new(profile.name.clone()),
            FlightState::grounded(constants.ground_level),
            ControlInput::neutral(profile.engine_count),
            TelemetrySnapshot::default(),
            AnimationState::default(),
            Transform::default(),
            profile,
        ));
    }
}

impl Plugin for FlightDynamicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FlightConstants>();
        app.add_event::<ResetFlightEvent>();

        app.insert_resource(Time::<Fixed>::from_seconds(self.timestep));

        app.configure_sets(
            FixedUpdate,
            (FlightSet::Reset, FlightSet::Physics).chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                handle_reset_events.in_set(FlightSet::Reset),
                flight_dynamics_system.in_set(FlightSet::Physics),
            ),
        );

        // Cosmetic systems follow the render rate, not the physics rate.
        app.add_systems(
            Update,
            (cosmetic_animation_system, sync_render_transform_system),
        );

        if let Some(profile) = self.spawn.clone() {
            app.add_systems(
                Startup,
                move |commands: Commands, constants: Res<FlightConstants>| {
                    Self::setup_aircraft(commands, constants, profile.clone())
                },
            );
        }
    }
}

/// Applies pending [`ResetFlightEvent`]s to every aircraft.
///
/// State is rebuilt wholesale rather than repaired field-by-field; controls,
/// telemetry and animation all return to their parked defaults. Aircraft
/// spawned by hosts without a [`Name`] label are reset all the same; the
/// label only follows the profile when the entity carries one.
fn handle_reset_events(
    mut events: EventReader<ResetFlightEvent>,
    mut query: Query<(
        Option<&mut Name>,
        &mut FlightState,
        &mut VehicleProfile,
        &mut ControlInput,
        &mut TelemetrySnapshot,
        &mut AnimationState,
    )>,
    constants: Res<FlightConstants>,
) {
    for event in events.read() {
        let replacement = match &event.profile {
            Some(profile) => match profile.validate() {
                Ok(()) => Some(profile.clone()),
                Err(err) => {
                    warn!("Rejecting aircraft change on reset: {}", err);
                    None
                }
            },
            None => None,
        };

        for (name, mut state, mut current, mut input, mut telemetry, mut anim) in
            query.iter_mut()
        {
            if let Some(profile) = &replacement {
                info!("Changing aircraft to {}", profile.name);
                if let Some(mut name) = name {
                    name.set(profile.name.clone());
                }
                *current = profile.clone();
            }
            *state = FlightState::grounded(constants.ground_level);
            *input = ControlInput::neutral(current.engine_count);
            *telemetry = TelemetrySnapshot::default();
            *anim = AnimationState::default();
        }
    }
}

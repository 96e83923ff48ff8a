//! Arcade flight dynamics for games and headless simulation.
//!
//! The whole model is one deterministic tick function,
//! [`systems::flight::advance`], which composes thrust, gravity, lift and
//! drag into a velocity, resolves ground contact and turns the aircraft
//! under stick input and differential thrust. It can be driven three ways:
//! standalone, through a [`FlightSession`] for headless loops, or via
//! [`FlightDynamicsPlugin`] inside a Bevy app on a fixed timestep.
//!
//! Aircraft differ only by [`VehicleProfile`] multipliers over a shared
//! [`FlightConstants`] set, so every type obeys the same tuned flight feel.

pub mod components;
pub mod plugins;
pub mod resources;
pub mod session;
pub mod systems;
pub mod utils;

pub use components::{
    AnimationState, ControlInput, FlightState, TelemetrySnapshot, VehicleProfile,
    MAX_FLAP_SETTING,
};
pub use plugins::{FlightDynamicsPlugin, FlightSet, ResetFlightEvent};
pub use resources::FlightConstants;
pub use session::FlightSession;
pub use systems::flight::advance;
pub use utils::errors::ConfigError;

pub mod animation;
pub mod controls;
pub mod profile;
pub mod state;
pub mod telemetry;

pub use animation::AnimationState;
pub use controls::{ControlInput, MAX_FLAP_SETTING};
pub use profile::VehicleProfile;
pub use state::FlightState;
pub use telemetry::TelemetrySnapshot;

mod forces;
mod integrator;

pub use forces::{
    control_authority, drag_force, lift_magnitude, mix_throttles, thrust_magnitude, ThrottleMix,
};
pub use integrator::{advance, flight_dynamics_system};

mod animation;
pub mod flight;
mod render;

pub use animation::{
    cosmetic_animation_system, update_control_surfaces, update_extensions, update_propeller,
};
pub use flight::{advance, flight_dynamics_system};
pub use render::sync_render_transform_system;

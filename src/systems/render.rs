use bevy::prelude::*;

use crate::components::FlightState;

/// Copies the simulated pose onto the render transform.
///
/// The flight state already lives in the render frame (+Y up), so this is a
/// straight f64 to f32 narrowing for entities that carry a [`Transform`].
/// Presentation layers hang cameras, meshes and instrument readouts off the
/// transform; none of that lives in this crate.
pub fn sync_render_transform_system(mut query: Query<(&FlightState, &mut Transform)>) {
    for (state, mut transform) in query.iter_mut() {
        transform.translation = Vec3::new(
            state.position.x as f32,
            state.position.y as f32,
            state.position.z as f32,
        );

        let q = state.attitude.coords;
        transform.rotation = Quat::from_xyzw(q.x as f32, q.y as f32, q.z as f32, q.w as f32);
    }
}

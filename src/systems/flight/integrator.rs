use bevy::prelude::*;
use nalgebra::{Unit, UnitQuaternion, Vector3};

use crate::components::{ControlInput, FlightState, TelemetrySnapshot, VehicleProfile};
use crate::resources::FlightConstants;
use crate::utils::constants::{
    AIRBORNE_YAW_RATIO, AUTO_LEVEL_MIN_SPEED, AUTO_LEVEL_RATE, BRAKE_DECAY,
    BRAKE_GRACE_ALTITUDE, DIFFERENTIAL_YAW_GAIN, FRAME_RATE_SCALE, GROUND_STEERING_RATE,
    ROLLING_FRICTION, ROLL_AUTHORITY_RATIO,
};

use super::forces::{
    control_authority, drag_force, lift_magnitude, mix_throttles, thrust_magnitude,
};

/// Advances the flight state by one tick and reports telemetry.
///
/// This is the whole flight model: thrust, gravity, lift and drag are
/// composed into the velocity, ground contact is resolved, the attitude
/// turns under control input and differential thrust, and the position
/// integrates forward. Deterministic for identical inputs and free of
/// hidden state, so a headless caller stepping this in a loop reproduces
/// exactly what the plugin-driven simulation does.
///
/// `dt` is the elapsed simulated time in seconds. Non-positive or
/// non-finite values leave the state untouched and only refresh telemetry;
/// values above [`FlightConstants::max_timestep`] are clamped, trading a
/// slow-motion hitch for never tunneling through the ground after a long
/// frame gap.
///
/// # Arguments
/// * `state` - The state to advance in place.
/// * `profile` - Handling multipliers of the aircraft being flown.
/// * `input` - Raw pilot input; sanitized internally before use.
/// * `constants` - Shared flight model constants.
/// * `dt` - Elapsed simulated seconds since the previous tick.
///
/// # Returns
/// A [`TelemetrySnapshot`] of the post-tick state with the applied input
/// echoed back.
pub fn advance(
    state: &mut FlightState,
    profile: &VehicleProfile,
    input: &ControlInput,
    constants: &FlightConstants,
    dt: f64,
) -> TelemetrySnapshot {
    let input = input.sanitized(profile.engine_count);

    // NaN dt fails this comparison too.
    if !(dt > 0.0) {
        return TelemetrySnapshot::capture(state, &input);
    }
    let dt = dt.min(constants.max_timestep);
    let scale = dt * FRAME_RATE_SCALE;

    let saved = state.clone();

    // Basis vectors and ground classification are fixed at tick start and
    // used consistently through the whole step.
    let (forward, up, right) = state.basis_vectors();
    let on_ground = state.on_ground(constants.ground_level);

    let mix = mix_throttles(&input.throttles);
    let mut thrust = thrust_magnitude(mix.average, profile, constants);
    // The brake window tracks the floor the same way the stall check does.
    if input.brake && state.position.y < constants.ground_level + BRAKE_GRACE_ALTITUDE {
        thrust = 0.0;
        state.velocity *= BRAKE_DECAY;
    }

    // Single speed sample per tick, taken after brake handling so lift,
    // drag, authority and the auto-level target all agree.
    let speed = state.velocity.norm();

    let thrust_dv = forward * (thrust * dt);
    let gravity_dv = Vector3::new(0.0, -constants.gravity * scale, 0.0);
    let lift_dv = up * (lift_magnitude(speed, input.flaps, profile, constants) * scale);
    let drag_dv = drag_force(
        &state.velocity,
        speed,
        input.gear,
        input.flaps,
        profile,
        constants,
    ) * dt;
    state.velocity += thrust_dv + gravity_dv + lift_dv + drag_dv;

    // Hard speed ceiling. Lift grows with the square of speed, so without
    // this clamp the lift/speed feedback runs away once airborne.
    let speed_ceiling = constants.max_speed * profile.max_speed_mult;
    if state.velocity.norm() > speed_ceiling {
        state.velocity = state.velocity.normalize() * speed_ceiling;
    }

    // Ground contact resolved against the pre-integration position: sink is
    // cancelled, the aircraft is pinned to the floor, and rolling friction
    // bleeds speed.
    if on_ground {
        if state.velocity.y < 0.0 {
            state.velocity.y = 0.0;
        }
        state.position.y = constants.ground_level;
        state.velocity *= ROLLING_FRICTION;
    }

    let authority = control_authority(speed, profile, constants);
    let pitch_delta = input.pitch * authority * scale;
    let roll_delta = input.roll * authority * ROLL_AUTHORITY_RATIO * scale;

    // Rudder and differential thrust share the yaw channel. On the ground
    // the nosewheel steers at a fixed rate independent of airspeed.
    let total_yaw = -input.yaw + mix.yaw_moment * DIFFERENTIAL_YAW_GAIN;
    let yaw_rate = if on_ground {
        GROUND_STEERING_RATE
    } else {
        authority * AIRBORNE_YAW_RATIO
    };
    let yaw_delta = total_yaw * yaw_rate * scale;

    // Incremental rotations about the world-frame body axes, composed
    // pitch, then yaw, then roll. The order is a tuned handling choice,
    // not a physical one; changing it changes coupled maneuvers.
    let pitch_rot = UnitQuaternion::from_axis_angle(&Unit::new_normalize(right), pitch_delta);
    let yaw_rot = UnitQuaternion::from_axis_angle(&Unit::new_normalize(up), yaw_delta);
    let roll_rot = UnitQuaternion::from_axis_angle(&Unit::new_normalize(forward), roll_delta);
    let composed = roll_rot * yaw_rot * pitch_rot * state.attitude;
    state.attitude = UnitQuaternion::from_quaternion(composed.into_inner().normalize());

    // Airborne velocity drifts toward the nose direction, suppressing
    // sideways and vertical slip without hard-coupling velocity to attitude.
    if !on_ground && speed > AUTO_LEVEL_MIN_SPEED {
        let target = forward * speed;
        let factor = (dt * AUTO_LEVEL_RATE).clamp(0.0, 1.0);
        state.velocity = state.velocity.lerp(&target, factor);
    }

    state.position += state.velocity * scale;

    if !state.is_finite() {
        warn!("Non-finite flight state after tick, restoring previous state");
        *state = saved;
    }

    TelemetrySnapshot::capture(state, &input)
}

/// Runs the flight model for every simulated aircraft.
///
/// Thin wrapper around [`advance`]. Scheduled on the fixed timestep so the
/// integration step stays constant regardless of render frame rate.
pub fn flight_dynamics_system(
    mut query: Query<(
        &mut FlightState,
        &VehicleProfile,
        &ControlInput,
        &mut TelemetrySnapshot,
    )>,
    constants: Res<FlightConstants>,
    time: Res<Time>,
) {
    let dt = time.delta_secs_f64();

    for (mut state, profile, input, mut telemetry) in query.iter_mut() {
        *telemetry = advance(&mut state, profile, input, &constants, dt);
    }
}

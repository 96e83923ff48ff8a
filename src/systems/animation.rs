use bevy::prelude::*;

use crate::components::{AnimationState, TelemetrySnapshot, MAX_FLAP_SETTING};
use crate::utils::math::{lerp, wrap_angle};

const SURFACE_RESPONSE_RATE: f64 = 10.0; // 1/s, surfaces chase their input
const GEAR_TRANSIT_RATE: f64 = 0.5; // full gear travel takes 2 s
const FLAP_TRANSIT_RATE: f64 = 0.4; // full flap travel takes 2.5 s
const PROP_IDLE_RATE: f64 = 6.0; // rad/s windmilling at zero throttle
const PROP_FULL_RATE: f64 = 90.0; // rad/s at full throttle
const PROP_SPOOL_RATE: f64 = 2.0; // 1/s, spin rate chases the throttle

/// Deflects the control surfaces toward the applied stick inputs.
///
/// Surfaces chase the echoes exponentially so discontinuous inputs (key
/// taps, replay jumps) still read as mechanical movement. The ailerons
/// mirror each other.
pub fn update_control_surfaces(anim: &mut AnimationState, telemetry: &TelemetrySnapshot, dt: f64) {
    let factor = dt * SURFACE_RESPONSE_RATE;
    anim.elevator = lerp(anim.elevator, telemetry.pitch_input, factor);
    anim.aileron_left = lerp(anim.aileron_left, telemetry.roll_input, factor);
    anim.aileron_right = lerp(anim.aileron_right, -telemetry.roll_input, factor);
    anim.rudder = lerp(anim.rudder, telemetry.yaw_input, factor);
}

/// Runs the gear and flaps toward their selected positions at the fixed
/// mechanical transit rates.
pub fn update_extensions(anim: &mut AnimationState, telemetry: &TelemetrySnapshot, dt: f64) {
    let gear_target = if telemetry.gear { 1.0 } else { 0.0 };
    anim.gear_extension = approach(anim.gear_extension, gear_target, GEAR_TRANSIT_RATE * dt);

    let flap_target = telemetry.flaps as f64 / MAX_FLAP_SETTING as f64;
    anim.flap_extension = approach(anim.flap_extension, flap_target, FLAP_TRANSIT_RATE * dt);
}

/// Spins the propeller at a rate that spools toward the commanded throttle.
pub fn update_propeller(anim: &mut AnimationState, telemetry: &TelemetrySnapshot, dt: f64) {
    let throttle = telemetry.average_throttle() / 100.0;
    let target_rate = PROP_IDLE_RATE + throttle * (PROP_FULL_RATE - PROP_IDLE_RATE);
    anim.propeller_rate = lerp(anim.propeller_rate, target_rate, dt * PROP_SPOOL_RATE);
    anim.propeller_angle = wrap_angle(anim.propeller_angle + anim.propeller_rate * dt);
}

/// Moves `value` toward `target` by at most `step`, without overshoot.
fn approach(value: f64, target: f64, step: f64) -> f64 {
    let delta = target - value;
    if delta.abs() <= step {
        target
    } else {
        value + step.copysign(delta)
    }
}

/// Drives all cosmetic articulation from the latest telemetry.
///
/// Runs on the render schedule rather than the fixed timestep because
/// nothing here feeds back into the physics.
pub fn cosmetic_animation_system(
    mut query: Query<(&mut AnimationState, &TelemetrySnapshot)>,
    time: Res<Time>,
) {
    let dt = time.delta_secs_f64();

    for (mut anim, telemetry) in query.iter_mut() {
        update_control_surfaces(&mut anim, telemetry, dt);
        update_extensions(&mut anim, telemetry, dt);
        update_propeller(&mut anim, telemetry, dt);
    }
}

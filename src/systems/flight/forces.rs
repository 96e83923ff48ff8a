use nalgebra::Vector3;

use crate::components::VehicleProfile;
use crate::resources::FlightConstants;
use crate::utils::constants::{FLAP_DRAG, FLAP_LIFT_BONUS, GEAR_DRAG, MAX_AUTHORITY_RATIO};

/// Result of mixing the per-engine throttles for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrottleMix {
    /// Mean throttle percentage across all engines [0, 100]
    pub average: f64,

    /// Signed thrust imbalance, positive when the right side runs hotter.
    /// Always 0.0 for single-engine aircraft.
    pub yaw_moment: f64,
}

/// Aggregates per-engine throttles into average thrust and a yaw moment.
///
/// Engines are assumed laid out left to right in index order; each index
/// maps linearly onto a side coefficient in [-1, 1], so outboard engines
/// contribute more imbalance than inboard ones. The slice must already be
/// sized to the engine count (see
/// [`ControlInput::sanitized`](crate::components::ControlInput::sanitized)).
pub fn mix_throttles(throttles: &[f64]) -> ThrottleMix {
    let engine_count = throttles.len();
    let total: f64 = throttles.iter().sum();
    let average = total / engine_count.max(1) as f64;

    let mut yaw_moment = 0.0;
    if engine_count > 1 {
        for (i, throttle) in throttles.iter().enumerate() {
            let side = (i as f64 / (engine_count - 1) as f64) * 2.0 - 1.0;
            yaw_moment += side * throttle;
        }
    }

    ThrottleMix {
        average,
        yaw_moment,
    }
}

/// Forward acceleration produced by the engines at `average_throttle` percent.
pub fn thrust_magnitude(
    average_throttle: f64,
    profile: &VehicleProfile,
    constants: &FlightConstants,
) -> f64 {
    (average_throttle / 100.0) * constants.max_thrust * profile.thrust_mult
}

/// Upward acceleration produced by the wings at `speed`.
///
/// Zero at zero speed and superlinear above it: `speed` enters once through
/// the normalized lift factor and once directly. Flaps add a fixed bonus
/// fraction per notch.
pub fn lift_magnitude(
    speed: f64,
    flaps: u8,
    profile: &VehicleProfile,
    constants: &FlightConstants,
) -> f64 {
    let speed_ceiling = constants.max_speed * profile.max_speed_mult;
    let lift_factor = (speed / speed_ceiling) * (1.0 + flaps as f64 * FLAP_LIFT_BONUS);
    (lift_factor * constants.lift_coefficient * speed * 1000.0 * profile.lift_mult).max(0.0)
}

/// Deceleration opposing the current direction of motion.
///
/// Returns the drag vector directly rather than a magnitude because the
/// direction comes from the velocity itself. At zero speed there is no
/// motion to oppose and the zero vector is returned, which also guards the
/// normalization against dividing by zero.
pub fn drag_force(
    velocity: &Vector3<f64>,
    speed: f64,
    gear: bool,
    flaps: u8,
    profile: &VehicleProfile,
    constants: &FlightConstants,
) -> Vector3<f64> {
    if speed <= 0.0 {
        return Vector3::zeros();
    }

    let mut drag_mag = speed * speed * constants.drag_coefficient * profile.drag_mult;
    if gear {
        drag_mag += GEAR_DRAG;
    }
    drag_mag += flaps as f64 * FLAP_DRAG;

    -(velocity / speed) * drag_mag
}

/// Rotational control authority at `speed`.
///
/// Scales linearly with speed up to a saturation ceiling so a parked
/// aircraft cannot rotate and a fast one answers crisply.
pub fn control_authority(
    speed: f64,
    profile: &VehicleProfile,
    constants: &FlightConstants,
) -> f64 {
    (speed / constants.min_takeoff_speed).min(MAX_AUTHORITY_RATIO)
        * constants.rotation_speed
        * profile.turn_speed_mult
}

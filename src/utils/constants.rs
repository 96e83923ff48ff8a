//! Fixed behavioral factors of the flight model.
//!
//! These are tuning values baked into the feel of the simulation rather
//! than per-aircraft or per-installation knobs, so they live here instead
//! of [`FlightConstants`](crate::resources::FlightConstants).

/// Frame-rate normalization applied to dt-scaled terms.
/// The model was tuned against 60 Hz ticks; multiplying dt by this keeps
/// the tuned feel at other tick rates.
pub const FRAME_RATE_SCALE: f64 = 60.0;

pub const BRAKE_DECAY: f64 = 0.95; // velocity retained per braking tick
pub const BRAKE_GRACE_ALTITUDE: f64 = 0.4; // brake grips below this height AGL
pub const ROLLING_FRICTION: f64 = 0.995; // velocity retained per tick of ground roll

pub const DIFFERENTIAL_YAW_GAIN: f64 = 0.0005; // yaw response to thrust imbalance
pub const GROUND_STEERING_RATE: f64 = 0.02; // rad per unit demand per tick
pub const ROLL_AUTHORITY_RATIO: f64 = 1.5; // roll rate relative to pitch rate
pub const AIRBORNE_YAW_RATIO: f64 = 0.5; // airborne yaw rate relative to pitch rate
pub const MAX_AUTHORITY_RATIO: f64 = 1.5; // ceiling on the authority speed ratio

pub const AUTO_LEVEL_RATE: f64 = 0.5; // velocity swing toward the nose [1/s]
pub const AUTO_LEVEL_MIN_SPEED: f64 = 0.1; // damping disengages below this speed

pub const FLAP_LIFT_BONUS: f64 = 0.3; // extra lift fraction per flap notch
pub const FLAP_DRAG: f64 = 0.002; // extra drag per flap notch
pub const GEAR_DRAG: f64 = 0.001; // extra drag while the gear is extended

pub const STALL_GRACE_ALTITUDE: f64 = 1.4; // stall warning stays quiet below this height AGL

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Maximum number of flap notches.
pub const MAX_FLAP_SETTING: u8 = 2;

/// Pilot inputs for one simulation tick.
///
/// Values arrive from arbitrary sources (keyboard mappers, replay files,
/// agents) and are not trusted: the integrator reads them only through
/// [`ControlInput::sanitized`], which clamps axes into range and replaces
/// non-finite values with neutral ones.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct ControlInput {
    /// Pitch axis demand, positive pitches the nose up [-1, 1]
    pub pitch: f64,

    /// Roll axis demand, positive rolls right [-1, 1]
    pub roll: f64,

    /// Yaw axis demand, positive yaws right [-1, 1]
    pub yaw: f64,

    /// Per-engine throttle settings in percent [0, 100], one entry per engine
    pub throttles: Vec<f64>,

    /// Wheel brake engaged
    pub brake: bool,

    /// Flap notch, 0 = retracted up to [`MAX_FLAP_SETTING`]
    pub flaps: u8,

    /// Landing gear extended
    pub gear: bool,
}

impl Default for ControlInput {
    /// All axes neutral, no throttle entries, gear down.
    ///
    /// Missing throttles read as idle, so this is safe to feed to any
    /// aircraft; [`ControlInput::neutral`] sizes the list explicitly.
    fn default() -> Self {
        Self {
            pitch: 0.0,
            roll: 0.0,
            yaw: 0.0,
            throttles: Vec::new(),
            brake: false,
            flaps: 0,
            gear: true,
        }
    }
}

impl ControlInput {
    /// Neutral controls sized for an aircraft with `engine_count` engines.
    pub fn neutral(engine_count: usize) -> Self {
        Self {
            throttles: vec![0.0; engine_count.max(1)],
            ..Default::default()
        }
    }

    /// Sets every throttle to the same value.
    pub fn set_throttle(&mut self, value: f64) {
        for throttle in &mut self.throttles {
            *throttle = value;
        }
    }

    /// Returns a copy with every field coerced into its legal range.
    ///
    /// Axis values are clamped to [-1, 1] and throttles to [0, 100]; NaN and
    /// infinite entries become 0.0. The throttle list is resized to
    /// `engine_count`, padding with idle. Flaps are capped at
    /// [`MAX_FLAP_SETTING`]. The original input is left untouched so the
    /// caller can still display what was asked for.
    pub fn sanitized(&self, engine_count: usize) -> Self {
        let engine_count = engine_count.max(1);
        let mut throttles: Vec<f64> = self
            .throttles
            .iter()
            .take(engine_count)
            .map(|t| sanitize_axis(*t, 0.0, 100.0))
            .collect();
        throttles.resize(engine_count, 0.0);

        Self {
            pitch: sanitize_axis(self.pitch, -1.0, 1.0),
            roll: sanitize_axis(self.roll, -1.0, 1.0),
            yaw: sanitize_axis(self.yaw, -1.0, 1.0),
            throttles,
            brake: self.brake,
            flaps: self.flaps.min(MAX_FLAP_SETTING),
            gear: self.gear,
        }
    }

    /// Mean of all throttle percentages, 0.0 when the list is empty.
    pub fn average_throttle(&self) -> f64 {
        if self.throttles.is_empty() {
            return 0.0;
        }
        self.throttles.iter().sum::<f64>() / self.throttles.len() as f64
    }
}

fn sanitize_axis(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        0.0
    }
}

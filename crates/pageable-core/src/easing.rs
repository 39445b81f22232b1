//! L4 Atomic Layer: Pure easing functions for page transitions
//!
//! Every easing maps `(elapsed, start, change, duration)` to an interpolated
//! offset: `start` at `elapsed == 0`, `start + change` at `elapsed == duration`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Signature of an easing function: `(elapsed, start, change, duration)`
pub type EasingFn = fn(f64, f64, f64, f64) -> f64;

/// Built-in easing presets selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Quadratic ease-out: decelerates into the destination, no overshoot
    #[default]
    QuadOut,
    /// Cubic ease-out
    CubicOut,
    /// Quintic ease-out
    QuintOut,
    /// Exponential ease-out
    ExpoOut,
    /// Constant speed
    Linear,
}

impl EasingType {
    pub const ALL: [EasingType; 5] = [
        EasingType::QuadOut,
        EasingType::CubicOut,
        EasingType::QuintOut,
        EasingType::ExpoOut,
        EasingType::Linear,
    ];

    /// The function implementing this preset
    pub fn function(self) -> EasingFn {
        match self {
            EasingType::QuadOut => quad_ease_out,
            EasingType::CubicOut => cubic_ease_out,
            EasingType::QuintOut => quint_ease_out,
            EasingType::ExpoOut => expo_ease_out,
            EasingType::Linear => linear,
        }
    }

    /// Apply the preset
    #[inline]
    pub fn apply(self, elapsed: f64, start: f64, change: f64, duration: f64) -> f64 {
        (self.function())(elapsed, start, change, duration)
    }

    pub fn name(self) -> &'static str {
        match self {
            EasingType::QuadOut => "quad-out",
            EasingType::CubicOut => "cubic-out",
            EasingType::QuintOut => "quint-out",
            EasingType::ExpoOut => "expo-out",
            EasingType::Linear => "linear",
        }
    }
}

impl fmt::Display for EasingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EasingType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EasingType::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| Error::UnknownEasing(s.to_string()))
    }
}

/// Normalized progress, 1.0 once the duration has elapsed (or is zero)
#[inline]
fn progress(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        1.0
    } else {
        (elapsed / duration).clamp(0.0, 1.0)
    }
}

/// Quadratic ease-out: `-c * t * (t - 2) + b`
pub fn quad_ease_out(elapsed: f64, start: f64, change: f64, duration: f64) -> f64 {
    let t = progress(elapsed, duration);
    -change * t * (t - 2.0) + start
}

/// Cubic ease-out: `c * (1 - (1-t)³) + b`
pub fn cubic_ease_out(elapsed: f64, start: f64, change: f64, duration: f64) -> f64 {
    let inv = 1.0 - progress(elapsed, duration);
    change * (1.0 - inv * inv * inv) + start
}

/// Quintic ease-out: `c * (1 - (1-t)⁵) + b`
pub fn quint_ease_out(elapsed: f64, start: f64, change: f64, duration: f64) -> f64 {
    let inv = 1.0 - progress(elapsed, duration);
    change * (1.0 - inv * inv * inv * inv * inv) + start
}

/// Exponential ease-out: `c * (1 - 2^(-10t)) + b`
pub fn expo_ease_out(elapsed: f64, start: f64, change: f64, duration: f64) -> f64 {
    let t = progress(elapsed, duration);
    if t >= 1.0 {
        start + change
    } else {
        change * (1.0 - 2.0_f64.powf(-10.0 * t)) + start
    }
}

pub fn linear(elapsed: f64, start: f64, change: f64, duration: f64) -> f64 {
    change * progress(elapsed, duration) + start
}

//! Orbit camera state.

use serde::Serialize;
use welltrace_core::constants::{
    ALPHA_MAX, ALPHA_MIN, DEFAULT_ALPHA, DEFAULT_BETA, DEFAULT_DISTANCE, DISTANCE_MAX,
    DISTANCE_MIN, FIT_DISTANCE_FACTOR, FIT_DISTANCE_MIN,
};
use welltrace_core::{Ranges, ViewPreset};

/// Spherical-coordinate camera around a fixed look-at origin.
///
/// Alpha (elevation) is kept away from the poles to avoid gimbal-lock
/// rendering artifacts; beta (azimuth) is unbounded and wraps
/// implicitly; distance is strictly positive and clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraState {
    /// Elevation in degrees.
    pub alpha: f64,
    /// Azimuth in degrees.
    pub beta: f64,
    pub distance: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            distance: DEFAULT_DISTANCE,
        }
    }
}

impl CameraState {
    /// Clamp elevation and distance into their legal intervals.
    pub fn clamped(self) -> Self {
        Self {
            alpha: self.alpha.clamp(ALPHA_MIN, ALPHA_MAX),
            beta: self.beta,
            distance: self.distance.clamp(DISTANCE_MIN, DISTANCE_MAX),
        }
    }

    /// Apply a view preset's angle pair, keeping the current distance.
    /// Pole-adjacent presets are clamped off the exact pole.
    pub fn with_preset(self, preset: ViewPreset) -> Self {
        let (alpha, beta) = preset.angles();
        Self {
            alpha,
            beta,
            distance: self.distance,
        }
        .clamped()
    }

    /// Distance that frames the given bounds, preserving angles.
    pub fn fitted_to(self, ranges: &Ranges) -> Self {
        let distance = (ranges.max_spatial_span() * FIT_DISTANCE_FACTOR)
            .clamp(FIT_DISTANCE_MIN, DISTANCE_MAX);
        Self { distance, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let s = CameraState::default();
        assert_eq!(s.alpha, 35.0);
        assert_eq!(s.beta, 25.0);
        assert_eq!(s.distance, 250.0);
    }

    #[test]
    fn test_preset_keeps_distance_and_avoids_poles() {
        let s = CameraState {
            distance: 500.0,
            ..CameraState::default()
        };
        let xz = s.with_preset(ViewPreset::Xz);
        assert_eq!(xz.alpha, 0.1);
        assert_eq!(xz.beta, 0.0);
        assert_eq!(xz.distance, 500.0);

        let xy = s.with_preset(ViewPreset::Xy);
        assert_eq!(xy.alpha, 90.0);
        assert_eq!(xy.beta, 0.0);
    }

    #[test]
    fn test_fit_clamps_distance() {
        let tiny = Ranges::UNIT;
        let fitted = CameraState::default().fitted_to(&tiny);
        assert_eq!(fitted.distance, 120.0);
        assert_eq!(fitted.alpha, 35.0);

        let huge = Ranges {
            x_min: 0.0,
            x_max: 10_000.0,
            ..Ranges::UNIT
        };
        assert_eq!(CameraState::default().fitted_to(&huge).distance, 900.0);
    }
}

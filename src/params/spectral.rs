//! Spectral (Phillips / inverse transform) ocean parameters.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Spectral ocean synthesis parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectralParams {
    /// Phillips amplitude constant (A, dimensionless)
    pub phillips_amplitude: f32,

    /// Wind direction in the XY plane (normalised on use)
    pub wind_direction: Vec2,

    /// Wind speed (meters per second)
    /// Largest wave scale is wind_speed² / g; zero gives a flat sea
    pub wind_speed_m_per_s: f32,

    /// Height scale applied to the raw transform output
    /// Also absorbs the missing 1/N² transform normalisation
    pub visual_scale: f32,

    /// Horizontal crest sharpening factor (0 disables)
    pub choppiness: f32,

    /// Seed mixed into the per-index amplitude hash
    pub seed: u64,
}

impl Default for SpectralParams {
    fn default() -> Self {
        Self {
            phillips_amplitude: 1.0,
            wind_direction: Vec2::new(1.0, 1.0),
            wind_speed_m_per_s: 20.0,
            visual_scale: 0.005,
            choppiness: 1.5,
            seed: 0,
        }
    }
}

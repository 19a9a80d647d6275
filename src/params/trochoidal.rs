//! Trochoidal (Gerstner) wave table.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Single trochoidal wave
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveDefinition {
    /// Propagation direction (normalised on use)
    pub direction: Vec2,

    /// Crest-to-crest distance (meters, floored at 10 on use)
    pub wavelength_m: f32,

    /// Horizontal pinch factor, nominally 0..1
    pub steepness: f32,

    /// Crest height (meters)
    pub amplitude_m: f32,
}

impl WaveDefinition {
    pub const fn new(
        dir_x: f32,
        dir_y: f32,
        wavelength_m: f32,
        steepness: f32,
        amplitude_m: f32,
    ) -> Self {
        Self {
            direction: Vec2::new(dir_x, dir_y),
            wavelength_m,
            steepness,
            amplitude_m,
        }
    }
}

/// Reference wave table
///
/// Wavelengths are mutually non-harmonic and directions spread around the
/// compass so the sum does not visibly repeat.
pub const DEFAULT_WAVES: [WaveDefinition; 8] = [
    WaveDefinition::new(1.0, 0.1, 512.0, 0.12, 25.0), // Main swell
    WaveDefinition::new(0.7, 0.5, 233.0, 0.12, 12.0), // Secondary
    WaveDefinition::new(-0.4, 0.8, 113.0, 0.10, 6.0), // Crossing swell
    WaveDefinition::new(0.2, -0.6, 67.0, 0.10, 3.0),  // Counter chop
    WaveDefinition::new(-0.6, -0.2, 41.0, 0.08, 1.5),
    WaveDefinition::new(0.8, -0.4, 23.0, 0.08, 0.8),
    WaveDefinition::new(-0.3, 0.9, 13.0, 0.06, 0.4),
    WaveDefinition::new(0.5, 0.3, 7.0, 0.05, 0.2),
];

/// Trochoidal ocean parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrochoidalParams {
    /// Waves summed every cycle (order does not matter)
    pub waves: Vec<WaveDefinition>,
}

impl Default for TrochoidalParams {
    fn default() -> Self {
        Self {
            waves: DEFAULT_WAVES.to_vec(),
        }
    }
}

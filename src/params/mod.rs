//! Parameter definitions with physical units and documented semantics.
//!
//! All tunables live here with:
//! - Physical units (meters, seconds, etc.)
//! - Documented ranges and meanings
//! - Reference defaults
//!
//! An [`OceanConfig`] can be loaded from RON text; missing fields fall back
//! to the defaults.

mod grid;
mod spectral;
mod trochoidal;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OceanError, Result};

// Re-export all types
pub use grid::Grid;
pub use spectral::SpectralParams;
pub use trochoidal::{TrochoidalParams, WaveDefinition, DEFAULT_WAVES};

/// Resolution above which the O(N³) transform gets noticeably slow
pub const LARGE_RESOLUTION: usize = 128;

/// Which wave model drives the surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WaveModel {
    /// Phillips spectrum evolved in time and brought back by inverse transform
    Spectral(SpectralParams),

    /// Closed-form sum of Gerstner waves
    Trochoidal(TrochoidalParams),
}

impl Default for WaveModel {
    fn default() -> Self {
        Self::Spectral(SpectralParams::default())
    }
}

/// Complete ocean configuration, read fresh every synthesis cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OceanConfig {
    /// Sampling grid
    pub grid: Grid,

    /// Host time multiplier (simulation seconds per host second)
    pub time_scale: f32,

    /// Wave model and its parameters
    pub model: WaveModel,
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self::spectral()
    }
}

impl OceanConfig {
    /// Reference spectral setup (64² samples over 1 km)
    pub fn spectral() -> Self {
        Self {
            grid: Grid::new(64, 1000.0),
            time_scale: 1.0,
            model: WaveModel::Spectral(SpectralParams::default()),
        }
    }

    /// Reference trochoidal setup (64² cells over 2 km, eight waves)
    pub fn trochoidal() -> Self {
        Self {
            grid: Grid::new(64, 2000.0),
            time_scale: 1.0,
            model: WaveModel::Trochoidal(TrochoidalParams::default()),
        }
    }

    /// Parse a configuration from RON text and validate it
    pub fn from_ron_str(text: &str) -> Result<Self> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| OceanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&text)
    }

    /// Render as pretty-printed RON
    pub fn to_ron_string(&self) -> Result<String> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Validate configuration (positive extent, finite parameters, etc.)
    ///
    /// Synthesis is total over any configuration; this only rejects values
    /// that cannot describe an ocean at all.
    pub fn validate(&self) -> Result<()> {
        if self.grid.resolution == 0 {
            return Err(invalid("grid resolution must be at least 1"));
        }
        if !(self.grid.size_m.is_finite() && self.grid.size_m > 0.0) {
            return Err(invalid(format!(
                "grid size must be finite and > 0, got {}",
                self.grid.size_m
            )));
        }
        if !self.time_scale.is_finite() {
            return Err(invalid("time scale must be finite"));
        }
        if self.grid.resolution > LARGE_RESOLUTION {
            log::warn!(
                "resolution {} exceeds {}; the naive transform is O(N³)",
                self.grid.resolution,
                LARGE_RESOLUTION
            );
        }

        match &self.model {
            WaveModel::Spectral(params) => {
                let finite = params.phillips_amplitude.is_finite()
                    && params.wind_direction.is_finite()
                    && params.wind_speed_m_per_s.is_finite()
                    && params.visual_scale.is_finite()
                    && params.choppiness.is_finite();
                if !finite {
                    return Err(invalid("spectral parameters must be finite"));
                }
                if params.phillips_amplitude < 0.0 {
                    return Err(invalid("Phillips amplitude must be >= 0"));
                }
            }
            WaveModel::Trochoidal(params) => {
                for (i, wave) in params.waves.iter().enumerate() {
                    let finite = wave.direction.is_finite()
                        && wave.wavelength_m.is_finite()
                        && wave.steepness.is_finite()
                        && wave.amplitude_m.is_finite();
                    if !finite {
                        return Err(invalid(format!("wave {} has non-finite parameters", i)));
                    }
                    if wave.wavelength_m <= 0.0 {
                        return Err(invalid(format!(
                            "wave {} wavelength must be > 0, got {}",
                            i, wave.wavelength_m
                        )));
                    }
                    if wave.amplitude_m < 0.0 {
                        return Err(invalid(format!("wave {} amplitude must be >= 0", i)));
                    }
                    if !(0.0..=1.0).contains(&wave.steepness) {
                        log::warn!(
                            "wave {} steepness {} outside 0..1; crests may self-intersect",
                            i,
                            wave.steepness
                        );
                    }
                }
            }
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> OceanError {
    OceanError::InvalidConfig(message.into())
}

//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::Result;
use crate::params::{Grid, OceanConfig};

/// Wave model selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    Spectral,
    Trochoidal,
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "oceansynth")]
#[command(about = "Headless ocean surface synthesis", long_about = None)]
pub struct Args {
    /// Wave model (ignored when --config is given)
    #[arg(long, value_enum, default_value = "spectral")]
    pub model: ModelArg,

    /// RON configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override grid resolution (samples per axis)
    #[arg(long, value_name = "N")]
    pub resolution: Option<usize>,

    /// Override patch size (meters)
    #[arg(long, value_name = "METERS")]
    pub size: Option<f32>,

    /// Override time scale
    #[arg(long, value_name = "FACTOR")]
    pub time_scale: Option<f32>,

    /// Number of cycles to run
    #[arg(long, default_value_t = 60)]
    pub frames: u32,

    /// Host time between cycles (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Write the final heightmap to this PNG
    #[arg(long, value_name = "FILE")]
    pub heightmap: Option<PathBuf>,

    /// Write the final interleaved vertex buffer to this file
    #[arg(long, value_name = "FILE")]
    pub vertices: Option<PathBuf>,

    /// Print the effective configuration as RON and exit
    #[arg(long)]
    pub dump_config: bool,
}

impl Args {
    /// Build the effective configuration: file or model preset, then overrides
    pub fn build_config(&self) -> Result<OceanConfig> {
        let mut config = match &self.config {
            Some(path) => OceanConfig::load(path)?,
            None => match self.model {
                ModelArg::Spectral => OceanConfig::spectral(),
                ModelArg::Trochoidal => OceanConfig::trochoidal(),
            },
        };

        if let Some(resolution) = self.resolution {
            config.grid = Grid {
                resolution,
                ..config.grid
            };
        }
        if let Some(size) = self.size {
            config.grid.size_m = size;
        }
        if let Some(time_scale) = self.time_scale {
            config.time_scale = time_scale;
        }

        config.validate()?;
        Ok(config)
    }

    /// Host time of cycle `frame`
    pub fn frame_time(&self, frame: u32) -> f32 {
        frame as f32 * self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::WaveModel;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["oceansynth"]);
        assert_eq!(args.model, ModelArg::Spectral);
        assert_eq!(args.frames, 60);
        let config = args.build_config().unwrap();
        assert_eq!(config, OceanConfig::spectral());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "oceansynth",
            "--model",
            "trochoidal",
            "--resolution",
            "16",
            "--size",
            "500",
            "--time-scale",
            "2",
        ]);
        let config = args.build_config().unwrap();
        assert!(matches!(config.model, WaveModel::Trochoidal(_)));
        assert_eq!(config.grid, Grid::new(16, 500.0));
        assert_eq!(config.time_scale, 2.0);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let args = Args::parse_from(["oceansynth", "--resolution", "0"]);
        assert!(args.build_config().is_err());
    }

    #[test]
    fn test_frame_time() {
        let args = Args::parse_from(["oceansynth", "--dt", "0.5"]);
        assert_eq!(args.frame_time(4), 2.0);
    }
}

//! Oceansynth library - CPU ocean surface synthesis
//!
//! Two independent wave models fill the same (N + 1)² vertex grid:
//! a Phillips spectrum brought to the spatial domain by a naive inverse
//! transform, and a closed-form sum of Gerstner waves.

pub mod cli;
pub mod error;
pub mod export;
pub mod ocean;
pub mod params;
pub mod spectral;
pub mod trochoidal;

pub use error::{OceanError, Result};

//! Spectral ocean synthesis.
//!
//! One cycle runs, in order and each on the full output of the previous stage:
//! spectrum generation → time evolution → separable inverse transform →
//! height mapping → normal estimation → choppy displacement.
//! Nothing is carried between cycles, so the surface is a pure function of
//! (grid, parameters, time).

pub mod evolve;
pub mod hash;
pub mod heightfield;
pub mod idft;
pub mod spectrum;
pub mod wave_vector;

use rustfft::num_complex::Complex32;

use crate::ocean::{normals, VertexGrid};
use crate::params::{Grid, SpectralParams};

pub use idft::SeparableInverseTransform;
pub use spectrum::SpectralAmplitude;
pub use wave_vector::{GRAVITY, K_EPSILON};

/// Raw complex height field (N×N, real part used) at `time_s`
pub fn height_field(grid: &Grid, params: &SpectralParams, time_s: f32) -> Vec<Complex32> {
    let amplitude = spectrum::generate(grid, params);
    let evolved = evolve::evolve(grid, &amplitude, time_s);
    SeparableInverseTransform::new(grid.n()).process(&evolved)
}

/// Run a full spectral cycle into `surface`
///
/// Returns `false` if the surface does not match the grid; the cycle is then
/// skipped and the surface left as it was.
pub fn synthesize(
    grid: &Grid,
    params: &SpectralParams,
    time_s: f32,
    surface: &mut VertexGrid,
) -> bool {
    if !surface.fits(grid) {
        log::debug!(
            "skipping spectral cycle: surface is {}², grid needs {}²",
            surface.dim(),
            grid.vertex_dim()
        );
        return false;
    }

    let field = height_field(grid, params, time_s);
    if !heightfield::map_heights(grid, &field, params.visual_scale, surface) {
        return false;
    }
    normals::estimate_periodic(grid, surface);
    heightfield::apply_choppiness(grid, params.choppiness, surface);
    true
}

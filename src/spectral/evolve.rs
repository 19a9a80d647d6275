//! Time evolution of the initial spectrum.

use rustfft::num_complex::Complex32;

use super::spectrum::SpectralAmplitude;
use super::wave_vector::{dispersion, wave_vector, K_EPSILON};
use crate::params::Grid;

/// Spectrum at time `time_s`
///
/// `h̃(k, t) = h0 · e^{iωt} + h0_conj · e^{−iωt}`, with ω from the dispersion
/// relation. The DC sample (|k| < ε) is forced to exactly zero so the
/// surface has no centre spike.
pub fn evolve(grid: &Grid, spectrum: &SpectralAmplitude, time_s: f32) -> Vec<Complex32> {
    let n = grid.n();
    let mut evolved = vec![Complex32::new(0.0, 0.0); grid.sample_count()];
    if spectrum.h0.len() < evolved.len() || spectrum.h0_conj.len() < evolved.len() {
        log::debug!(
            "spectrum holds {} samples, grid needs {}; leaving it flat",
            spectrum.h0.len().min(spectrum.h0_conj.len()),
            evolved.len()
        );
        return evolved;
    }

    for m in 0..n {
        for col in 0..n {
            let index = m * n + col;
            let k_length = wave_vector(grid, m, col).length();
            if k_length < K_EPSILON {
                continue;
            }

            let phase = dispersion(k_length) * time_s;
            let forward = Complex32::new(phase.cos(), phase.sin());
            let backward = Complex32::new((-phase).cos(), (-phase).sin());
            evolved[index] = spectrum.h0[index] * forward + spectrum.h0_conj[index] * backward;
        }
    }

    evolved
}

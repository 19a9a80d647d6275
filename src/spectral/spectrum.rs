//! Phillips spectrum and initial complex amplitudes.

use rustfft::num_complex::Complex32;
use std::f32::consts::PI;

use super::hash::spectral_hash;
use super::wave_vector::{wave_vector, GRAVITY};
use crate::params::{Grid, SpectralParams};

/// |k| below this has zero spectral density
const PHILLIPS_K_EPSILON: f32 = 1e-6;

/// Floor for the first uniform draw before taking its logarithm
const LOG_FLOOR: f32 = 1e-4;

/// Initial spectrum h0 and its conjugate, row-major N×N
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralAmplitude {
    pub h0: Vec<Complex32>,
    pub h0_conj: Vec<Complex32>,
}

/// Phillips spectral density at wave vector k
///
/// `P(k) = A · exp(−1 / (|k|² L²)) / |k|⁴ · (k̂·ŵ)²` with `L = V² / g`.
/// Returns 0 for a vanishing wave vector, wind direction or wind speed.
pub fn phillips(k: glam::Vec2, params: &SpectralParams) -> f32 {
    let k_length = k.length();
    if k_length < PHILLIPS_K_EPSILON {
        return 0.0;
    }

    let wind = params.wind_direction.normalize_or_zero();
    let l = params.wind_speed_m_per_s * params.wind_speed_m_per_s / GRAVITY;
    let k_length2 = k_length * k_length;
    let denominator = k_length2 * l * l;
    if denominator <= 0.0 {
        return 0.0;
    }

    let alignment = (k / k_length).dot(wind);
    let p = params.phillips_amplitude * (-1.0 / denominator).exp() / (k_length2 * k_length2)
        * alignment
        * alignment;
    if p.is_finite() {
        p.max(0.0)
    } else {
        0.0
    }
}

/// Generate h0 and h0_conj for every sample of the grid
///
/// Each amplitude is a Box–Muller style draw scaled by sqrt(P/2), using the
/// index hash instead of a stateful RNG.
pub fn generate(grid: &Grid, params: &SpectralParams) -> SpectralAmplitude {
    let n = grid.n();
    let mut h0 = Vec::with_capacity(grid.sample_count());
    let mut h0_conj = Vec::with_capacity(grid.sample_count());

    for m in 0..n {
        for col in 0..n {
            let index = m * n + col;
            let p = phillips(wave_vector(grid, m, col), params);

            let (r1, r2) = spectral_hash(index, params.seed);
            let noise = (-2.0 * r1.max(LOG_FLOOR).ln()).sqrt();
            let scale = noise * (p * 0.5).sqrt();
            let angle = 2.0 * PI * r2;

            let value = Complex32::new(scale * angle.cos(), scale * angle.sin());
            h0.push(value);
            h0_conj.push(value.conj());
        }
    }

    SpectralAmplitude { h0, h0_conj }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_phillips_zero_vector() {
        let params = SpectralParams::default();
        assert_eq!(phillips(Vec2::ZERO, &params), 0.0);
    }

    #[test]
    fn test_phillips_perpendicular_to_wind() {
        let params = SpectralParams {
            wind_direction: Vec2::new(1.0, 0.0),
            ..Default::default()
        };
        assert_eq!(phillips(Vec2::new(0.0, 0.05), &params), 0.0);
        assert!(phillips(Vec2::new(0.05, 0.0), &params) > 0.0);
    }

    #[test]
    fn test_phillips_zero_wind_speed() {
        let params = SpectralParams {
            wind_speed_m_per_s: 0.0,
            ..Default::default()
        };
        assert_eq!(phillips(Vec2::new(0.1, 0.1), &params), 0.0);
    }

    #[test]
    fn test_conjugate_pairs() {
        let grid = Grid::new(16, 500.0);
        let spectrum = generate(&grid, &SpectralParams::default());
        assert_eq!(spectrum.h0.len(), 256);
        for (h, hc) in spectrum.h0.iter().zip(&spectrum.h0_conj) {
            assert_eq!(h.re, hc.re);
            assert_eq!(h.im, -hc.im);
        }
    }

    #[test]
    fn test_dc_sample_is_zero() {
        let grid = Grid::new(16, 500.0);
        let spectrum = generate(&grid, &SpectralParams::default());
        let dc = 8 * 16 + 8;
        assert_eq!(spectrum.h0[dc], Complex32::new(0.0, 0.0));
        assert_eq!(spectrum.h0_conj[dc], Complex32::new(0.0, 0.0));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let grid = Grid::new(16, 500.0);
        let params = SpectralParams::default();
        assert_eq!(generate(&grid, &params), generate(&grid, &params));
    }

    #[test]
    fn test_amplitudes_are_finite() {
        let grid = Grid::new(8, 1e-3);
        let params = SpectralParams {
            wind_speed_m_per_s: 1e6,
            ..Default::default()
        };
        let spectrum = generate(&grid, &params);
        assert!(spectrum.h0.iter().all(|c| c.re.is_finite() && c.im.is_finite()));
    }
}

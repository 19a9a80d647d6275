//! Wave vectors and the deep-water dispersion relation.

use glam::Vec2;
use std::f32::consts::PI;

use crate::params::Grid;

/// Gravitational acceleration (m/s²)
pub const GRAVITY: f32 = 9.81;

/// Wave-vector magnitudes below this are treated as the DC term
pub const K_EPSILON: f32 = 1e-4;

/// Wave vector of spectral sample (m, n)
///
/// Indices are centred so sample (N/2, N/2) is the zero vector:
/// `k = (2π(n − N/2) / L, 2π(m − N/2) / L)`. A degenerate patch size gives
/// the zero vector everywhere.
pub fn wave_vector(grid: &Grid, m: usize, n: usize) -> Vec2 {
    let size = grid.extent_m();
    if size <= 0.0 {
        return Vec2::ZERO;
    }
    let half = grid.n() as f32 / 2.0;
    let kx = 2.0 * PI * (n as f32 - half) / size;
    let ky = 2.0 * PI * (m as f32 - half) / size;
    Vec2::new(kx, ky)
}

/// Angular frequency ω(k) = sqrt(g·|k|)
pub fn dispersion(k_length: f32) -> f32 {
    (GRAVITY * k_length.max(0.0)).sqrt()
}

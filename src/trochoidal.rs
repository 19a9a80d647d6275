//! Trochoidal (Gerstner) wave superposition.
//!
//! Each wave moves surface points on a circle-like path: up and down with
//! `amplitude · sin θ` and back and forth along its direction with
//! `steepness · amplitude · cos θ`. Contributions are summed from the flat
//! base position every cycle, so the result depends only on the wave table
//! and the time.

use glam::{Vec2, Vec3};
use std::f32::consts::PI;

use crate::ocean::{normals, VertexGrid};
use crate::params::{Grid, WaveDefinition};
use crate::spectral::GRAVITY;

/// Wavelengths are floored here to keep the wavenumber well away from zero
pub const MIN_WAVELENGTH_M: f32 = 10.0;

/// Displacement of the point at `base` caused by one wave at `time_s`
pub fn wave_displacement(base: Vec2, wave: &WaveDefinition, time_s: f32) -> Vec3 {
    let wavelength = wave.wavelength_m.max(MIN_WAVELENGTH_M);
    let k = 2.0 * PI / wavelength;
    let c = (GRAVITY / k).sqrt(); // Phase speed from dispersion relation
    let dir = wave.direction.normalize_or_zero();
    let theta = k * (dir.dot(base) - c * time_s);

    let horizontal = wave.steepness * wave.amplitude_m * theta.cos();
    (-dir * horizontal).extend(wave.amplitude_m * theta.sin())
}

/// Displaced position of the point at `base` under all waves
pub fn displaced_position(base: Vec2, waves: &[WaveDefinition], time_s: f32) -> Vec3 {
    waves
        .iter()
        .fold(base.extend(0.0), |position, wave| {
            position + wave_displacement(base, wave, time_s)
        })
}

/// Run a full trochoidal cycle into `surface`
///
/// Positions are replaced outright, then normals are re-estimated from the
/// displaced positions. Returns `false` without touching the surface when
/// it does not match the grid.
pub fn synthesize(
    grid: &Grid,
    waves: &[WaveDefinition],
    time_s: f32,
    surface: &mut VertexGrid,
) -> bool {
    if !surface.fits(grid) {
        log::debug!(
            "skipping trochoidal cycle: surface is {}², grid needs {}²",
            surface.dim(),
            grid.vertex_dim()
        );
        return false;
    }

    let dim = grid.vertex_dim();
    for m in 0..dim {
        for n in 0..dim {
            let index = surface.index(m, n);
            surface.positions[index] = displaced_position(grid.base_position(m, n), waves, time_s);
        }
    }
    normals::estimate_clamped(surface);
    true
}

//! Height-field to vertex-grid mapping and choppy horizontal displacement.

use glam::Vec2;
use rustfft::num_complex::Complex32;

use crate::ocean::VertexGrid;
use crate::params::Grid;

/// Choppy offsets never exceed this fraction of the cell step per axis
pub const MAX_CHOP_FRACTION: f32 = 0.4;

/// Write scaled heights from the N×N transform output onto the vertex grid
///
/// Vertex (m, n) reads sample (m mod N, n mod N), so row/column N repeats
/// row/column 0 and the patch tiles seamlessly. Planar coordinates are reset
/// to the undisplaced grid. Returns `false` and leaves the surface untouched
/// when either buffer is too small (e.g. mid-reconfiguration).
pub fn map_heights(
    grid: &Grid,
    field: &[Complex32],
    visual_scale: f32,
    surface: &mut VertexGrid,
) -> bool {
    if !surface.fits(grid) || field.len() < grid.sample_count() {
        log::debug!(
            "skipping height mapping: {} vertices / {} samples for a {}² grid",
            surface.positions.len(),
            field.len(),
            grid.n()
        );
        return false;
    }

    let cells = grid.n();
    let dim = grid.vertex_dim();
    for m in 0..dim {
        for n in 0..dim {
            let sample = (m % cells) * cells + n % cells;
            let height = field[sample].re * visual_scale;
            let index = surface.index(m, n);
            surface.positions[index] = grid.base_position(m, n).extend(height);
        }
    }
    true
}

/// Clamp one offset component, treating NaN as no offset
fn clamp_offset(value: f32, limit: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-limit, limit)
    }
}

/// Horizontal offset of a vertex before it is subtracted from its base position
///
/// `normal.xy · choppiness · height · 0.5`, clamped per axis to
/// `MAX_CHOP_FRACTION` of the cell step so neighbouring vertices cannot cross.
pub fn chop_offset(normal_xy: Vec2, height: f32, choppiness: f32, step: f32) -> Vec2 {
    let limit = (MAX_CHOP_FRACTION * step).abs();
    let raw = normal_xy * choppiness * height * 0.5;
    Vec2::new(clamp_offset(raw.x, limit), clamp_offset(raw.y, limit))
}

/// Pull vertices toward wave crests along the horizontal part of their normals
///
/// Must run after normals are estimated; heights are left as they are.
pub fn apply_choppiness(grid: &Grid, choppiness: f32, surface: &mut VertexGrid) {
    if choppiness <= 0.0 || !surface.fits(grid) {
        return;
    }

    let step = grid.step();
    let dim = grid.vertex_dim();
    for m in 0..dim {
        for n in 0..dim {
            let index = surface.index(m, n);
            let position = surface.positions[index];
            let offset = chop_offset(
                surface.normals[index].truncate(),
                position.z,
                choppiness,
                step,
            );
            let planar = grid.base_position(m, n) - offset;
            surface.positions[index] = planar.extend(position.z);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn ramp_field(grid: &Grid) -> Vec<Complex32> {
        (0..grid.sample_count())
            .map(|i| Complex32::new(i as f32, 99.0))
            .collect()
    }

    #[test]
    fn test_wraparound_seam() {
        let grid = Grid::new(8, 80.0);
        let mut surface = VertexGrid::flat(&grid);
        assert!(map_heights(&grid, &ramp_field(&grid), 0.5, &mut surface));

        for i in 0..=8 {
            assert_eq!(surface.height(8, i), surface.height(0, i));
            assert_eq!(surface.height(i, 8), surface.height(i, 0));
        }
        assert_eq!(surface.height(1, 2), (8 + 2) as f32 * 0.5);
    }

    #[test]
    fn test_undersized_surface_is_skipped() {
        let grid = Grid::new(8, 80.0);
        let mut surface = VertexGrid::flat(&Grid::new(4, 80.0));
        let before = surface.clone();
        assert!(!map_heights(&grid, &ramp_field(&grid), 1.0, &mut surface));
        assert_eq!(surface, before);

        let mut surface = VertexGrid::flat(&grid);
        let before = surface.clone();
        assert!(!map_heights(&grid, &[Complex32::new(1.0, 0.0); 10], 1.0, &mut surface));
        assert_eq!(surface, before);
    }

    #[test]
    fn test_chop_offset_is_clamped() {
        let step = 10.0;
        let limit = MAX_CHOP_FRACTION * step;
        for height in [1e3, -1e6, 1e30, f32::MAX, f32::INFINITY, f32::NEG_INFINITY] {
            for normal in [Vec2::new(0.7, -0.7), Vec2::new(1.0, 0.0), Vec2::new(-0.2, 0.9)] {
                let offset = chop_offset(normal, height, 1.5, step);
                assert!(offset.x.abs() <= limit, "x offset {} for h={}", offset.x, height);
                assert!(offset.y.abs() <= limit, "y offset {} for h={}", offset.y, height);
            }
        }
    }

    #[test]
    fn test_chop_offset_nan_is_zero() {
        let offset = chop_offset(Vec2::new(0.0, 1.0), f32::INFINITY, 1.5, 10.0);
        assert_eq!(offset.x, 0.0);
        assert_eq!(offset.y, 4.0);
    }

    #[test]
    fn test_choppiness_moves_against_normal() {
        let grid = Grid::new(4, 40.0);
        let mut surface = VertexGrid::flat(&grid);
        let index = surface.index(1, 1);
        surface.positions[index].z = 2.0;
        surface.normals[index] = Vec3::new(0.6, 0.0, 0.8);

        apply_choppiness(&grid, 1.5, &mut surface);

        // 0.6 * 1.5 * 2.0 * 0.5 = 0.9, under the 4.0 limit
        let p = surface.positions[index];
        assert!((p.x - (10.0 - 0.9)).abs() < 1e-5);
        assert_eq!(p.y, 10.0);
        assert_eq!(p.z, 2.0);
    }

    #[test]
    fn test_zero_choppiness_keeps_base_positions() {
        let grid = Grid::new(4, 40.0);
        let mut surface = VertexGrid::flat(&grid);
        surface.positions[3].z = 5.0;
        surface.normals[3] = Vec3::new(1.0, 0.0, 0.0);
        let before = surface.clone();
        apply_choppiness(&grid, 0.0, &mut surface);
        assert_eq!(surface, before);
    }
}

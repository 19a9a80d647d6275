//! Finite-difference vertex normals.
//!
//! Both variants take the cross product of a "right" edge (+X) and a
//! "bottom" edge (+Y), so a flat sea gets normals pointing +Z.

use glam::Vec3;

use super::mesh::VertexGrid;
use crate::params::Grid;

/// Unit normal, or +Z when the edges are degenerate
fn safe_normal(v: Vec3) -> Vec3 {
    let normal = v.normalize_or_zero();
    if normal == Vec3::ZERO {
        Vec3::Z
    } else {
        normal
    }
}

/// Normals of a periodic height field (spectral surface)
///
/// Only heights are read; edges use the fixed planar step. The last
/// row/column duplicates the first, so its neighbour is index 1 rather
/// than the zero-length edge to index 0.
pub fn estimate_periodic(grid: &Grid, surface: &mut VertexGrid) {
    if !surface.fits(grid) {
        return;
    }

    let cells = grid.n();
    let dim = grid.vertex_dim();
    let step = grid.step();

    for m in 0..dim {
        let m_next = if m == cells { 1 } else { m + 1 };
        for n in 0..dim {
            let n_next = if n == cells { 1 } else { n + 1 };

            let height = surface.height(m, n);
            let right = Vec3::new(step, 0.0, surface.height(m, n_next) - height);
            let bottom = Vec3::new(0.0, step, surface.height(m_next, n) - height);

            let index = surface.index(m, n);
            surface.normals[index] = safe_normal(right.cross(bottom));
        }
    }
}

/// Normals of a displaced, non-periodic surface (trochoidal surface)
///
/// Edges are full 3D differences between displaced positions. The last
/// row/column looks backwards and flips that edge so it still points +X/+Y.
pub fn estimate_clamped(surface: &mut VertexGrid) {
    let dim = surface.dim();
    if dim < 2 || surface.positions.len() < dim * dim || surface.normals.len() < dim * dim {
        return;
    }
    let last = dim - 1;

    for m in 0..dim {
        for n in 0..dim {
            let current = surface.positions[surface.index(m, n)];

            let right = if n == last {
                current - surface.positions[surface.index(m, n - 1)]
            } else {
                surface.positions[surface.index(m, n + 1)] - current
            };
            let bottom = if m == last {
                current - surface.positions[surface.index(m - 1, n)]
            } else {
                surface.positions[surface.index(m + 1, n)] - current
            };

            let index = surface.index(m, n);
            surface.normals[index] = safe_normal(right.cross(bottom));
        }
    }
}

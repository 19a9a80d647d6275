//! Ocean grid mesh: setup-time topology and the per-cycle vertex grid.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::params::Grid;

/// Interleaved vertex record for GPU upload (position + normal + UV)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Invariant mesh tables, generated once per grid
///
/// Vertices are laid out row-major over (N + 1)² points; rows follow Y,
/// columns follow X, Z is up.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub normals: Vec<Vec3>,
    pub tangents: Vec<Vec3>,
    pub colors: Vec<[u8; 4]>,
    /// Two triangles per cell
    pub indices: Vec<u32>,
}

impl Topology {
    /// Create the flat grid tables for `grid`
    pub fn new(grid: &Grid) -> Self {
        let cells = grid.n();
        let dim = grid.vertex_dim();
        let count = grid.vertex_count();

        let mut positions = Vec::with_capacity(count);
        let mut uvs = Vec::with_capacity(count);

        for m in 0..dim {
            for n in 0..dim {
                positions.push(grid.base_position(m, n).extend(0.0));
                uvs.push(grid.uv(m, n));
            }
        }

        // Triangle indices: (current, bottom, right), (right, bottom, bottom_right)
        let mut indices = Vec::with_capacity(cells * cells * 6);
        for m in 0..cells {
            for n in 0..cells {
                let current = (m * dim + n) as u32;
                let right = current + 1;
                let bottom = current + dim as u32;
                let bottom_right = bottom + 1;

                indices.extend_from_slice(&[current, bottom, right, right, bottom, bottom_right]);
            }
        }

        Self {
            positions,
            uvs,
            normals: vec![Vec3::Z; count],
            tangents: vec![Vec3::X; count],
            colors: vec![[255; 4]; count],
            indices,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Interleaved records of the flat grid, ready for upload
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((position, normal), uv)| Vertex {
                position: position.to_array(),
                normal: normal.to_array(),
                uv: uv.to_array(),
            })
            .collect()
    }
}

/// Per-cycle surface state: displaced positions and unit normals
#[derive(Debug, Clone, PartialEq)]
pub struct VertexGrid {
    dim: usize,
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
}

impl VertexGrid {
    /// Undisplaced surface for `grid` (flat, normals up)
    pub fn flat(grid: &Grid) -> Self {
        let dim = grid.vertex_dim();
        let positions = (0..dim)
            .flat_map(|m| (0..dim).map(move |n| (m, n)))
            .map(|(m, n)| grid.base_position(m, n).extend(0.0))
            .collect();
        Self {
            dim,
            positions,
            normals: vec![Vec3::Z; dim * dim],
        }
    }

    /// Vertices per axis
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Whether the buffers are large enough for `grid`
    pub fn fits(&self, grid: &Grid) -> bool {
        let needed = grid.vertex_count();
        self.dim == grid.vertex_dim()
            && self.positions.len() >= needed
            && self.normals.len() >= needed
    }

    pub fn index(&self, m: usize, n: usize) -> usize {
        m * self.dim + n
    }

    pub fn height(&self, m: usize, n: usize) -> f32 {
        self.positions[self.index(m, n)].z
    }

    /// (min, max) vertex height, `None` for an empty grid
    pub fn height_range(&self) -> Option<(f32, f32)> {
        self.positions.iter().map(|p| p.z).fold(None, |range, z| match range {
            None => Some((z, z)),
            Some((lo, hi)) => Some((lo.min(z), hi.max(z))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_sizes() {
        let grid = Grid::new(16, 100.0);
        let topology = Topology::new(&grid);

        // Check vertex count: (resolution + 1)^2
        assert_eq!(topology.positions.len(), 17 * 17);
        assert_eq!(topology.uvs.len(), 17 * 17);
        assert_eq!(topology.colors.len(), 17 * 17);

        // Check triangle count: resolution^2 * 2 triangles * 3 indices
        assert_eq!(topology.indices.len(), 16 * 16 * 6);
        assert_eq!(topology.triangle_count(), 2 * 16 * 16);
    }

    #[test]
    fn test_topology_first_cell_winding() {
        let topology = Topology::new(&Grid::new(4, 4.0));
        assert_eq!(&topology.indices[..6], &[0, 5, 1, 1, 5, 6]);
        let max = *topology.indices.iter().max().unwrap();
        assert_eq!(max as usize, topology.positions.len() - 1);
    }

    #[test]
    fn test_uv_range_and_defaults() {
        let topology = Topology::new(&Grid::new(8, 50.0));
        assert_eq!(topology.uvs[0], Vec2::ZERO);
        assert_eq!(*topology.uvs.last().unwrap(), Vec2::ONE);
        assert!(topology.normals.iter().all(|&n| n == Vec3::Z));
        assert!(topology.tangents.iter().all(|&t| t == Vec3::X));
    }

    #[test]
    fn test_flat_grid_matches_topology() {
        let grid = Grid::new(8, 50.0);
        let surface = VertexGrid::flat(&grid);
        assert_eq!(surface.positions, Topology::new(&grid).positions);
        assert!(surface.fits(&grid));
        assert!(!surface.fits(&Grid::new(9, 50.0)));
        assert_eq!(surface.height_range(), Some((0.0, 0.0)));
    }

    #[test]
    fn test_vertices_are_pod() {
        let grid = Grid::new(2, 2.0);
        let topology = Topology::new(&grid);
        let vertices = topology.vertices();
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 9 * std::mem::size_of::<Vertex>());
        assert_eq!(vertices[4].position, [1.0, 1.0, 0.0]);
        assert_eq!(vertices[4].uv, [0.5, 0.5]);
    }
}

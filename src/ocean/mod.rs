//! Ocean surface: mesh tables, per-cycle vertex grid and the consumer contract.

mod mesh;
pub mod normals;
mod system;

use glam::Vec3;

// Re-export public types
pub use mesh::{Topology, Vertex, VertexGrid};
pub use system::{synthesize, synthesize_into, OceanSystem};

/// Renderable mesh fed by the ocean
///
/// `rebuild_topology` runs once at setup (and again when the grid changes);
/// `update_geometry` runs every cycle. The ocean never creates or destroys
/// topology itself.
pub trait SurfaceMesh {
    fn rebuild_topology(&mut self, topology: &Topology);
    fn update_geometry(&mut self, positions: &[Vec3], normals: &[Vec3]);
}

/// In-memory mesh holding interleaved vertices ready for upload
#[derive(Debug, Clone, Default)]
pub struct MeshBuffers {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// Geometry updates received since the last topology rebuild
    pub updates: usize,
}

impl MeshBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw vertex bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl SurfaceMesh for MeshBuffers {
    fn rebuild_topology(&mut self, topology: &Topology) {
        self.indices = topology.indices.clone();
        self.vertices = topology.vertices();
        self.updates = 0;
    }

    fn update_geometry(&mut self, positions: &[Vec3], normals: &[Vec3]) {
        for ((vertex, position), normal) in self.vertices.iter_mut().zip(positions).zip(normals) {
            vertex.position = position.to_array();
            vertex.normal = normal.to_array();
        }
        self.updates += 1;
    }
}

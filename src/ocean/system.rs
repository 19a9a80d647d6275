//! High-level ocean system driven once per host frame.

use super::mesh::{Topology, VertexGrid};
use super::SurfaceMesh;
use crate::params::{OceanConfig, WaveModel};
use crate::{spectral, trochoidal};

/// Run one synthesis cycle of `config` into `surface`
///
/// Returns `false` (surface untouched) when the surface does not match the
/// configured grid.
pub fn synthesize_into(config: &OceanConfig, host_time_s: f32, surface: &mut VertexGrid) -> bool {
    let time_s = host_time_s * config.time_scale;
    match &config.model {
        WaveModel::Spectral(params) => spectral::synthesize(&config.grid, params, time_s, surface),
        WaveModel::Trochoidal(params) => {
            trochoidal::synthesize(&config.grid, &params.waves, time_s, surface)
        }
    }
}

/// Run one synthesis cycle of `config` into a freshly allocated surface
pub fn synthesize(config: &OceanConfig, host_time_s: f32) -> VertexGrid {
    let mut surface = VertexGrid::flat(&config.grid);
    synthesize_into(config, host_time_s, &mut surface);
    surface
}

/// Ocean with its configuration, mesh tables and current surface
pub struct OceanSystem {
    config: OceanConfig,
    topology: Topology,
    surface: VertexGrid,
}

impl OceanSystem {
    /// Create new ocean system with the given configuration
    pub fn new(config: OceanConfig) -> Self {
        let topology = Topology::new(&config.grid);
        let surface = VertexGrid::flat(&config.grid);
        log::info!(
            "ocean: {} model, {}² cells over {} m, {} triangles",
            model_name(&config.model),
            config.grid.n(),
            config.grid.size_m,
            topology.triangle_count()
        );
        Self {
            config,
            topology,
            surface,
        }
    }

    pub fn config(&self) -> &OceanConfig {
        &self.config
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn surface(&self) -> &VertexGrid {
        &self.surface
    }

    /// Install a new configuration
    ///
    /// Treated as a fresh configuration rather than a delta. Returns `true`
    /// when the grid changed and the consumer's topology must be rebuilt.
    pub fn reconfigure(&mut self, config: OceanConfig) -> bool {
        let grid_changed = config.grid != self.config.grid;
        if grid_changed {
            log::debug!(
                "grid changed from {}² to {}², rebuilding topology",
                self.config.grid.n(),
                config.grid.n()
            );
            self.topology = Topology::new(&config.grid);
            self.surface = VertexGrid::flat(&config.grid);
        }
        self.config = config;
        grid_changed
    }

    /// Recompute the surface for host time `host_time_s` (seconds)
    ///
    /// Returns `false` if the cycle was skipped.
    pub fn update(&mut self, host_time_s: f32) -> bool {
        synthesize_into(&self.config, host_time_s, &mut self.surface)
    }

    /// Hand the topology to a mesh consumer (setup, or after a grid change)
    pub fn attach<M: SurfaceMesh>(&self, mesh: &mut M) {
        mesh.rebuild_topology(&self.topology);
    }

    /// Hand the current geometry to a mesh consumer
    pub fn present<M: SurfaceMesh>(&self, mesh: &mut M) {
        mesh.update_geometry(&self.surface.positions, &self.surface.normals);
    }
}

fn model_name(model: &WaveModel) -> &'static str {
    match model {
        WaveModel::Spectral(_) => "spectral",
        WaveModel::Trochoidal(_) => "trochoidal",
    }
}

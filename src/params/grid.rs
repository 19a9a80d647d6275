//! Grid resolution and physical extent shared by both wave models.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Regular square sampling grid
///
/// `resolution` spectral samples per axis cover `size_m` world units per axis.
/// The renderable vertex grid has one extra row and column so the last
/// row/column can duplicate the first (seamless tiling).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grid {
    /// Spectral samples per axis (N)
    pub resolution: usize,

    /// Physical size of the patch per axis (meters, L)
    pub size_m: f32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            resolution: 64,
            size_m: 1000.0,
        }
    }
}

impl Grid {
    /// Create a grid, clamping the resolution to at least one sample
    ///
    /// A size that is not finite and positive is kept as given (so
    /// `validate` can report it) but collapses the patch to a point.
    pub fn new(resolution: usize, size_m: f32) -> Self {
        Self {
            resolution: resolution.max(1),
            size_m,
        }
    }

    /// Samples per axis, never zero
    pub fn n(&self) -> usize {
        self.resolution.max(1)
    }

    /// Number of spectral samples (N²)
    pub fn sample_count(&self) -> usize {
        self.n() * self.n()
    }

    /// Vertices per axis (N + 1)
    pub fn vertex_dim(&self) -> usize {
        self.n() + 1
    }

    /// Number of vertices ((N + 1)²)
    pub fn vertex_count(&self) -> usize {
        self.vertex_dim() * self.vertex_dim()
    }

    /// Distance between neighbouring vertices (L / N)
    pub fn step(&self) -> f32 {
        self.extent_m() / self.n() as f32
    }

    /// Patch size used for geometry: `size_m`, or 0 when it is not finite
    /// and positive
    pub fn extent_m(&self) -> f32 {
        if self.size_m.is_finite() && self.size_m > 0.0 {
            self.size_m
        } else {
            0.0
        }
    }

    /// Texture coordinate of vertex (m, n), in [0, 1]²
    pub fn uv(&self, m: usize, n: usize) -> Vec2 {
        let res = self.n() as f32;
        Vec2::new(n as f32 / res, m as f32 / res)
    }

    /// Undisplaced planar position of vertex (m, n)
    ///
    /// Derived from the UV so topology, choppiness and the trochoidal base
    /// positions agree exactly.
    pub fn base_position(&self, m: usize, n: usize) -> Vec2 {
        self.uv(m, n) * self.extent_m()
    }
}

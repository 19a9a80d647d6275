//! Offline export of a synthesised surface.

use std::fs;
use std::path::Path;

use image::{GrayImage, Luma};

use crate::error::{OceanError, Result};
use crate::ocean::{Vertex, VertexGrid};

/// Greyscale heightmap, one pixel per vertex, min height black, max white
///
/// A flat surface renders mid grey.
pub fn heightmap_image(surface: &VertexGrid) -> GrayImage {
    let dim = surface.dim() as u32;
    let (lo, hi) = surface.height_range().unwrap_or((0.0, 0.0));
    let span = hi - lo;

    let mut img = GrayImage::new(dim, dim);
    for (index, position) in surface.positions.iter().enumerate() {
        let x = index as u32 % dim;
        let y = index as u32 / dim;
        if y >= dim {
            break;
        }
        let level = if span > 0.0 && span.is_finite() {
            (position.z - lo) / span
        } else {
            0.5
        };
        let gray = (level * 255.0).round().clamp(0.0, 255.0) as u8;
        img.put_pixel(x, y, Luma([gray]));
    }
    img
}

/// Write the heightmap as a PNG (format from the extension)
pub fn write_heightmap_png(surface: &VertexGrid, path: impl AsRef<Path>) -> Result<()> {
    heightmap_image(surface).save(path.as_ref())?;
    Ok(())
}

/// Write interleaved vertices as raw native-endian bytes
pub fn write_vertex_dump(vertices: &[Vertex], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, bytemuck::cast_slice::<Vertex, u8>(vertices)).map_err(|source| {
        OceanError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

//! Oceansynth - headless driver for the ocean surface models
//!
//! Stands in for the host frame loop: runs a number of synthesis cycles,
//! pushes each into an in-memory mesh and optionally exports the result.

use std::time::Instant;

use clap::Parser;

use oceansynth::cli::Args;
use oceansynth::export;
use oceansynth::ocean::{MeshBuffers, OceanSystem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = args.build_config()?;

    if args.dump_config {
        println!("{}", config.to_ron_string()?);
        return Ok(());
    }

    let mut ocean = OceanSystem::new(config);
    let mut mesh = MeshBuffers::new();
    ocean.attach(&mut mesh);

    let start = Instant::now();
    for frame in 0..args.frames {
        let time_s = args.frame_time(frame);
        if !ocean.update(time_s) {
            log::warn!("frame {}: cycle skipped", frame);
            continue;
        }
        ocean.present(&mut mesh);

        if let Some((lo, hi)) = ocean.surface().height_range() {
            log::debug!("frame {} t={:.3}s height {:.3}..{:.3} m", frame, time_s, lo, hi);
        }
    }
    let elapsed = start.elapsed();

    println!("Ocean synthesis");
    println!("  Frames: {}", mesh.updates);
    println!(
        "  Vertices: {}, triangles: {}",
        mesh.vertices.len(),
        mesh.indices.len() / 3
    );
    if let Some((lo, hi)) = ocean.surface().height_range() {
        println!("  Final height range: {:.3}..{:.3} m", lo, hi);
    }
    println!(
        "  Time: {:.2}ms ({:.3}ms/frame)",
        elapsed.as_secs_f64() * 1000.0,
        elapsed.as_secs_f64() * 1000.0 / args.frames.max(1) as f64
    );

    if let Some(path) = &args.heightmap {
        export::write_heightmap_png(ocean.surface(), path)?;
        println!("  Heightmap: {}", path.display());
    }
    if let Some(path) = &args.vertices {
        export::write_vertex_dump(&mesh.vertices, path)?;
        println!("  Vertices: {} ({} bytes)", path.display(), mesh.vertex_bytes().len());
    }

    Ok(())
}

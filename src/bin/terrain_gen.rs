//! Fault Terrain Generator
//!
//! Run with: `cargo run --bin terrain_gen -- [config.json] [--obj out.obj] [--seed N]`
//!
//! Builds one terrain from a JSON config (or the defaults), logs a summary
//! and optionally writes the mesh as a Wavefront OBJ file.
//!
//! Set `RUST_LOG=debug` for per-stage detail.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use fault_terrain_engine::terrain::{TerrainConfig, TerrainError, TerrainMesh, write_obj};

struct Args {
    config: Option<PathBuf>,
    obj: Option<PathBuf>,
    seed: Option<u32>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        config: None,
        obj: None,
        seed: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--obj" => {
                let path = iter.next().ok_or("--obj needs a file path")?;
                args.obj = Some(PathBuf::from(path));
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a number")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed: {value}"))?;
                args.seed = Some(seed);
            }
            "-h" | "--help" => {
                return Err("usage: terrain_gen [config.json] [--obj out.obj] [--seed N]".into());
            }
            _ if args.config.is_none() && !arg.starts_with('-') => {
                args.config = Some(PathBuf::from(arg));
            }
            _ => return Err(format!("unexpected argument: {arg}")),
        }
    }
    Ok(args)
}

fn run(args: Args) -> Result<(), TerrainError> {
    let mut config = match &args.config {
        Some(path) => TerrainConfig::load(path)?,
        None => TerrainConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    log::info!(
        "[Terrain Gen] resolution {} over x {}..{} y {}..{}, {} faults of {}",
        config.resolution,
        config.bounds.min_x,
        config.bounds.max_x,
        config.bounds.min_y,
        config.bounds.max_y,
        config.sculpt.iterations,
        config.sculpt.delta
    );

    let mesh = TerrainMesh::generate(&config)?;
    let bounds = mesh.height_bounds();
    println!(
        "[Terrain Gen] {} vertices, {} faces, {} edges, {} water vertices, heights {:.4}..{:.4}",
        mesh.vertex_count(),
        mesh.face_count(),
        mesh.edges().len() / 2,
        mesh.water_vertex_count(),
        bounds.min_z,
        bounds.max_z
    );

    if let Some(path) = &args.obj {
        let file = File::create(path)?;
        write_obj(&mesh, BufWriter::new(file))?;
        println!("[Terrain Gen] Wrote {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[Terrain Gen] {e}");
            ExitCode::FAILURE
        }
    }
}

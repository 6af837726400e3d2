use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use tinyrast::config::{DEFAULT_MESH_PATH, DEFAULT_OUTPUT_PATH};
use tinyrast::{Engine, EngineError, Mesh, SceneConfig};

/// Render the wireframe of an OBJ mesh to output.tga.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// OBJ mesh to render.
    #[arg(default_value = DEFAULT_MESH_PATH)]
    mesh: PathBuf,
}

fn run(args: &Args) -> Result<(), EngineError> {
    let config = SceneConfig::default();
    let mesh = Mesh::from_obj(&args.mesh)?;

    let mut engine = Engine::new(config);
    let stats = engine.render(&mesh);
    info!(
        "{} faces, {} lines, {} triangles",
        stats.faces, stats.lines, stats.triangles
    );

    engine.save(DEFAULT_OUTPUT_PATH)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            let mut source = err.source();
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

//! trisoup-export - triangle-soup mesh export tool
//!
//! Generates procedural meshes (subdivision sphere, torus, cube) and writes
//! them as Wavefront OBJ or JSON.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use trisoup::TriangleSoup;

use trisoup_export::{json, obj};

#[derive(Parser)]
#[command(name = "trisoup-export")]
#[command(about = "Triangle-soup mesh export tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Obj,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sphere by icosahedron subdivision
    Sphere {
        /// Subdivision level (0-10)
        #[arg(short, long, default_value_t = 3)]
        level: u32,

        /// Sphere radius
        #[arg(short, long, default_value_t = 1.0)]
        radius: f32,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "obj")]
        format: Format,
    },

    /// Generate a torus
    Torus {
        /// Distance from torus center to tube center
        #[arg(long, default_value_t = 0.6)]
        torus_radius: f32,

        /// Tube cross-section radius
        #[arg(long, default_value_t = 0.3)]
        tube_radius: f32,

        /// Segments around the tube
        #[arg(short, long, default_value_t = 30)]
        sides: u32,

        /// Segments around the main loop
        #[arg(short, long, default_value_t = 30)]
        rings: u32,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "obj")]
        format: Format,
    },

    /// Generate a cube
    Cube {
        /// Half-extent along each axis
        #[arg(short, long, default_value_t = 1.0)]
        size: f32,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "obj")]
        format: Format,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sphere {
            level,
            radius,
            output,
            format,
        } => {
            tracing::info!("Generating sphere: level={}, radius={}", level, radius);
            let soup = trisoup::generate_sphere(level, radius)?;
            write_output(&soup, &output, format)?;
        }

        Commands::Torus {
            torus_radius,
            tube_radius,
            sides,
            rings,
            output,
            format,
        } => {
            tracing::info!(
                "Generating torus: torus_radius={}, tube_radius={}, sides={}, rings={}",
                torus_radius,
                tube_radius,
                sides,
                rings
            );
            let soup = trisoup::generate_torus(torus_radius, tube_radius, sides, rings)?;
            write_output(&soup, &output, format)?;
        }

        Commands::Cube {
            size,
            output,
            format,
        } => {
            tracing::info!("Generating cube: size={}", size);
            let soup = trisoup::generate_cube(size)?;
            write_output(&soup, &output, format)?;
        }
    }

    tracing::info!("Done!");
    Ok(())
}

fn write_output(soup: &TriangleSoup, output: &Path, format: Format) -> Result<()> {
    match format {
        Format::Obj => obj::write_obj(soup, output),
        Format::Json => json::write_json(soup, output),
    }
}

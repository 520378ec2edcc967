use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "collidergen")]
#[command(about = "collidergen - tile maps to collision rectangles")]
#[command(version)]
#[command(long_about = "
collidergen converts a painted terrain layer into a small set of
axis-aligned collision rectangles, replacing one collider per tile with
far fewer, larger colliders.

Examples:
  collidergen generate --map level.json --out colliders.json
  collidergen generate --map level.json --layer Collision --empty-tile 0
  collidergen render --map level.json --out colliders.png --tile-size 32
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decompose a map's terrain layer and write the collider set as JSON
    Generate {
        /// Input map file (Tiled JSON or ASCII grid)
        #[arg(short, long, required = true)]
        map: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Terrain layer name (Tiled maps, matched case-insensitively)
        #[arg(long)]
        layer: Option<String>,

        /// Tile id treated as empty
        #[arg(long)]
        empty_tile: Option<u32>,

        /// Tile edge length in pixels, recorded in the output
        #[arg(long)]
        tile_size: Option<u32>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Render the collider set as a raster preview image
    Render {
        /// Input map file (Tiled JSON or ASCII grid)
        #[arg(short, long, required = true)]
        map: PathBuf,

        /// Output image file (PNG/BMP, format from extension)
        #[arg(short, long, required = true)]
        out: PathBuf,

        /// Terrain layer name (Tiled maps, matched case-insensitively)
        #[arg(long)]
        layer: Option<String>,

        /// Tile id treated as empty
        #[arg(long)]
        empty_tile: Option<u32>,

        /// Pixels per tile in the preview
        #[arg(long)]
        tile_size: Option<u32>,

        /// Seed for the per-rectangle color sequence
        #[arg(long)]
        seed: Option<u64>,

        /// Background color as #rrggbb
        #[arg(long)]
        background: Option<String>,
    },
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            map,
            out,
            layer,
            empty_tile,
            tile_size,
            pretty,
        } => {
            commands::generate::execute(&config, map, out, layer, empty_tile, tile_size, pretty)?;
        }

        Commands::Render {
            map,
            out,
            layer,
            empty_tile,
            tile_size,
            seed,
            background,
        } => {
            commands::render::execute(&config, map, out, layer, empty_tile, tile_size, seed, background)?;
        }
    }

    Ok(())
}

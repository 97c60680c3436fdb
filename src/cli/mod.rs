//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod generate;
mod info;
mod random;

use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::assets::{load_sources, AssetError};
use crate::color::ColorError;
use crate::config::{load_config, project_root, resolve_path, ConfigError, PortraitConfig};
use crate::generator::{Generator, LayerIndices, PortraitError};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Portrait - compose pixel-art character portraits from layered spritesheets
#[derive(Parser)]
#[command(name = "portrait")]
#[command(about = "Compose pixel-art character portraits from layered spritesheets")]
#[command(version)]
pub struct Cli {
    /// Path to portrait.toml (default: search upward from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory containing the spritesheets (overrides sprites.dir)
    #[arg(long, global = true)]
    pub sprites: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a batch of random portraits to PNG
    Random {
        /// Number of portraits (default: output.count)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Base seed; portrait i uses seed + i (default: output.seed, else unseeded)
        #[arg(long)]
        seed: Option<u64>,

        /// Output directory (default: output.dir)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Render one portrait from explicit tile indices and colors
    Generate {
        /// Head tile index
        #[arg(long, default_value_t = 0)]
        head: usize,
        /// Eyes tile index
        #[arg(long, default_value_t = 0)]
        eyes: usize,
        /// Eyebrows tile index
        #[arg(long, default_value_t = 0)]
        eyebrows: usize,
        /// Ears tile index
        #[arg(long, default_value_t = 0)]
        ears: usize,
        /// Beard tile index (full layer set only)
        #[arg(long, default_value_t = 0)]
        beard: usize,
        /// Nose tile index
        #[arg(long, default_value_t = 0)]
        nose: usize,
        /// Hair tile index (full layer set only)
        #[arg(long, default_value_t = 0)]
        hair: usize,
        /// Mouth tile index
        #[arg(long, default_value_t = 0)]
        mouth: usize,
        /// Use the curly hair sheet instead of the straight one
        #[arg(long)]
        curly: bool,
        /// Skin color as hex (e.g. "#FFDBAC")
        #[arg(long)]
        skin: String,
        /// Eye color as hex
        #[arg(long = "eye-color")]
        eye_color: String,
        /// Hair color as hex (default: first hair palette entry)
        #[arg(long = "hair-color")]
        hair_color: Option<String>,
        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List the skin, eye and hair palettes
    Palettes,

    /// Show tile counts of the configured spritesheets
    Info,
}

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Portrait(#[from] PortraitError),
    #[error("invalid color: {0}")]
    Color(#[from] ColorError),
    #[error("failed to write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: image::ImageError },
    #[error("failed to create directory '{}': {source}", .path.display())]
    CreateDir { path: PathBuf, source: std::io::Error },
}

/// Loaded configuration plus the directory its relative paths resolve against
pub(crate) struct Project {
    pub config: PortraitConfig,
    pub root: PathBuf,
}

impl Project {
    fn load(config_path: Option<&Path>) -> Result<Self, CliError> {
        let (config, path) = load_config(config_path)?;
        let root = path
            .as_deref()
            .and_then(project_root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self { config, root })
    }

    /// Spritesheet directory, preferring the command-line override.
    pub fn sprite_dir(&self, sprites: Option<&Path>) -> PathBuf {
        match sprites {
            Some(dir) => dir.to_path_buf(),
            None => resolve_path(&self.root, &self.config.sprites.dir),
        }
    }

    /// Read and decode every sheet the configured layer set draws.
    pub fn generator(&self, sprites: Option<&Path>) -> Result<Generator, CliError> {
        let dir = self.sprite_dir(sprites);
        let sources = load_sources(&dir, &self.config.sprites)?;
        let generator = Generator::load(&sources, self.config.generator_config()?)?;
        Ok(generator)
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("genportrait={level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parse arguments and run the selected command.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let project = match Project::load(cli.config.as_deref()) {
        Ok(project) => project,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let sprites = cli.sprites.as_deref();

    match cli.command {
        Commands::Random { count, seed, out } => {
            random::run_random(&project, sprites, count, seed, out.as_deref())
        }
        Commands::Generate {
            head,
            eyes,
            eyebrows,
            ears,
            beard,
            nose,
            hair,
            mouth,
            curly,
            skin,
            eye_color,
            hair_color,
            output,
        } => {
            let indices = LayerIndices { head, eyes, eyebrows, ears, beard, nose, hair, mouth };
            generate::run_generate(
                &project,
                sprites,
                indices,
                curly,
                &skin,
                &eye_color,
                hair_color.as_deref(),
                &output,
            )
        }
        Commands::Palettes => info::run_palettes(&project),
        Commands::Info => info::run_info(&project, sprites),
    }
}

//! Info command implementations (palettes, info)

use std::path::Path;
use std::process::ExitCode;

use image::Rgba;

use crate::color::to_hex;
use crate::layer::DRAW_ORDER;

use super::{Project, EXIT_ERROR, EXIT_SUCCESS};

fn print_palette(title: &str, colors: &[Rgba<u8>]) {
    println!("{} ({}):", title, colors.len());
    for color in colors {
        println!("  {}", to_hex(*color));
    }
}

/// Execute the palettes command
pub fn run_palettes(project: &Project) -> ExitCode {
    let config = match project.config.generator_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    print_palette("Skin colors", &config.palettes.skin);
    println!();
    print_palette("Eye colors", &config.palettes.eyes);
    println!();
    print_palette("Hair colors", &config.palettes.hair);
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the info command
pub fn run_info(project: &Project, sprites: Option<&Path>) -> ExitCode {
    let generator = match project.generator(sprites) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    println!("Sprites:   {}", project.sprite_dir(sprites).display());
    println!("Tile size: {}", generator.tile_size());
    println!("Layers:    {:?}", generator.layer_set());
    println!();
    for layer in DRAW_ORDER {
        if let Some(count) = generator.tile_count(layer) {
            println!("  {:<9} {} tiles", layer.name(), count);
        }
    }
    ExitCode::from(EXIT_SUCCESS)
}

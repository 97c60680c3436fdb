//! Generate command implementation

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use image::Rgba;

use crate::color::{parse_hex_color, ColorError};
use crate::generator::{LayerIndices, PortraitError, PortraitRequest};
use crate::layer::HairStyle;

use super::{CliError, Project, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the generate command
pub fn run_generate(
    project: &Project,
    sprites: Option<&Path>,
    indices: LayerIndices,
    curly: bool,
    skin: &str,
    eye_color: &str,
    hair_color: Option<&str>,
    output: &Path,
) -> ExitCode {
    let (skin, eyes, hair) = match parse_colors(skin, eye_color, hair_color) {
        Ok(colors) => colors,
        Err(e) => {
            eprintln!("Error: {}", CliError::from(e));
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    match render(project, sprites, indices, curly, skin, eyes, hair, output) {
        Ok(()) => {
            eprintln!("Wrote: {}", output.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(
            e @ CliError::Portrait(
                PortraitError::IndexOutOfRange { .. } | PortraitError::TargetCollision { .. },
            ),
        ) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_INVALID_ARGS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

type Colors = (Rgba<u8>, Rgba<u8>, Option<Rgba<u8>>);

fn parse_colors(skin: &str, eyes: &str, hair: Option<&str>) -> Result<Colors, ColorError> {
    let skin = parse_hex_color(skin)?;
    let eyes = parse_hex_color(eyes)?;
    let hair = hair.map(parse_hex_color).transpose()?;
    Ok((skin, eyes, hair))
}

fn render(
    project: &Project,
    sprites: Option<&Path>,
    indices: LayerIndices,
    curly: bool,
    skin: Rgba<u8>,
    eyes: Rgba<u8>,
    hair: Option<Rgba<u8>>,
    output: &Path,
) -> Result<(), CliError> {
    let generator = project.generator(sprites)?;
    let hair = match hair {
        Some(hair) => hair,
        None => {
            let palettes = generator.palettes();
            palettes.hair.first().copied().unwrap_or(generator.placeholders().hair)
        }
    };

    let request = PortraitRequest::new(skin, eyes, hair)
        .with_indices(indices)
        .with_hair_style(HairStyle::from_curly(curly));
    let portrait = generator.generate(&request)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|source| CliError::CreateDir { path: parent.to_path_buf(), source })?;
    }
    portrait
        .save(output)
        .map_err(|source| CliError::Write { path: output.to_path_buf(), source })?;
    Ok(())
}

//! Random command implementation

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

use crate::config::resolve_path;
use crate::generator::Generator;

use super::{CliError, Project, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Render `count` random portraits into `out_dir` as `portrait_{i}.png`.
///
/// Portraits render in parallel. With a seed, portrait `i` draws from
/// `StdRng::seed_from_u64(seed + i)`, so a batch is reproducible regardless
/// of scheduling.
fn render_batch(
    generator: &Generator,
    count: usize,
    seed: Option<u64>,
    out_dir: &Path,
) -> Vec<Result<PathBuf, CliError>> {
    (0..count)
        .into_par_iter()
        .map(|i| {
            let portrait = match seed {
                Some(seed) => {
                    generator.random_with(&mut StdRng::seed_from_u64(seed.wrapping_add(i as u64)))
                }
                None => generator.random(),
            };
            let path = out_dir.join(format!("portrait_{}.png", i));
            portrait.save(&path).map_err(|source| CliError::Write { path: path.clone(), source })?;
            Ok(path)
        })
        .collect()
}

/// Execute the random command
pub fn run_random(
    project: &Project,
    sprites: Option<&Path>,
    count: Option<usize>,
    seed: Option<u64>,
    out: Option<&Path>,
) -> ExitCode {
    let count = count.unwrap_or(project.config.output.count);
    if count == 0 {
        eprintln!("Error: --count must be at least 1");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }
    let seed = seed.or(project.config.output.seed);
    let out_dir = match out {
        Some(dir) => dir.to_path_buf(),
        None => resolve_path(&project.root, &project.config.output.dir),
    };

    let generator = match project.generator(sprites) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Err(source) = fs::create_dir_all(&out_dir) {
        eprintln!("Error: {}", CliError::CreateDir { path: out_dir, source });
        return ExitCode::from(EXIT_ERROR);
    }

    info!(count, ?seed, out = %out_dir.display(), "rendering random portraits");

    let mut failed = 0;
    for result in render_batch(&generator, count, seed, &out_dir) {
        match result {
            Ok(path) => eprintln!("Wrote: {}", path.display()),
            Err(e) => {
                eprintln!("Error: {}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}

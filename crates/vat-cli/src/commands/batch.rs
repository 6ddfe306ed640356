//! Batch remapping of many vector files

use crate::BatchArgs;
use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

use super::Kind;

pub fn run(args: BatchArgs, verbose: u8) -> Result<()> {
    trace!(pattern = %args.input, kind = ?args.kind, "batch::run");

    // Find matching files
    let files: Vec<PathBuf> = glob::glob(&args.input)
        .with_context(|| format!("Invalid pattern: {}", args.input))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        bail!("No files match pattern: {}", args.input);
    }

    // Outputs are named after the input file only, so names must be unique.
    check_unique_names(&files)?;

    info!(files = files.len(), pattern = %args.input, "Starting batch remap");

    if verbose > 0 {
        println!("Found {} files matching '{}'", files.len(), args.input);
    }

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create: {}", args.output_dir.display()))?;

    // Per-file slices are remapped in parallel too; rayon nests fine.
    let results: Vec<(PathBuf, Result<usize>)> = files
        .par_iter()
        .map(|path| {
            let r = process_one(path, &args.output_dir, args.kind, args.swizzle, args.flip);
            (path.clone(), r)
        })
        .collect();

    let mut failed = 0;
    for (path, r) in &results {
        match r {
            Ok(count) => {
                debug!(file = %path.display(), count, "done");
                if verbose > 0 {
                    println!("  {} ({} vectors)", path.display(), count);
                }
            }
            Err(e) => {
                warn!(file = %path.display(), "{:#}", e);
                eprintln!("  FAILED {}: {:#}", path.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} files failed", failed, results.len());
    }

    info!(files = results.len(), "Batch complete");
    Ok(())
}

/// Fails if two inputs would write the same output file.
fn check_unique_names(files: &[PathBuf]) -> Result<()> {
    let mut seen: HashMap<&OsStr, &Path> = HashMap::new();
    for path in files {
        let name = path
            .file_name()
            .with_context(|| format!("No file name: {}", path.display()))?;
        if let Some(first) = seen.insert(name, path) {
            bail!(
                "Output name collision: {} and {} both map to '{}'",
                first.display(),
                path.display(),
                name.to_string_lossy()
            );
        }
    }
    Ok(())
}

/// Remaps one file into `out_dir` under the same file name.
fn process_one(path: &Path, out_dir: &Path, kind: Kind, swizzle: i32, flip: i32) -> Result<usize> {
    let name = path
        .file_name()
        .with_context(|| format!("No file name: {}", path.display()))?;
    let text = super::load_text(path)?;
    let out = super::remap_text(&text, kind, swizzle, flip)?;
    super::save_text(&out_dir.join(name), &out)?;
    Ok(out.lines().count())
}

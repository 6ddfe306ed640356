//! Remap a text file of vectors, one per line.

use crate::FileArgs;
use anyhow::Result;
use tracing::{debug, info, trace};

/// Runs the file command.
///
/// `-` as input or output means stdin or stdout.
pub fn run(args: FileArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), output = %args.output.display(), "file::run");
    debug!(kind = ?args.kind, arity = args.kind.arity(), "line format");

    let text = super::load_text(&args.input)?;
    let out = super::remap_text(&text, args.kind, args.swizzle, args.flip)?;
    super::save_text(&args.output, &out)?;

    let count = out.lines().count();
    info!(count, "remapped");
    if verbose > 0 {
        eprintln!("Remapped {} vectors from {}", count, args.input.display());
    }
    Ok(())
}

//! Single-value remap commands: vec3, vec4, quat.

use crate::{QuatArgs, Vec3Args, Vec4Args};
use anyhow::{Context, Result};
use tracing::{debug, info};
use vat_math::{swizzle_quaternion, swizzle_vector3, swizzle_vector4, AxisRemap, QuatFlip};

use super::{format_components, parse_vec3, parse_vec4};

/// Runs vec3: permute and flip all three components.
pub fn run_vec3(args: Vec3Args, verbose: u8) -> Result<()> {
    let coord = parse_vec3(&args.coord).context("Invalid vec3")?;
    debug!(?coord, swizzle = args.swizzle, flip = args.flip, "vec3");

    let result = swizzle_vector3(coord, args.swizzle, args.flip)?;

    if verbose > 0 {
        let remap = AxisRemap::from_codes(args.swizzle, args.flip)?;
        info!(%remap, "applied");
        eprintln!("{} -> {}", format_components(&coord.to_array()), remap);
    }
    println!("{}", format_components(&result.to_array()));
    Ok(())
}

/// Runs vec4: remap x and y, pass z and w through.
pub fn run_vec4(args: Vec4Args, verbose: u8) -> Result<()> {
    let coord = parse_vec4(&args.coord).context("Invalid vec4")?;
    debug!(?coord, swizzle = args.swizzle, flip = args.flip, "vec4");

    let result = swizzle_vector4(coord, args.swizzle, args.flip)?;

    if verbose > 0 {
        let remap = AxisRemap::from_codes(args.swizzle, args.flip)?;
        info!(%remap, "applied (z, w passthrough)");
        eprintln!(
            "{} -> {} (z, w kept)",
            format_components(&coord.to_array()),
            remap
        );
    }
    println!("{}", format_components(&result.to_array()));
    Ok(())
}

/// Runs quat: flip component signs.
pub fn run_quat(args: QuatArgs, verbose: u8) -> Result<()> {
    let src = parse_vec4(&args.src).context("Invalid quaternion")?;
    debug!(?src, flip = args.flip, "quat");

    let result = swizzle_quaternion(src, args.flip)?;

    if verbose > 0 {
        let flip = QuatFlip::try_from(args.flip)?;
        info!(%flip, "applied");
        eprintln!("{} -> negate {}", format_components(&src.to_array()), flip);
    }
    println!("{}", format_components(&result.to_array()));
    Ok(())
}

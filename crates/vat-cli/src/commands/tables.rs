//! Prints the swizzle and flip code tables.

use crate::TablesArgs;
use anyhow::{Context, Result};
use serde::Serialize;
use vat_math::{AxisFlip, AxisSwizzle, QuatFlip};

#[derive(Serialize)]
struct SwizzleRow {
    code: i32,
    variant: AxisSwizzle,
    indices: [usize; 3],
}

#[derive(Serialize)]
struct AxisFlipRow {
    code: i32,
    variant: AxisFlip,
    signs: [f32; 3],
}

#[derive(Serialize)]
struct QuatFlipRow {
    code: i32,
    variant: QuatFlip,
    signs: [f32; 4],
}

#[derive(Serialize)]
struct Tables {
    swizzle: Vec<SwizzleRow>,
    axis_flip: Vec<AxisFlipRow>,
    quaternion_flip: Vec<QuatFlipRow>,
}

fn collect() -> Tables {
    Tables {
        swizzle: AxisSwizzle::ALL
            .iter()
            .map(|&s| SwizzleRow {
                code: s.code(),
                variant: s,
                indices: s.indices(),
            })
            .collect(),
        axis_flip: AxisFlip::ALL
            .iter()
            .map(|&f| AxisFlipRow {
                code: f.code(),
                variant: f,
                signs: f.signs(),
            })
            .collect(),
        quaternion_flip: QuatFlip::ALL
            .iter()
            .map(|&f| QuatFlipRow {
                code: f.code(),
                variant: f,
                signs: f.signs(),
            })
            .collect(),
    }
}

/// Runs the tables command.
pub fn run(args: TablesArgs) -> Result<()> {
    let tables = collect();

    if args.json {
        let json = serde_json::to_string_pretty(&tables).context("Failed to serialize tables")?;
        println!("{}", json);
        return Ok(());
    }

    println!("Swizzle codes:");
    for row in &tables.swizzle {
        println!("  {:>2}  {:<4} {:?}", row.code, row.variant, row.indices);
    }

    println!("Axis flip codes:");
    for row in &tables.axis_flip {
        println!("  {:>2}  {:<4} {:?}", row.code, row.variant, row.signs);
    }

    println!("Quaternion flip codes:");
    for row in &tables.quaternion_flip {
        println!("  {:>2}  {:<4} {:?}", row.code, row.variant, row.signs);
    }

    Ok(())
}

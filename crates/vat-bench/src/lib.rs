//! Benchmark fixtures for VAT-RS. See `benches/vat_bench.rs`.

use vat_math::{Vec3, Vec4};

/// Deterministic point cloud of `n` positions.
pub fn points(n: usize) -> Vec<Vec3> {
    (0..n)
        .map(|i| {
            let t = i as f32 * 0.001;
            Vec3::new(t.sin(), t.cos(), t)
        })
        .collect()
}

/// Deterministic set of `n` unit quaternions.
pub fn quats(n: usize) -> Vec<Vec4> {
    (0..n)
        .map(|i| {
            let half = i as f32 * 0.0005;
            Vec4::new(0.0, half.sin(), 0.0, half.cos())
        })
        .collect()
}

#![allow(dead_code)]

use main_colors::GridBuf;
use palette::Srgb;
use std::sync::OnceLock;

/// A smooth two-axis color gradient with a little per-pixel noise, so buckets at
/// every detail level are well populated without loading image files from disk.
pub fn gradient_grid(width: u32, height: u32) -> GridBuf<Srgb<u8>> {
    let mut state = 0xDEAD_BEEF_u32;
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let noise = (state & 0x0F) as u32;
            let r = (x * 255 / width.max(1) + noise).min(255) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            let b = ((x + y) * 255 / (width + height).max(1)) as u8;
            pixels.push(Srgb::new(r, g, b));
        }
    }
    GridBuf::new(width, height, pixels).unwrap()
}

static BENCHMARK_GRIDS: OnceLock<Vec<(String, GridBuf<Srgb<u8>>)>> = OnceLock::new();

pub fn benchmark_grids() -> &'static [(String, GridBuf<Srgb<u8>>)] {
    BENCHMARK_GRIDS.get_or_init(|| {
        [256, 512, 1024, 2048]
            .into_iter()
            .map(|size| (format!("{size}x{size}"), gradient_grid(size, size)))
            .collect()
    })
}

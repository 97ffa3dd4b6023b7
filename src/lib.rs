//! # Main Colors
//!
//! A library to extract the dominant colors of an image along with the number of
//! pixels each color accounts for.
//!
//! Pixels are grouped into quantization buckets by reducing the precision of their
//! color channels, with a [`Detail`] level controlling how coarse the grouping is.
//! Each bucket is reported as the average color of its members, weighted by its pixel
//! count, and the resulting [`ColorWeights`] are ordered heaviest first. Extraction is
//! a single pass, pure, and deterministic.
//!
//! Image decoding is left to the caller: the core operates on a [`PixelGrid`] of
//! decoded pixel samples. With the `image` feature enabled, grids can be converted
//! to and from [`RgbImage`](image::RgbImage)s from the [`image`] crate.
//!
//! # Examples
//!
//! ```
//! use main_colors::{Detail, GridRef, main_colors};
//! use palette::Srgb;
//!
//! // A 2x2 image with three reddish pixels and one blue one.
//! let pixels = [
//!     Srgb::new(230u8, 20, 10),
//!     Srgb::new(240u8, 10, 0),
//!     Srgb::new(250u8, 0, 5),
//!     Srgb::new(10u8, 20, 250),
//! ];
//! let grid = GridRef::new(2, 2, pixels.as_slice()).unwrap();
//!
//! let weights = main_colors(grid, Detail::LOW).unwrap();
//! assert_eq!(weights.total_weight(), 4);
//! assert_eq!(weights.weights(), &[3, 1]);
//! assert_eq!(weights.palette()[0], Srgb::new(240u8, 10, 5));
//! ```
//!
//! # Features
//!
//! - `std` (default): use the standard library. Disable for `no_std` (with `alloc`).
//! - `threads` (default): parallel extraction functions powered by [`rayon`].
//! - `image` (default): conversions for the [`image`] crate's buffer types.

#![no_std]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod deps;

mod extract;
mod histogram;
mod traits;
mod types;

pub use extract::*;
pub use traits::*;
pub use types::*;

/// The maximum number of pixels supported per extraction, which is `u32::MAX`.
///
/// Bucket weights are `u32`s, so a single extraction cannot accumulate more pixels
/// than this without overflowing.
pub const MAX_PIXELS: u32 = u32::MAX;

#[cfg(test)]
pub(crate) mod tests {
    use alloc::vec::Vec;
    use palette::Srgb;

    /// Deterministic, reasonably well spread colors for tests.
    pub fn test_colors_1024() -> Vec<Srgb<u8>> {
        let mut state = 0x9E37_79B9_u32;
        (0..1024)
            .map(|_| {
                // xorshift32
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                let [r, g, b, _] = state.to_le_bytes();
                Srgb::new(r, g, b)
            })
            .collect()
    }
}

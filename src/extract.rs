//! The dominant color extractor.

use crate::{
    ColorComponents, ColorWeights, Detail, GridRef, MAX_PIXELS, PaletteSize, PixelsOutOfRange,
    histogram::ColorHistogram,
};
use alloc::vec::Vec;
use core::{cmp::Reverse, marker::PhantomData};
use palette::cast::{self, AsArrays as _};

/// The dominant color extractor for colors with 3 `u8` components.
///
/// Every input pixel is assigned to a quantization bucket by reducing the precision of
/// its color channels according to a [`Detail`] level. Each bucket tracks how many
/// pixels landed in it along with their component sums, so a bucket is represented by
/// the rounded average color of its members rather than the raw quantized value.
///
/// Slices and [`GridRef`]s are supported as inputs via [`run_slice`](Self::run_slice)
/// and [`run_grid`](Self::run_grid). Parallel versions are available if the `threads`
/// feature is enabled.
///
/// To produce the final output, use [`color_weights`](Self::color_weights) or
/// [`top_colors`](Self::top_colors). Note that these functions take a reference to
/// `self`, and so can be called multiple times on the same [`MainColors`].
///
/// Extraction is deterministic. Colors are ordered by descending weight, and buckets
/// with equal weights are ordered by descending packed bucket key, so for example a
/// pure red bucket sorts before an equally heavy pure blue one.
///
/// # Examples
///
/// ```
/// use main_colors::{Detail, GridRef, MainColors};
/// use palette::Srgb;
///
/// let pixels = vec![Srgb::new(255u8, 0, 0); 4];
/// let grid = GridRef::new(2, 2, pixels.as_slice()).unwrap();
/// let weights = MainColors::run_grid(grid, Detail::STANDARD)?.color_weights();
/// assert_eq!(weights.palette(), &[Srgb::new(255u8, 0, 0)]);
/// assert_eq!(weights.weights(), &[4]);
/// # Ok::<(), main_colors::PixelsOutOfRange>(())
/// ```
#[must_use]
pub struct MainColors<Color> {
    /// The color type must remain the same for each [`MainColors`].
    color: PhantomData<Color>,
    /// The accumulated histogram data.
    hist: ColorHistogram,
}

impl<Color: ColorComponents<u8, 3>> MainColors<Color> {
    fn run_slice_unchecked(colors: &[Color], detail: Detail) -> Self {
        let mut hist = ColorHistogram::new(detail);
        hist.add_colors(colors.as_arrays());
        Self { color: PhantomData, hist }
    }

    /// Accumulate a slice of colors at the given detail level.
    ///
    /// # Errors
    ///
    /// Returns an error if `colors` is empty or longer than [`MAX_PIXELS`].
    pub fn run_slice(colors: &[Color], detail: Detail) -> Result<Self, PixelsOutOfRange> {
        PixelsOutOfRange::check_u32(colors, 1, MAX_PIXELS)?;
        Ok(Self::run_slice_unchecked(colors, detail))
    }

    /// Accumulate the pixels of a [`GridRef`] at the given detail level.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty.
    pub fn run_grid(grid: GridRef<'_, Color>, detail: Detail) -> Result<Self, PixelsOutOfRange> {
        Self::run_slice(grid.as_slice(), detail)
    }

    /// Returns the detail level the extractor was run with.
    #[inline]
    pub fn detail(&self) -> Detail {
        self.hist.detail()
    }

    /// Returns the number of pixels that were accumulated.
    #[inline]
    pub fn num_pixels(&self) -> u32 {
        self.hist.total()
    }

    /// Returns the number of distinct quantization buckets that received pixels.
    #[must_use]
    pub fn num_buckets(&self) -> usize {
        self.hist.occupied_len()
    }

    /// Compute the representative colors and their pixel weights for every occupied
    /// bucket, ordered by descending weight.
    ///
    /// The sum of the returned weights equals [`num_pixels`](Self::num_pixels).
    #[must_use]
    pub fn color_weights(&self) -> ColorWeights<Color> {
        let mut buckets = self
            .hist
            .occupied()
            .map(|(key, stats)| {
                let n = u64::from(stats.count);
                // round to nearest when averaging the bucket members
                let color = cast::from_array(stats.components.map(|c| {
                    #[allow(clippy::cast_possible_truncation)] // averages of u8s fit in u8
                    {
                        ((c + n / 2) / n) as u8
                    }
                }));
                (key, stats.count, color)
            })
            .collect::<Vec<_>>();

        buckets.sort_unstable_by_key(|&(key, count, _)| (Reverse(count), Reverse(key)));

        let mut palette = Vec::with_capacity(buckets.len());
        let mut weights = Vec::with_capacity(buckets.len());
        for (_, count, color) in buckets {
            palette.push(color);
            weights.push(count);
        }
        ColorWeights::new_unchecked(palette, weights, self.hist.total())
    }

    /// Compute the representative colors and their pixel weights, truncated to the
    /// heaviest `size` buckets.
    ///
    /// The sum of the returned weights equals [`num_pixels`](Self::num_pixels) only if
    /// no buckets were dropped by the cap.
    #[must_use]
    pub fn top_colors(&self, size: PaletteSize) -> ColorWeights<Color> {
        let mut weights = self.color_weights();
        weights.truncate(size.as_usize());
        weights
    }
}

/// Extract the dominant colors of a pixel grid, ordered by descending pixel weight.
///
/// This is shorthand for [`MainColors::run_grid`] followed by
/// [`MainColors::color_weights`].
///
/// # Errors
///
/// Returns an error if the grid is empty.
///
/// # Examples
///
/// ```
/// use main_colors::{Detail, GridRef, main_colors};
/// use palette::Srgb;
///
/// let pixels = [Srgb::new(255u8, 0, 0), Srgb::new(0u8, 0, 255)];
/// let grid = GridRef::new(2, 1, pixels.as_slice()).unwrap();
/// let weights = main_colors(grid, Detail::LOW)?;
/// assert_eq!(weights.total_weight(), grid.num_pixels());
/// # Ok::<(), main_colors::PixelsOutOfRange>(())
/// ```
pub fn main_colors<Color: ColorComponents<u8, 3>>(
    grid: GridRef<'_, Color>,
    detail: Detail,
) -> Result<ColorWeights<Color>, PixelsOutOfRange> {
    Ok(MainColors::run_grid(grid, detail)?.color_weights())
}

#[cfg(feature = "threads")]
mod parallel {
    use super::MainColors;
    use crate::{
        ColorComponents, ColorWeights, Detail, GridRef, PixelsOutOfRange,
        histogram::ColorHistogram,
    };
    use core::marker::PhantomData;
    use palette::cast::AsArrays as _;
    use rayon::prelude::*;

    impl<Color: ColorComponents<u8, 3>> MainColors<Color> {
        /// Return the per thread chunk size based on the length.
        fn chunk_size(len: usize, detail: Detail) -> usize {
            let buckets = 1usize << (3 * detail.bits_per_channel());
            let chunk_size = len
                .div_ceil(rayon::current_num_threads())
                .max(buckets * 4);
            let num_chunks = len.div_ceil(chunk_size);
            len.div_ceil(num_chunks)
        }

        fn run_slice_par_unchecked(colors: &[Color], detail: Detail) -> Self {
            let chunk_size = Self::chunk_size(colors.len(), detail);
            let hist = colors
                .as_arrays()
                .par_chunks(chunk_size)
                .map(|colors| {
                    let mut hist = ColorHistogram::new(detail);
                    hist.add_colors(colors);
                    hist
                })
                .reduce_with(ColorHistogram::merge_partial)
                .unwrap_or_else(|| ColorHistogram::new(detail));

            Self { color: PhantomData, hist }
        }

        /// Accumulate a slice of colors at the given detail level in parallel.
        ///
        /// Produces the same result as [`run_slice`](Self::run_slice).
        ///
        /// # Errors
        ///
        /// Returns an error if `colors` is empty or longer than
        /// [`MAX_PIXELS`](crate::MAX_PIXELS).
        pub fn run_slice_par(colors: &[Color], detail: Detail) -> Result<Self, PixelsOutOfRange> {
            PixelsOutOfRange::check_u32(colors, 1, crate::MAX_PIXELS)?;
            Ok(Self::run_slice_par_unchecked(colors, detail))
        }

        /// Accumulate the pixels of a [`GridRef`] at the given detail level in parallel.
        ///
        /// Produces the same result as [`run_grid`](Self::run_grid).
        ///
        /// # Errors
        ///
        /// Returns an error if the grid is empty.
        pub fn run_grid_par(
            grid: GridRef<'_, Color>,
            detail: Detail,
        ) -> Result<Self, PixelsOutOfRange> {
            Self::run_slice_par(grid.as_slice(), detail)
        }
    }

    /// Extract the dominant colors of a pixel grid in parallel.
    ///
    /// Produces the same result as [`main_colors`](super::main_colors).
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty.
    pub fn main_colors_par<Color: ColorComponents<u8, 3>>(
        grid: GridRef<'_, Color>,
        detail: Detail,
    ) -> Result<ColorWeights<Color>, PixelsOutOfRange> {
        Ok(MainColors::run_grid_par(grid, detail)?.color_weights())
    }
}

#[cfg(feature = "threads")]
pub use parallel::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;
    use alloc::{vec, vec::Vec};
    use palette::Srgb;

    const DETAILS: [Detail; 4] = [Detail::LOW, Detail::STANDARD, Detail::HIGH, Detail::MAX];

    #[test]
    fn weights_sum_to_pixel_count() {
        let colors = test_colors_1024();
        for detail in DETAILS {
            let weights = MainColors::run_slice(&colors, detail)
                .unwrap()
                .color_weights();
            #[allow(clippy::cast_possible_truncation)]
            let expected = colors.len() as u32;
            assert_eq!(weights.total_weight(), expected);
            assert_eq!(weights.weights().iter().copied().sum::<u32>(), expected);
        }
    }

    #[test]
    fn bucket_count_is_monotone_in_detail() {
        let colors = test_colors_1024();
        let mut previous = 0;
        for detail in DETAILS {
            let buckets = MainColors::run_slice(&colors, detail).unwrap().num_buckets();
            assert!(buckets >= previous, "{buckets} < {previous} at detail {detail}");
            previous = buckets;
        }
    }

    #[test]
    fn extraction_is_deterministic() {
        let colors = test_colors_1024();
        let a = MainColors::run_slice(&colors, Detail::HIGH)
            .unwrap()
            .color_weights();
        let b = MainColors::run_slice(&colors, Detail::HIGH)
            .unwrap()
            .color_weights();
        assert_eq!(a, b);
    }

    #[test]
    fn single_pixel_single_bucket() {
        let colors = [Srgb::new(12u8, 34, 56)];
        let grid = GridRef::new(1, 1, colors.as_slice()).unwrap();
        for detail in DETAILS {
            let weights = main_colors(grid, detail).unwrap();
            assert_eq!(weights.palette(), &[Srgb::new(12u8, 34, 56)]);
            assert_eq!(weights.weights(), &[1]);
        }
    }

    #[test]
    fn uniform_image_returns_one_bucket() {
        let colors = vec![Srgb::new(255u8, 0, 0); 100];
        let grid = GridRef::new(10, 10, colors.as_slice()).unwrap();
        let weights = main_colors(grid, Detail::STANDARD).unwrap();
        assert_eq!(weights.len(), 1);
        assert_eq!(weights.palette(), &[Srgb::new(255u8, 0, 0)]);
        assert_eq!(weights.weights(), &[100]);
    }

    #[test]
    fn equal_weights_put_red_before_blue() {
        let red = Srgb::new(255u8, 0, 0);
        let blue = Srgb::new(0u8, 0, 255);
        let colors = [red, blue, blue, red];
        let grid = GridRef::new(2, 2, colors.as_slice()).unwrap();
        let weights = main_colors(grid, Detail::LOW).unwrap();
        assert_eq!(weights.palette(), &[red, blue]);
        assert_eq!(weights.weights(), &[2, 2]);
    }

    #[test]
    fn bucket_color_is_the_rounded_average() {
        // both colors fall into the same bucket at the lowest detail
        let colors = [Srgb::new(100u8, 0, 0), Srgb::new(111u8, 0, 0)];
        let weights = MainColors::run_slice(&colors, Detail::LOW)
            .unwrap()
            .color_weights();
        assert_eq!(weights.palette(), &[Srgb::new(106u8, 0, 0)]);
        assert_eq!(weights.weights(), &[2]);
    }

    #[test]
    fn empty_input_fails() {
        assert!(MainColors::<Srgb<u8>>::run_slice(&[], Detail::LOW).is_err());
        let grid = GridRef::<Srgb<u8>>::default();
        let err = main_colors(grid, Detail::LOW).unwrap_err();
        assert_eq!(err.len(), 0);
    }

    #[test]
    fn top_colors_keeps_the_heaviest() {
        let mut colors = Vec::new();
        colors.extend(vec![Srgb::new(255u8, 0, 0); 6]);
        colors.extend(vec![Srgb::new(0u8, 255, 0); 3]);
        colors.extend(vec![Srgb::new(0u8, 0, 255); 1]);

        let extracted = MainColors::run_slice(&colors, Detail::LOW).unwrap();
        let top = extracted.top_colors(PaletteSize::try_from(2usize).unwrap());
        assert_eq!(top.palette(), &[Srgb::new(255u8, 0, 0), Srgb::new(0u8, 255, 0)]);
        assert_eq!(top.weights(), &[6, 3]);
        assert_eq!(top.total_weight(), 9);

        let all = extracted.top_colors(PaletteSize::MAX);
        assert_eq!(all.len(), 3);
        assert_eq!(all.total_weight(), 10);
    }

    #[cfg(feature = "threads")]
    #[test]
    fn single_and_multi_threaded_match() {
        let colors = test_colors_1024();
        for detail in DETAILS {
            let single = MainColors::run_slice(&colors, detail)
                .unwrap()
                .color_weights();
            let par = MainColors::run_slice_par(&colors, detail)
                .unwrap()
                .color_weights();
            assert_eq!(single, par);
        }
    }
}

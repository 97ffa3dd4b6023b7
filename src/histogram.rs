//! Dense per-bucket accumulators over quantized color keys.

use crate::Detail;
use alloc::boxed::Box;
use bytemuck::Zeroable;

/// Accumulated statistics for a single quantization bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub(crate) struct BucketStats {
    /// The number of pixels assigned to the bucket.
    pub count: u32,
    /// The component-wise sum of the pixels assigned to the bucket.
    pub components: [u64; 3],
}

/// A histogram of quantized colors with 3 `u8` components.
///
/// The bucket key of a color keeps the upper [`Detail::bits_per_channel`] bits of each
/// channel, packed into a single index. A `u32` count never overflows since the total
/// number of accumulated pixels is bounded by [`MAX_PIXELS`](crate::MAX_PIXELS), and a
/// `u64` component sum fits `255 * MAX_PIXELS` with room to spare.
#[derive(Debug, Clone)]
pub(crate) struct ColorHistogram {
    /// The detail level the bucket keys are derived from.
    detail: Detail,
    /// The buckets, indexed by packed quantization key.
    buckets: Box<[BucketStats]>,
    /// The number of pixels accumulated so far.
    total: u32,
}

impl ColorHistogram {
    /// Create a new, empty [`ColorHistogram`] with `buckets_per_channel(detail)^3` buckets.
    pub fn new(detail: Detail) -> Self {
        let len = 1usize << (3 * detail.bits_per_channel());
        Self {
            detail,
            buckets: bytemuck::zeroed_slice_box(len),
            total: 0,
        }
    }

    /// Returns the detail level of the histogram.
    #[inline]
    pub fn detail(&self) -> Detail {
        self.detail
    }

    /// Returns the number of pixels accumulated so far.
    #[inline]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Returns the packed bucket key of the given color.
    #[inline]
    fn key(bits: u32, components: &[u8; 3]) -> usize {
        let shift = u8::BITS - bits;
        let [c1, c2, c3] = components.map(|c| usize::from(c >> shift));
        ((c1 << bits) | c2) << bits | c3
    }

    /// Add the given colors to the histogram.
    ///
    /// The caller must ensure the running total stays within
    /// [`MAX_PIXELS`](crate::MAX_PIXELS).
    pub fn add_colors(&mut self, colors: &[[u8; 3]]) {
        let bits = self.detail.bits_per_channel();
        for color in colors {
            let BucketStats { count, components } = &mut self.buckets[Self::key(bits, color)];
            *count += 1;
            for (c, &v) in components.iter_mut().zip(color) {
                *c += u64::from(v);
            }
        }
        #[allow(clippy::cast_possible_truncation)]
        {
            self.total += colors.len() as u32;
        }
    }

    /// Returns an iterator over the non-empty buckets and their packed keys,
    /// in ascending key order.
    pub fn occupied(&self) -> impl Iterator<Item = (u32, &BucketStats)> {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, stats)| stats.count > 0)
            .map(|(key, stats)| {
                #[allow(clippy::cast_possible_truncation)] // keys fit in 18 bits
                (key as u32, stats)
            })
    }

    /// Returns the number of non-empty buckets.
    pub fn occupied_len(&self) -> usize {
        self.buckets.iter().filter(|stats| stats.count > 0).count()
    }
}

#[cfg(feature = "threads")]
impl ColorHistogram {
    /// Merge two partial histograms by element-wise summing their buckets.
    ///
    /// Both histograms must have been created with the same detail level.
    #[allow(clippy::needless_pass_by_value)]
    pub fn merge_partial(mut a: Self, b: Self) -> Self {
        debug_assert_eq!(a.detail, b.detail);
        for (a, b) in a.buckets.iter_mut().zip(&b.buckets) {
            a.count += b.count;
            for (c, &v) in a.components.iter_mut().zip(&b.components) {
                *c += v;
            }
        }
        a.total += b.total;
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn keys_span_the_full_range() {
        let bits = Detail::LOW.bits_per_channel();
        assert_eq!(ColorHistogram::key(bits, &[0, 0, 0]), 0);
        assert_eq!(ColorHistogram::key(bits, &[255, 255, 255]), 8 * 8 * 8 - 1);
        assert_eq!(ColorHistogram::key(bits, &[255, 0, 0]), 7 << 6);
        assert_eq!(ColorHistogram::key(bits, &[0, 0, 255]), 7);
    }

    #[test]
    fn counts_and_sums_accumulate() {
        let mut hist = ColorHistogram::new(Detail::LOW);
        hist.add_colors(&[[200, 0, 0], [210, 10, 0], [0, 0, 255]]);

        assert_eq!(hist.total(), 3);
        assert_eq!(hist.occupied_len(), 2);

        let buckets = hist.occupied().collect::<Vec<_>>();
        let (_, blue) = buckets[0];
        let (_, red) = buckets[1];
        assert_eq!(blue.count, 1);
        assert_eq!(blue.components, [0, 0, 255]);
        assert_eq!(red.count, 2);
        assert_eq!(red.components, [410, 10, 0]);
    }

    #[cfg(feature = "threads")]
    #[test]
    fn merge_matches_sequential() {
        let colors = crate::tests::test_colors_1024()
            .iter()
            .map(|srgb| [srgb.red, srgb.green, srgb.blue])
            .collect::<Vec<_>>();

        let mut sequential = ColorHistogram::new(Detail::STANDARD);
        sequential.add_colors(&colors);

        let (head, tail) = colors.split_at(colors.len() / 3);
        let mut a = ColorHistogram::new(Detail::STANDARD);
        a.add_colors(head);
        let mut b = ColorHistogram::new(Detail::STANDARD);
        b.add_colors(tail);
        let merged = ColorHistogram::merge_partial(a, b);

        assert_eq!(merged.total(), sequential.total());
        assert_eq!(merged.buckets, sequential.buckets);
    }
}

use alloc::vec::Vec;
use core::{
    error::Error,
    fmt::{self, Debug},
};

/// The reason a [`ColorWeights`] failed to be created.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateColorWeightsErrorReason {
    /// The length of the provided palette and the provided weights did not match.
    LengthMismatch,
    /// The sum of weights overflowed a `u32`.
    Overflow,
    /// The provided weights were not in descending order.
    Unsorted,
}

impl fmt::Display for CreateColorWeightsErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch => write!(
                f,
                "the length of the provided palette and the provided weights do not match",
            ),
            Self::Overflow => write!(f, "the sum of weights overflowed a u32"),
            Self::Unsorted => write!(f, "the provided weights are not in descending order"),
        }
    }
}

impl Error for CreateColorWeightsErrorReason {}

/// The error returned when a [`ColorWeights`] failed to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateColorWeightsError<Color> {
    /// The reason the [`ColorWeights`] failed to be created.
    pub reason: CreateColorWeightsErrorReason,
    /// The provided palette of colors.
    pub palette: Vec<Color>,
    /// The provided weights for each color.
    pub weights: Vec<u32>,
}

impl<Color> fmt::Display for CreateColorWeightsError<Color> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl<Color: Debug> Error for CreateColorWeightsError<Color> {}

/// A palette of representative colors and their corresponding pixel weights,
/// ordered by descending weight.
///
/// This is the result of a dominant color extraction. The weight of a color is the
/// number of input pixels whose quantization bucket it represents, so the sum of all
/// weights (the [`total_weight`](ColorWeights::total_weight)) equals the number of
/// pixels that were accumulated.
///
/// Extraction orders colors by descending weight, with ties broken by descending
/// quantization bucket key. See [`MainColors`](crate::MainColors).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorWeights<Color> {
    /// The palette of representative colors.
    palette: Vec<Color>,
    /// The pixel weights corresponding to each `palette` color.
    weights: Vec<u32>,
    /// The sum of `weights`.
    total_weight: u32,
}

impl<Color> ColorWeights<Color> {
    /// Create a new [`ColorWeights`] without validating invariants.
    #[inline]
    pub(crate) fn new_unchecked(palette: Vec<Color>, weights: Vec<u32>, total_weight: u32) -> Self {
        debug_assert_eq!(palette.len(), weights.len());
        debug_assert_eq!(total_weight, weights.iter().copied().sum::<u32>());
        debug_assert!(weights.is_sorted_by(|a, b| a >= b));
        Self { palette, weights, total_weight }
    }

    /// Create a new [`ColorWeights`] from a [`Vec`] of palette colors
    /// and a [`Vec`] of corresponding weights.
    ///
    /// # Errors
    ///
    /// The provided `palette` and `weights` are returned as an `Err` if any of the
    /// following are true:
    /// - The length of `palette` and `weights` do not match.
    /// - The sum of `weights` overflows a `u32`.
    /// - The `weights` are not in descending order.
    #[inline]
    pub fn new(
        palette: Vec<Color>,
        weights: Vec<u32>,
    ) -> Result<Self, CreateColorWeightsError<Color>> {
        let reason = if palette.len() != weights.len() {
            CreateColorWeightsErrorReason::LengthMismatch
        } else if !weights.is_sorted_by(|a, b| a >= b) {
            CreateColorWeightsErrorReason::Unsorted
        } else if let Some(total_weight) = weights.iter().copied().try_fold(0, u32::checked_add) {
            return Ok(Self::new_unchecked(palette, weights, total_weight));
        } else {
            CreateColorWeightsErrorReason::Overflow
        };
        Err(CreateColorWeightsError { reason, palette, weights })
    }

    /// Consume a [`ColorWeights`] and return the inner [`Vec`] of palette colors
    /// and [`Vec`] of weights.
    #[must_use]
    #[inline]
    pub fn into_parts(self) -> (Vec<Color>, Vec<u32>) {
        let Self { palette, weights, .. } = self;
        (palette, weights)
    }

    /// Returns a slice of the palette colors, heaviest first.
    #[inline]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Returns a slice of the pixel weights, heaviest first.
    #[inline]
    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    /// Returns the sum of the [`weights`](Self::weights) for all palette colors.
    ///
    /// This operation is `O(1)`. The total weight is calculated on creation and never
    /// changes.
    #[inline]
    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.palette.len()
    }

    /// Returns whether the palette has zero colors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.palette.is_empty()
    }

    /// Returns an iterator over the palette colors and their weights, heaviest first.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&Color, u32)> {
        self.palette.iter().zip(self.weights.iter().copied())
    }

    /// Keep only the heaviest `len` colors, dropping the rest.
    ///
    /// Does nothing if the palette already has `len` or fewer colors. The total weight
    /// is reduced by the weights of the dropped colors.
    pub(crate) fn truncate(&mut self, len: usize) {
        if len < self.palette.len() {
            let dropped: u32 = self.weights[len..].iter().copied().sum();
            self.palette.truncate(len);
            self.weights.truncate(len);
            self.total_weight -= dropped;
        }
    }
}

impl<Color> Default for ColorWeights<Color> {
    #[inline]
    fn default() -> Self {
        Self::new_unchecked(Vec::new(), Vec::new(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use palette::Srgb;

    fn rgb(r: u8, g: u8, b: u8) -> Srgb<u8> {
        Srgb::new(r, g, b)
    }

    #[test]
    fn validates_on_creation() {
        let err = ColorWeights::new(vec![rgb(0, 0, 0)], vec![2, 1]).unwrap_err();
        assert_eq!(err.reason, CreateColorWeightsErrorReason::LengthMismatch);

        let err = ColorWeights::new(vec![rgb(0, 0, 0), rgb(1, 1, 1)], vec![1, 2]).unwrap_err();
        assert_eq!(err.reason, CreateColorWeightsErrorReason::Unsorted);

        let err =
            ColorWeights::new(vec![rgb(0, 0, 0), rgb(1, 1, 1)], vec![u32::MAX, 1]).unwrap_err();
        assert_eq!(err.reason, CreateColorWeightsErrorReason::Overflow);

        let weights = ColorWeights::new(vec![rgb(0, 0, 0), rgb(1, 1, 1)], vec![3, 1]).unwrap();
        assert_eq!(weights.total_weight(), 4);
        assert_eq!(weights.len(), 2);
    }

    #[test]
    fn truncate_keeps_heaviest() {
        let mut weights =
            ColorWeights::new(vec![rgb(1, 0, 0), rgb(0, 1, 0), rgb(0, 0, 1)], vec![5, 3, 2])
                .unwrap();
        weights.truncate(2);
        assert_eq!(weights.palette(), &[rgb(1, 0, 0), rgb(0, 1, 0)]);
        assert_eq!(weights.weights(), &[5, 3]);
        assert_eq!(weights.total_weight(), 8);

        weights.truncate(10);
        assert_eq!(weights.len(), 2);
    }
}

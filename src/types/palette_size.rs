use core::{
    error::Error,
    fmt::{self, Debug},
    num::{NonZeroU8, NonZeroU16},
};

/// The error returned when attempting to convert an out of range integer into a [`PaletteSize`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PaletteSizeFromIntError(());

impl fmt::Display for PaletteSizeFromIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("out of range conversion from integer to palette size")
    }
}

impl Error for PaletteSizeFromIntError {}

/// A cap on the number of colors returned by an extraction.
///
/// This is a simple new type wrapper around `u16` with the invariant that it must be
/// in the range `1..=256` specified by [`PaletteSize::MIN`] and [`PaletteSize::MAX`].
///
/// # Examples
///
/// ```
/// # use core::num::NonZeroU8;
/// # use main_colors::{PaletteSize, PaletteSizeFromIntError};
/// # fn main() -> Result<(), PaletteSizeFromIntError> {
/// let size: PaletteSize = 8u16.try_into()?;
/// assert_eq!(size, 8u16);
/// assert_eq!(PaletteSize::try_from_u16(1024), None);
/// assert_eq!(PaletteSize::from_usize_clamped(1024), PaletteSize::MAX);
/// assert_eq!(PaletteSize::from_nz_u8(NonZeroU8::MIN), PaletteSize::MIN);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PaletteSize(NonZeroU16);

impl PaletteSize {
    /// The smallest possible palette size, which is `1`.
    pub const MIN: Self = Self(NonZeroU16::MIN);

    /// The largest possible palette size, which is `256`.
    pub const MAX: Self = Self(NonZeroU16::new(u8::MAX as u16 + 1).unwrap());

    /// Returns a [`PaletteSize`] as a [`NonZeroU16`].
    #[inline]
    #[must_use]
    pub const fn as_nz_u16(&self) -> NonZeroU16 {
        self.0
    }

    /// Returns a [`PaletteSize`] as a `u16`.
    #[inline]
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.as_nz_u16().get()
    }

    /// Returns a [`PaletteSize`] as a `usize`.
    #[inline]
    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.as_u16() as usize
    }

    /// Create a [`PaletteSize`] directly from the given [`NonZeroU16`]
    /// without ensuring that it is less than or equal to [`PaletteSize::MAX`].
    #[inline]
    const fn new_unchecked(value: NonZeroU16) -> Self {
        debug_assert!(value.get() <= Self::MAX.as_u16());
        Self(value)
    }

    /// Create a [`PaletteSize`] from a `u16`, returning `None` if the provided `value`
    /// is less than [`PaletteSize::MIN`] or greater than [`PaletteSize::MAX`].
    #[must_use]
    #[inline]
    pub const fn try_from_u16(value: u16) -> Option<Self> {
        match NonZeroU16::new(value) {
            Some(size) if size.get() <= Self::MAX.as_u16() => Some(Self::new_unchecked(size)),
            _ => None,
        }
    }

    /// Create a [`PaletteSize`] from a `usize`, clamping the provided `value` to
    /// the range specified by [`PaletteSize::MIN`] and [`PaletteSize::MAX`].
    #[must_use]
    #[inline]
    pub const fn from_usize_clamped(value: usize) -> Self {
        if value <= Self::MAX.as_usize() {
            #[allow(clippy::cast_possible_truncation)]
            if let Some(size) = NonZeroU16::new(value as u16) {
                Self::new_unchecked(size)
            } else {
                Self::MIN
            }
        } else {
            Self::MAX
        }
    }

    /// Create a [`PaletteSize`] from a [`NonZeroU8`].
    #[allow(clippy::expect_used, clippy::missing_panics_doc)] // compiler removes the `expect` with opt_level=3
    #[must_use]
    #[inline]
    pub const fn from_nz_u8(value: NonZeroU8) -> Self {
        Self::new_unchecked(
            NonZeroU16::new(value.get() as u16).expect("nonzero u8 to be nonzero u16"),
        )
    }
}

impl From<PaletteSize> for NonZeroU16 {
    #[inline]
    fn from(size: PaletteSize) -> Self {
        size.as_nz_u16()
    }
}

impl From<PaletteSize> for u16 {
    #[inline]
    fn from(size: PaletteSize) -> Self {
        size.as_u16()
    }
}

impl From<PaletteSize> for usize {
    #[inline]
    fn from(size: PaletteSize) -> Self {
        size.as_usize()
    }
}

impl From<NonZeroU8> for PaletteSize {
    #[inline]
    fn from(value: NonZeroU8) -> Self {
        Self::from_nz_u8(value)
    }
}

impl TryFrom<u16> for PaletteSize {
    type Error = PaletteSizeFromIntError;

    #[inline]
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::try_from_u16(value).ok_or(PaletteSizeFromIntError(()))
    }
}

impl TryFrom<usize> for PaletteSize {
    type Error = PaletteSizeFromIntError;

    #[inline]
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .ok()
            .and_then(Self::try_from_u16)
            .ok_or(PaletteSizeFromIntError(()))
    }
}

impl PartialEq<u16> for PaletteSize {
    #[inline]
    fn eq(&self, other: &u16) -> bool {
        self.as_u16() == *other
    }
}

impl PartialEq<PaletteSize> for u16 {
    #[inline]
    fn eq(&self, other: &PaletteSize) -> bool {
        *self == other.as_u16()
    }
}

impl PartialEq<usize> for PaletteSize {
    #[inline]
    fn eq(&self, other: &usize) -> bool {
        self.as_usize() == *other
    }
}

impl PartialEq<PaletteSize> for usize {
    #[inline]
    fn eq(&self, other: &PaletteSize) -> bool {
        *self == other.as_usize()
    }
}

impl fmt::Display for PaletteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(size) = *self;
        write!(f, "{size}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(PaletteSize::MIN, 1u16);
        assert_eq!(PaletteSize::MAX, 256u16);
        assert_eq!(PaletteSize::try_from_u16(0), None);
        assert_eq!(PaletteSize::try_from_u16(257), None);
        assert_eq!(PaletteSize::try_from(256u16), Ok(PaletteSize::MAX));
        assert_eq!(PaletteSize::from_usize_clamped(0), PaletteSize::MIN);
    }
}

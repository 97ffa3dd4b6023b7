use core::{
    error::Error,
    fmt::{self, Debug},
};

/// The error returned when attempting to convert an out of range integer into a [`Detail`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DetailFromIntError(());

impl fmt::Display for DetailFromIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("out of range conversion from integer to detail level")
    }
}

impl Error for DetailFromIntError {}

/// The granularity of the color quantization used during extraction.
///
/// This is a simple new type wrapper around `u8` with the invariant that it must be
/// in the range `0..=3` specified by [`Detail::MIN`] and [`Detail::MAX`].
///
/// A detail of `0` merges colors into the coarsest (and fewest) buckets, while each
/// higher level splits every bucket of the previous level in two along each channel.
/// That is, a higher detail always yields the same or more distinct colors for the
/// same input. Concretely, level `d` keeps the upper `3 + d` bits of each color
/// channel, giving `8 << d` buckets per channel.
///
/// # Examples
///
/// A [`Detail`] can be created from the named levels, or from an integer where out of
/// range values (including negative ones) are rejected:
///
/// ```
/// # use main_colors::{Detail, DetailFromIntError};
/// # fn main() -> Result<(), DetailFromIntError> {
/// let detail: Detail = 2u8.try_into()?;
/// assert_eq!(detail, Detail::HIGH);
/// assert!(Detail::try_from(-1i32).is_err());
/// assert!(Detail::try_from(4u8).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Detail(u8);

impl Detail {
    /// The coarsest detail level, which is `0`.
    pub const MIN: Self = Self(0);

    /// The finest detail level, which is `3`.
    pub const MAX: Self = Self(3);

    /// The coarsest detail level with `8` buckets per channel. Equal to [`Detail::MIN`].
    pub const LOW: Self = Self(0);

    /// The default detail level with `16` buckets per channel.
    pub const STANDARD: Self = Self(1);

    /// A fine detail level with `32` buckets per channel.
    pub const HIGH: Self = Self(2);

    /// Returns a [`Detail`] as a `u8`.
    #[inline]
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Create a [`Detail`] from a `u8`, returning `None` if the provided `value`
    /// is greater than [`Detail::MAX`].
    #[must_use]
    #[inline]
    pub const fn try_from_u8(value: u8) -> Option<Self> {
        if value <= Self::MAX.as_u8() {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create a [`Detail`] from a `u8`, clamping the provided `value` to
    /// a maximum of [`Detail::MAX`].
    #[must_use]
    #[inline]
    pub const fn from_u8_clamped(value: u8) -> Self {
        if let Some(detail) = Self::try_from_u8(value) {
            detail
        } else {
            Self::MAX
        }
    }

    /// Returns the number of bits of each color channel that survive quantization.
    #[inline]
    #[must_use]
    pub const fn bits_per_channel(&self) -> u32 {
        3 + self.0 as u32
    }

    /// Returns the number of quantization buckets along each color channel.
    #[inline]
    #[must_use]
    pub const fn buckets_per_channel(&self) -> u32 {
        1 << self.bits_per_channel()
    }
}

impl From<Detail> for u8 {
    #[inline]
    fn from(detail: Detail) -> Self {
        detail.as_u8()
    }
}

impl From<Detail> for u32 {
    #[inline]
    fn from(detail: Detail) -> Self {
        u32::from(detail.as_u8())
    }
}

impl From<Detail> for usize {
    #[inline]
    fn from(detail: Detail) -> Self {
        usize::from(detail.as_u8())
    }
}

impl TryFrom<u8> for Detail {
    type Error = DetailFromIntError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_u8(value).ok_or(DetailFromIntError(()))
    }
}

impl TryFrom<u32> for Detail {
    type Error = DetailFromIntError;

    #[inline]
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::try_from_u8)
            .ok_or(DetailFromIntError(()))
    }
}

impl TryFrom<usize> for Detail {
    type Error = DetailFromIntError;

    #[inline]
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::try_from_u8)
            .ok_or(DetailFromIntError(()))
    }
}

impl TryFrom<i32> for Detail {
    type Error = DetailFromIntError;

    #[inline]
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::try_from_u8)
            .ok_or(DetailFromIntError(()))
    }
}

impl PartialEq<u8> for Detail {
    #[inline]
    fn eq(&self, other: &u8) -> bool {
        self.as_u8() == *other
    }
}

impl PartialEq<Detail> for u8 {
    #[inline]
    fn eq(&self, other: &Detail) -> bool {
        *self == other.as_u8()
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(detail) = *self;
        write!(f, "{detail}")
    }
}

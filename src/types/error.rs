use crate::MAX_PIXELS;
use core::{
    error::Error,
    fmt::{self, Debug},
};

/// The error returned when the number of input pixels is not in the supported range.
///
/// Extraction requires at least one pixel and at most [`MAX_PIXELS`] pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelsOutOfRange {
    /// The number of pixels that were provided.
    len: usize,
    /// The minimum supported number of pixels.
    min: u32,
    /// The maximum supported number of pixels.
    max: u32,
}

impl PixelsOutOfRange {
    /// Returns the number of pixels that were provided.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) const fn check_u32<T>(slice: &[T], min: u32, max: u32) -> Result<u32, Self> {
        let len = slice.len();
        #[allow(clippy::cast_possible_truncation)]
        if min as usize <= len && len <= max as usize {
            Ok(len as u32)
        } else {
            Err(Self { len, min, max })
        }
    }

    #[inline]
    pub(crate) const fn check_dimensions(width: u32, height: u32) -> Result<u32, Self> {
        match width.checked_mul(height) {
            Some(len) if len > 0 => Ok(len),
            _ => Err(Self {
                len: width as usize * height as usize,
                min: 1,
                max: MAX_PIXELS,
            }),
        }
    }
}

impl fmt::Display for PixelsOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { len, min, max } = *self;
        if len == 0 {
            write!(f, "got an input with no pixels, but at least {min} is required")
        } else {
            write!(
                f,
                "got an input with {len} pixels which is not in the supported range of {min}..={max}",
            )
        }
    }
}

impl Error for PixelsOutOfRange {}

/// The error returned when a [`PixelGrid`](crate::PixelGrid) failed to be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateGridError {
    /// The provided grid width.
    pub(crate) width: u32,
    /// The provided grid height.
    pub(crate) height: u32,
    /// The length of the pixel buffer.
    pub(crate) length: usize,
}

impl fmt::Display for CreateGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { width, height, length } = *self;
        if width.checked_mul(height).is_some() {
            write!(
                f,
                "grid dimensions of ({width}, {height}) do not match the buffer length of {length}"
            )
        } else {
            write!(
                f,
                "grid dimensions of ({width}, {height}) are above the maximum number of pixels of {MAX_PIXELS}",
            )
        }
    }
}

impl Error for CreateGridError {}

/// The error returned when a [`PixelGrid`](crate::PixelGrid) failed to be created.
/// Includes the pixel buffer used to try and create the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateGridBufError<T> {
    /// The underlying error/reason.
    pub error: CreateGridError,
    /// The provided container holding the pixels of the grid.
    pub buffer: T,
}

impl<T> fmt::Display for CreateGridBufError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<T: Debug> Error for CreateGridBufError<T> {}

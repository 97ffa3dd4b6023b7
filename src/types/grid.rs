use crate::{CreateGridBufError, CreateGridError};
use alloc::{vec, vec::Vec};
use core::{
    fmt::Debug,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

/// The base pixel grid type parameterized by the type of the container.
///
/// Typically you want to use one of the grid types with a defined container:
/// - [`GridBuf`]: an owned grid backed by a [`Vec`].
/// - [`GridRef`]: a borrowed grid backed by an immutable slice reference.
#[derive(Clone, Copy, Debug)]
pub struct PixelGrid<Color, Container> {
    /// The color type stored in `pixels`.
    color: PhantomData<Color>,
    /// The width of the grid.
    width: u32,
    /// The height of the grid.
    height: u32,
    /// The pixel buffer or slice in row-major order.
    pixels: Container,
}

/// An owned pixel grid backed by a [`Vec`].
///
/// This type consists of a width, a height, and a pixel buffer in row-major order.
/// The length of the pixel [`Vec`] is guaranteed to match `width * height` and be less
/// than or equal to [`MAX_PIXELS`](crate::MAX_PIXELS).
///
/// # Examples
///
/// ```
/// # use main_colors::GridBuf;
/// # use palette::Srgb;
/// let (width, height) = (4, 4);
/// let pixels = vec![Srgb::new(0u8, 0, 0); (width * height) as usize];
/// let grid = GridBuf::new(width, height, pixels).unwrap();
/// assert_eq!(grid.num_pixels(), 16);
/// ```
pub type GridBuf<Color> = PixelGrid<Color, Vec<Color>>;

/// A borrowed pixel grid backed by a reference to a slice.
///
/// This type consists of a width, a height, and a pixel slice in row-major order.
/// The length of the pixel slice is guaranteed to match `width * height` and be less
/// than or equal to [`MAX_PIXELS`](crate::MAX_PIXELS).
///
/// Use [`as_ref`](PixelGrid::as_ref) to borrow a [`GridBuf`] as a [`GridRef`].
pub type GridRef<'a, Color> = PixelGrid<Color, &'a [Color]>;

impl<Color, Container> PixelGrid<Color, Container> {
    /// Returns the width and height of the grid.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the width of the grid.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the grid.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns whether the grid has zero pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the underlying pixel container.
    #[must_use]
    #[inline]
    pub fn into_inner(self) -> Container {
        self.pixels
    }
}

impl<Color, Container: AsRef<[Color]>> PixelGrid<Color, Container> {
    /// Create a new [`PixelGrid`] without validating invariants.
    #[inline]
    pub(crate) fn new_unchecked(width: u32, height: u32, pixels: Container) -> Self {
        debug_assert_eq!(
            width.checked_mul(height).map(|len| len as usize),
            Some(pixels.as_ref().len())
        );
        Self {
            color: PhantomData,
            width,
            height,
            pixels,
        }
    }

    /// Create a new [`PixelGrid`] from a width, a height, and a `Container` of pixels
    /// in row-major order.
    ///
    /// # Errors
    ///
    /// The provided `pixels` is returned as an `Err` if any of the following are true:
    /// - The length of `pixels` and `width * height` do not match.
    /// - `width * height` overflows a `u32`.
    #[inline]
    pub fn new(
        width: u32,
        height: u32,
        pixels: Container,
    ) -> Result<Self, CreateGridBufError<Container>> {
        let length = pixels.as_ref().len();
        if width.checked_mul(height).map(|len| len as usize) == Some(length) {
            Ok(Self::new_unchecked(width, height, pixels))
        } else {
            let error = CreateGridError { width, height, length };
            Err(CreateGridBufError { error, buffer: pixels })
        }
    }

    /// Returns the number of pixels in the grid specified by `width * height`.
    #[allow(clippy::cast_possible_truncation)]
    #[inline]
    pub fn num_pixels(&self) -> u32 {
        self.pixels.as_ref().len() as u32
    }

    /// Returns a reference to the underlying pixels as a slice in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[Color] {
        self.pixels.as_ref()
    }

    /// Returns a reference to the pixel at the given column and row,
    /// or `None` if `(x, y)` is outside the grid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<&Color> {
        if x < self.width && y < self.height {
            self.as_slice().get(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Borrow a [`PixelGrid`] as a [`GridRef`].
    #[inline]
    pub fn as_ref(&self) -> GridRef<'_, Color> {
        let (width, height) = self.dimensions();
        PixelGrid::new_unchecked(width, height, self.as_slice())
    }
}

impl<Color: Clone> GridBuf<Color> {
    /// Create a new [`GridBuf`] by cloning a specific color.
    ///
    /// Returns `None` if `width * height` overflows a `u32`.
    #[must_use]
    #[inline]
    pub fn from_pixel(width: u32, height: u32, pixel: Color) -> Option<Self> {
        let len = width.checked_mul(height)?;
        let pixels = vec![pixel; len as usize];
        Some(Self::new_unchecked(width, height, pixels))
    }
}

impl<Color> Default for GridBuf<Color> {
    #[inline]
    fn default() -> Self {
        Self::new_unchecked(0, 0, Vec::new())
    }
}

impl<Color> Default for GridRef<'_, Color> {
    #[inline]
    fn default() -> Self {
        Self::new_unchecked(0, 0, &[])
    }
}

impl<ColorA, ColorB, ContainerA, ContainerB> PartialEq<PixelGrid<ColorB, ContainerB>>
    for PixelGrid<ColorA, ContainerA>
where
    ColorA: PartialEq<ColorB>,
    ContainerA: AsRef<[ColorA]>,
    ContainerB: AsRef<[ColorB]>,
{
    fn eq(&self, other: &PixelGrid<ColorB, ContainerB>) -> bool {
        self.dimensions() == other.dimensions() && self.as_slice() == other.as_slice()
    }
}

impl<Color, Container> Eq for PixelGrid<Color, Container>
where
    Color: PartialEq<Color>,
    Container: AsRef<[Color]>,
{
}

impl<Color, Container> Hash for PixelGrid<Color, Container>
where
    Color: Hash,
    Container: AsRef<[Color]>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.height.hash(state);
        self.pixels.as_ref().hash(state);
    }
}

#[cfg(feature = "image")]
mod image_integration {
    use super::{GridBuf, GridRef, PixelGrid};
    use crate::{CreateGridBufError, CreateGridError, PixelsOutOfRange};
    use alloc::vec::Vec;
    use image::RgbImage;
    use palette::{
        Srgb,
        cast::{ComponentsAs as _, ComponentsInto as _, IntoComponents as _},
    };

    impl From<GridBuf<Srgb<u8>>> for RgbImage {
        #[allow(clippy::expect_used)]
        fn from(grid: GridBuf<Srgb<u8>>) -> Self {
            let PixelGrid { width, height, pixels, .. } = grid;
            RgbImage::from_raw(width, height, pixels.into_components())
                .expect("buffer is large enough")
        }
    }

    impl TryFrom<RgbImage> for GridBuf<Srgb<u8>> {
        type Error = CreateGridBufError<RgbImage>;

        fn try_from(image: RgbImage) -> Result<Self, Self::Error> {
            let (width, height) = image.dimensions();
            if let Some(len) = width.checked_mul(height) {
                let mut buf = image.into_raw();
                buf.truncate(len as usize * 3);
                assert_eq!(buf.len(), len as usize * 3); // in case buf.len() < len * 3
                let pixels: Vec<Srgb<u8>> = buf.components_into();
                Ok(Self::new_unchecked(width, height, pixels))
            } else {
                let error = CreateGridError {
                    width,
                    height,
                    length: image.pixels().len(),
                };
                Err(CreateGridBufError { error, buffer: image })
            }
        }
    }

    impl<'a> TryFrom<&'a RgbImage> for GridRef<'a, Srgb<u8>> {
        type Error = PixelsOutOfRange;

        fn try_from(image: &'a RgbImage) -> Result<Self, Self::Error> {
            let (width, height) = image.dimensions();
            let len = PixelsOutOfRange::check_dimensions(width, height)?;
            let slice = &image.as_raw()[..len as usize * 3];
            let pixels: &[Srgb<u8>] = slice.components_as();
            Ok(Self::new_unchecked(width, height, pixels))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgb;

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let pixels = vec![Srgb::new(0u8, 0, 0); 5];
        let err = GridBuf::new(2, 2, pixels).unwrap_err();
        assert_eq!(err.error, CreateGridError { width: 2, height: 2, length: 5 });

        let pixels = vec![Srgb::new(0u8, 0, 0); 4];
        assert!(GridBuf::new(2, 2, pixels).is_ok());
    }

    #[test]
    fn pixel_accessor_is_row_major() {
        let pixels = (0..6u8).map(|i| Srgb::new(i, 0, 0)).collect::<Vec<_>>();
        let grid = GridBuf::new(3, 2, pixels).unwrap();
        assert_eq!(grid.get(0, 0), Some(&Srgb::new(0, 0, 0)));
        assert_eq!(grid.get(2, 0), Some(&Srgb::new(2, 0, 0)));
        assert_eq!(grid.get(0, 1), Some(&Srgb::new(3, 0, 0)));
        assert_eq!(grid.get(2, 1), Some(&Srgb::new(5, 0, 0)));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[cfg(feature = "image")]
    #[test]
    fn image_round_trip() {
        use image::RgbImage;

        let mut image = RgbImage::new(2, 2);
        image.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        let grid = GridBuf::try_from(image.clone()).unwrap();
        assert_eq!(grid.get(0, 0), Some(&Srgb::new(255u8, 0, 0)));
        let back = RgbImage::from(grid);
        assert_eq!(back, image);
    }
}

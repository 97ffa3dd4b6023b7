use palette::cast::ArrayCast;

/// Types that may be cast to and from a fixed sized array.
///
/// The extractor operates over a color type whose channels are laid out as an array.
/// These types must implement [`ArrayCast`] where `Component` is the data type and `N`
/// is the number of channels, such as [`Srgb<u8>`](palette::Srgb) with `u8` and `3`.
pub trait ColorComponents<Component, const N: usize>:
    ArrayCast<Array = [Component; N]> + Copy + Send + Sync + 'static
{
}

impl<Color, Component, const N: usize> ColorComponents<Component, N> for Color where
    Color: ArrayCast<Array = [Component; N]> + Copy + Send + Sync + 'static
{
}

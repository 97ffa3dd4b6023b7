mod detail;
mod error;
mod grid;
mod palette_size;
mod weights;

pub use detail::*;
pub use error::*;
pub use grid::*;
pub use palette_size::*;
pub use weights::*;

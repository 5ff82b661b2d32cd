#![deny(clippy::all)]

mod color;

pub use color::Colors;
pub use color::init as color_init;
pub use color::is_disabled as color_is_disabled;

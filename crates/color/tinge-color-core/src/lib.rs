//! tinge-color-core: RGBA color values over the tinge math types.

pub mod color;
pub mod error;
pub mod json;
pub mod names;
pub mod palette;
pub mod parse;

pub use color::{Color4, Color4d, Color4f};
pub use error::ColorError;

//! tinge-math-core: fixed-size vector/tuple math shared by the color crates.

pub mod scalar;
pub mod vec3;
pub mod vec4;

pub use scalar::{lerp, Scalar};
pub use vec3::Vec3;
pub use vec4::Vec4;

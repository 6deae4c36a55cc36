//! Math Library for the Lorenz viewer
//!
//! This crate provides the small amount of linear algebra and color math the
//! viewer needs.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Mat4`] - 4x4 column-major matrix for camera transforms
//!
//! ## Color
//!
//! - [`color::hsv_to_rgba`] - hue/saturation/value to RGBA conversion

mod vec3;
pub mod mat4;
pub mod color;

pub use vec3::Vec3;
pub use mat4::Mat4;
pub use color::{hsv_to_rgba, srgb_to_linear, Rgba};

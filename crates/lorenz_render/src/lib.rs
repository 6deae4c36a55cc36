//! Rendering Library for the Lorenz viewer
//!
//! This crate provides the wgpu-based pipeline that draws the attractor's
//! trajectory as a color-graded polyline seen from an orbiting camera.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::OrbitCamera`] - Camera circling the attractor, aimed at the newest point
//! - [`gradient::HueGradient`] - Hue progression along the path
//! - [`pipeline::LinePipeline`] - Instanced wide-line rendering with depth

pub mod context;
pub mod camera;
pub mod gradient;
pub mod pipeline;

pub use camera::{CameraView, OrbitCamera};
pub use gradient::{build_segments, HueGradient};
pub use lorenz_math::{Vec3, Mat4, Rgba};

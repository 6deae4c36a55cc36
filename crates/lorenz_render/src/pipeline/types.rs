//! GPU-compatible data types for the line pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use lorenz_math::{mat4::IDENTITY, Mat4, Rgba, Vec3};

/// One trajectory segment, consumed per instance by the vertex shader
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct LineInstance {
    /// World-space start point
    pub start: [f32; 3],
    /// World-space end point
    pub end: [f32; 3],
    /// RGBA color in the surface's color space
    pub color: [f32; 4],
}

impl LineInstance {
    pub fn new(start: Vec3, end: Vec3, color: Rgba) -> Self {
        Self {
            start: start.to_array(),
            end: end.to_array(),
            color,
        }
    }
}

/// Uniforms for the line pass
/// Layout: 80 bytes total (must match line.wgsl LineUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LineUniforms {
    /// World-to-clip matrix (64 bytes)
    pub view_projection: Mat4,
    /// Surface size in pixels
    pub viewport: [f32; 2],
    /// Line width in pixels
    pub line_width: f32,
    pub _padding: f32,
}

impl Default for LineUniforms {
    fn default() -> Self {
        Self {
            view_projection: IDENTITY,
            viewport: [1.0, 1.0],
            line_width: 1.0,
            _padding: 0.0,
        }
    }
}

/// Vertices emitted per segment (two triangles)
pub const QUAD_VERTEX_COUNT: u32 = 6;

//! Rendering pipeline components
//!
//! This module contains the instanced line pipeline that draws the
//! trajectory with a configurable pixel width.

pub mod types;
pub mod line_pipeline;

// Re-export types
pub use types::{LineInstance, LineUniforms, QUAD_VERTEX_COUNT};

// Re-export pipelines
pub use line_pipeline::LinePipeline;

//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Line pipeline and segment upload
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use lorenz_math::srgb_to_linear;
use lorenz_render::{
    build_segments,
    context::{ContextError, RenderContext},
    pipeline::{LineInstance, LinePipeline, LineUniforms},
    CameraView, HueGradient,
};
use lorenz_sim::{Trajectory, DEFAULT_TRAJECTORY_CAPACITY};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU context could not be created
    Context(ContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "Render context error: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            // Both need the surface reconfigured before the next frame
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            e => RenderError::Other(format!("{:?}", e)),
        }
    }
}

/// Whether a surface of this size can be configured and drawn to
fn is_drawable_size(width: u32, height: u32) -> bool {
    width > 0 && height > 0
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    line_pipeline: LinePipeline,
    render_config: RenderingConfig,
    /// Reused per-frame segment storage
    segments: Vec<LineInstance>,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let max_segments = DEFAULT_TRAJECTORY_CAPACITY - 1;
        let mut line_pipeline =
            LinePipeline::new(&context.device, context.config.format, max_segments);

        // Depth follows the configured surface, which is never zero-sized
        line_pipeline.ensure_depth_texture(
            &context.device,
            context.config.width,
            context.config.height,
        );

        log::info!(
            "Render system ready: {}x{} {:?}",
            context.size.width,
            context.size.height,
            context.config.format
        );

        Ok(Self {
            context,
            line_pipeline,
            render_config,
            segments: Vec::with_capacity(max_segments),
        })
    }

    /// Handle window resize
    ///
    /// Zero-sized requests (minimized window) leave the surface and depth
    /// texture untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        if !is_drawable_size(width, height) {
            log::debug!("Ignoring resize to {}x{}", width, height);
            return;
        }
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.line_pipeline.ensure_depth_texture(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// Reconfigure the surface at its current size (after `SurfaceLost`)
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.resize(size.width, size.height);
    }

    /// Render a single frame
    pub fn render_frame(
        &mut self,
        view: &CameraView,
        trajectory: &Trajectory,
        gradient: &HueGradient,
    ) -> Result<(), RenderError> {
        // Nothing to draw into while minimized
        if !is_drawable_size(self.context.size.width, self.context.size.height) {
            return Ok(());
        }

        let srgb = self.context.is_srgb();

        // 3D mode: camera uniforms
        let uniforms = LineUniforms {
            view_projection: view.view_projection(self.context.aspect_ratio()),
            viewport: [
                self.context.config.width as f32,
                self.context.config.height as f32,
            ],
            line_width: self.render_config.line_width,
            _padding: 0.0,
        };
        self.line_pipeline
            .update_uniforms(&self.context.queue, &uniforms);

        // One colored segment per adjacent pair
        build_segments(trajectory, gradient, srgb, &mut self.segments);
        self.line_pipeline.upload_lines(
            &self.context.device,
            &self.context.queue,
            &self.segments,
        );

        // Get surface texture
        let output = self
            .context
            .surface
            .get_current_texture()
            .map_err(RenderError::from)?;

        let target = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.line_pipeline
            .render(&mut encoder, &target, self.clear_color(srgb));

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Background color in the surface's color space
    fn clear_color(&self, srgb: bool) -> wgpu::Color {
        let bg = self.render_config.background_color;
        let encode = |c: f32| (if srgb { srgb_to_linear(c) } else { c }) as f64;
        wgpu::Color {
            r: encode(bg[0]),
            g: encode(bg[1]),
            b: encode(bg[2]),
            a: bg[3] as f64,
        }
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

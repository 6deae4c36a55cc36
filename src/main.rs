//! Lorenz Viewer
//!
//! Integrates the Lorenz attractor one step per frame and draws the last
//! 5000 points as a rainbow polyline from a camera orbiting the newest point.

use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use lorenz_render::{HueGradient, OrbitCamera};
use lorenz_viewer::config::AppConfig;
use lorenz_viewer::input::{InputAction, InputMapper};
use lorenz_viewer::systems::{
    FpsCounter, FramePacer, RenderError, RenderSystem, SimulationSystem, WindowSystem,
};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    renderer: Option<RenderSystem>,
    simulation: SimulationSystem,
    camera: OrbitCamera,
    gradient: HueGradient,
    pacer: FramePacer,
    fps: FpsCounter,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let now = Instant::now();
        let gradient = HueGradient::new(config.rendering.hue_step, config.rendering.hue_speed);
        let pacer = FramePacer::new(config.window.target_fps, now);

        Self {
            config,
            window: None,
            renderer: None,
            simulation: SimulationSystem::new(),
            camera: OrbitCamera::new(),
            gradient,
            pacer,
            fps: FpsCounter::new(now),
        }
    }

    /// Step the simulation if a frame is due, then draw
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        let view = if self.pacer.is_due(now) {
            self.pacer.frame_done(now);
            self.simulation.update(&mut self.camera, &mut self.gradient).view
        } else {
            // Redraw requested by the OS between frames
            self.simulation.current_view(&self.camera)
        };

        let Some(renderer) = &mut self.renderer else {
            return;
        };

        match renderer.render_frame(&view, self.simulation.trajectory(), &self.gradient) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                log::warn!("Surface lost, reconfiguring");
                renderer.reconfigure();
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
                return;
            }
            Err(e) => log::warn!("{}", e),
        }

        if let Some(fps) = self.fps.tick(now) {
            log::debug!("{} FPS, {} points", fps, self.simulation.trajectory().len());
            if let Some(window) = &self.window {
                window.update_title(fps);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            self.config.window.vsync,
        ) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size.width, physical_size.height);
                    log::debug!("Resized to {:?}", renderer.size());
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match InputMapper::map_keyboard(key, event.state) {
                        Some(InputAction::Exit) => event_loop.exit(),
                        Some(InputAction::ToggleFullscreen) => {
                            if let Some(window) = &self.window {
                                let enabled = window.toggle_fullscreen();
                                log::info!("Fullscreen: {}", if enabled { "ON" } else { "OFF" });
                            }
                        }
                        None => {}
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.pacer.is_due(Instant::now()) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.next_frame()));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = AppConfig::load();

    // Initialize logging; RUST_LOG overrides the configured level
    let level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    log::info!("Starting Lorenz viewer at {} FPS", config.window.target_fps);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}

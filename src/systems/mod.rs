//! Application systems
//!
//! Modular systems driven once per frame by the application loop.

mod render;
mod simulation;
mod timing;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::{SimulationResult, SimulationSystem};
pub use timing::{FpsCounter, FramePacer};
pub use window::{WindowError, WindowSystem};

//! Lorenz Viewer
//!
//! Integrates the Lorenz attractor and renders its recent trajectory from a
//! camera orbiting the newest point.

pub mod config;
pub mod input;
pub mod systems;

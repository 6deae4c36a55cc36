//! Lorenz attractor simulation
//!
//! This crate advances the Lorenz system with a fixed-step explicit Euler
//! update and records the resulting path in a bounded trajectory.
//!
//! ## Key Components
//!
//! - [`LorenzParams`] - σ, β, ρ and the time step
//! - [`LorenzState`] - current position in phase space
//! - [`Trajectory`] - FIFO-bounded ring buffer of recent points
//! - [`LorenzSystem`] - state + trajectory, stepped once per frame

mod lorenz;
mod trajectory;
mod system;

pub use lorenz::{LorenzParams, LorenzState};
pub use trajectory::{Trajectory, DEFAULT_TRAJECTORY_CAPACITY};
pub use system::LorenzSystem;

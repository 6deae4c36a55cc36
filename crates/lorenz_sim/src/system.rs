//! Integrator: state + trajectory advanced together

use lorenz_math::Vec3;

use crate::{LorenzParams, LorenzState, Trajectory, DEFAULT_TRAJECTORY_CAPACITY};

/// A Lorenz system with its recent trajectory
///
/// Each [`step`](Self::step) advances the state once and appends the new
/// point, so the trajectory's latest point always matches the state.
#[derive(Clone, Debug)]
pub struct LorenzSystem {
    params: LorenzParams,
    initial: LorenzState,
    state: LorenzState,
    trajectory: Trajectory,
    steps: u64,
}

impl LorenzSystem {
    /// Create a system starting at `initial` with the default trajectory capacity
    pub fn new(params: LorenzParams, initial: LorenzState) -> Self {
        Self::with_capacity(params, initial, DEFAULT_TRAJECTORY_CAPACITY)
    }

    /// Create a system with a custom trajectory capacity
    pub fn with_capacity(params: LorenzParams, initial: LorenzState, capacity: usize) -> Self {
        Self {
            params,
            initial,
            state: initial,
            trajectory: Trajectory::with_capacity(capacity),
            steps: 0,
        }
    }

    /// Advance one step and append the new point; returns that point
    pub fn step(&mut self) -> Vec3 {
        self.state = self.params.step(self.state);
        self.steps += 1;

        let point = self.state.to_point();
        self.trajectory.push(point);
        point
    }

    /// Advance `steps` times
    pub fn run(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Current state
    pub fn state(&self) -> LorenzState {
        self.state
    }

    /// System parameters
    pub fn params(&self) -> &LorenzParams {
        &self.params
    }

    /// Recent trajectory
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Total steps taken since creation or the last reset
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Return to the initial state and drop the trajectory
    pub fn reset(&mut self) {
        log::debug!("Resetting Lorenz system after {} steps", self.steps);
        self.state = self.initial;
        self.trajectory.clear();
        self.steps = 0;
    }
}

impl Default for LorenzSystem {
    fn default() -> Self {
        Self::new(LorenzParams::CLASSIC, LorenzState::INITIAL)
    }
}

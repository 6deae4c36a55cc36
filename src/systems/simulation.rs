//! Simulation system
//!
//! Advances everything that changes between frames:
//! - One Lorenz integration step (appends to the trajectory)
//! - One orbit step of the camera
//! - One hue-gradient step

use lorenz_render::{CameraView, HueGradient, OrbitCamera};
use lorenz_sim::{LorenzParams, LorenzState, LorenzSystem, Trajectory};

/// Result of a simulation update
pub struct SimulationResult {
    /// Camera for this frame, aimed at the newest point
    pub view: CameraView,
}

/// Owns the Lorenz system and steps it once per frame
pub struct SimulationSystem {
    system: LorenzSystem,
}

impl SimulationSystem {
    /// Create a simulation of the classic attractor starting at (1, 1, 1)
    pub fn new() -> Self {
        Self {
            system: LorenzSystem::new(LorenzParams::CLASSIC, LorenzState::INITIAL),
        }
    }

    /// Run one simulation frame
    ///
    /// # Arguments
    /// * `camera` - Orbit camera to advance
    /// * `gradient` - Hue gradient to advance
    ///
    /// # Returns
    /// SimulationResult with the camera placement for this frame
    pub fn update(&mut self, camera: &mut OrbitCamera, gradient: &mut HueGradient) -> SimulationResult {
        // 1. Integrate and append
        let latest = self.system.step();

        // 2. Orbit the camera
        camera.advance();

        // 3. Drift the hue (no-op at zero speed)
        gradient.advance();

        SimulationResult {
            view: camera.view(latest),
        }
    }

    /// Camera placement without advancing anything
    pub fn current_view(&self, camera: &OrbitCamera) -> CameraView {
        let target = self
            .system
            .trajectory()
            .latest()
            .unwrap_or_else(|| self.system.state().to_point());
        camera.view(target)
    }

    /// Recent trajectory
    pub fn trajectory(&self) -> &Trajectory {
        self.system.trajectory()
    }

    /// Underlying Lorenz system
    pub fn system(&self) -> &LorenzSystem {
        &self.system
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_steps_once() {
        let mut sim = SimulationSystem::new();
        let mut camera = OrbitCamera::new();
        let mut gradient = HueGradient::default();

        sim.update(&mut camera, &mut gradient);
        assert_eq!(sim.trajectory().len(), 1);
        assert_eq!(sim.system().steps(), 1);
    }

    #[test]
    fn test_camera_targets_latest_point() {
        let mut sim = SimulationSystem::new();
        let mut camera = OrbitCamera::new();
        let mut gradient = HueGradient::default();

        for _ in 0..100 {
            let result = sim.update(&mut camera, &mut gradient);
            assert_eq!(Some(result.view.target), sim.trajectory().latest());
            assert_eq!(result.view.position, camera.position());
        }
        assert!((camera.angle() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_current_view_before_first_step() {
        let sim = SimulationSystem::new();
        let camera = OrbitCamera::new();
        let view = sim.current_view(&camera);
        assert_eq!(view.target, LorenzState::INITIAL.to_point());
    }

    #[test]
    fn test_gradient_advances_with_frames() {
        let mut sim = SimulationSystem::new();
        let mut camera = OrbitCamera::new();
        let mut gradient = HueGradient::new(0.1, 2.0);

        sim.update(&mut camera, &mut gradient);
        sim.update(&mut camera, &mut gradient);
        assert!((gradient.base_hue - 4.0).abs() < 1e-5);
    }
}

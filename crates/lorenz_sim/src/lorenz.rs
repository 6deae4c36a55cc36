//! Lorenz equations and the explicit Euler step

use lorenz_math::Vec3;

/// Fixed parameters of the Lorenz system
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LorenzParams {
    /// Coupling rate σ
    pub sigma: f64,
    /// Damping ratio β
    pub beta: f64,
    /// Driving rate ρ
    pub rho: f64,
    /// Integration time step
    pub dt: f64,
}

impl LorenzParams {
    /// The classic chaotic regime: σ = 10, β = 8/3, ρ = 28, dt = 0.01
    pub const CLASSIC: Self = Self {
        sigma: 10.0,
        beta: 8.0 / 3.0,
        rho: 28.0,
        dt: 0.01,
    };

    /// Time derivative (dx/dt, dy/dt, dz/dt) at `state`
    #[inline]
    pub fn derivative(&self, state: LorenzState) -> (f64, f64, f64) {
        let LorenzState { x, y, z } = state;
        (
            self.sigma * (y - x),
            x * (self.rho - z) - y,
            x * y - self.beta * z,
        )
    }

    /// Advance `state` by one explicit Euler step of size `dt`
    #[inline]
    pub fn step(&self, state: LorenzState) -> LorenzState {
        let (dx, dy, dz) = self.derivative(state);
        LorenzState {
            x: state.x + dx * self.dt,
            y: state.y + dy * self.dt,
            z: state.z + dz * self.dt,
        }
    }
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Position in phase space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LorenzState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl LorenzState {
    /// Starting point used by the viewer
    pub const INITIAL: Self = Self { x: 1.0, y: 1.0, z: 1.0 };

    /// Create a new state
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Single-precision point for rendering
    pub fn to_point(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl Default for LorenzState {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step_from_initial() {
        let next = LorenzParams::CLASSIC.step(LorenzState::INITIAL);
        // dx = 10 * (1 - 1) = 0
        assert_eq!(next.x, 1.0);
        // dy = 1 * (28 - 1) - 1 = 26
        assert!((next.y - 1.26).abs() < 1e-12);
        // dz = 1 * 1 - 8/3 * 1 = -5/3
        assert!((next.z - (1.0 - 5.0 / 300.0)).abs() < 1e-12);
        assert!((next.z - 0.983_333_333_333).abs() < 1e-9);
    }

    #[test]
    fn test_origin_is_fixed_point() {
        let origin = LorenzState::new(0.0, 0.0, 0.0);
        assert_eq!(LorenzParams::CLASSIC.step(origin), origin);
    }

    #[test]
    fn test_nontrivial_fixed_point() {
        // C± = (±sqrt(β(ρ-1)), ±sqrt(β(ρ-1)), ρ-1)
        let p = LorenzParams::CLASSIC;
        let c = (p.beta * (p.rho - 1.0)).sqrt();
        let (dx, dy, dz) = p.derivative(LorenzState::new(c, c, p.rho - 1.0));
        assert!(dx.abs() < 1e-9);
        assert!(dy.abs() < 1e-9);
        assert!(dz.abs() < 1e-9);
    }

    #[test]
    fn test_step_scales_with_dt() {
        let coarse = LorenzParams::CLASSIC;
        let fine = LorenzParams { dt: 0.005, ..coarse };
        let s = LorenzState::new(2.0, -3.0, 15.0);

        let a = coarse.step(s);
        let b = fine.step(s);
        assert!(((a.x - s.x) - 2.0 * (b.x - s.x)).abs() < 1e-12);
        assert!(((a.y - s.y) - 2.0 * (b.y - s.y)).abs() < 1e-12);
        assert!(((a.z - s.z) - 2.0 * (b.z - s.z)).abs() < 1e-12);
    }

    #[test]
    fn test_to_point() {
        let p = LorenzState::new(1.5, -2.0, 30.25).to_point();
        assert_eq!(p, Vec3::new(1.5, -2.0, 30.25));
    }
}

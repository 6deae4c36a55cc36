//! Integration tests for the integrator + trajectory pipeline
//!
//! These tests run the simulation headless (no rendering) and check it
//! against an independently written recurrence.

use lorenz_sim::{LorenzParams, LorenzState, LorenzSystem, DEFAULT_TRAJECTORY_CAPACITY};

/// Plain recurrence, written without the crate's step function
fn reference_states(steps: usize) -> Vec<(f64, f64, f64)> {
    let (sigma, beta, rho, dt) = (10.0_f64, 8.0_f64 / 3.0, 28.0_f64, 0.01_f64);
    let (mut x, mut y, mut z) = (1.0_f64, 1.0_f64, 1.0_f64);
    let mut out = Vec::with_capacity(steps);
    for _ in 0..steps {
        let dx = sigma * (y - x) * dt;
        let dy = (x * (rho - z) - y) * dt;
        let dz = (x * y - beta * z) * dt;
        x += dx;
        y += dy;
        z += dz;
        out.push((x, y, z));
    }
    out
}

#[test]
fn test_ten_thousand_steps_headless() {
    let mut system = LorenzSystem::default();
    system.run(10_000);

    let trajectory = system.trajectory();
    assert_eq!(trajectory.len(), DEFAULT_TRAJECTORY_CAPACITY);

    let reference = reference_states(10_000);
    let (x, y, z) = reference[9_999];
    let last = trajectory.latest().expect("trajectory should not be empty");
    assert_eq!(last, LorenzState::new(x, y, z).to_point());
    assert_eq!(system.state(), LorenzState::new(x, y, z));
}

#[test]
fn test_window_holds_most_recent_points_in_order() {
    let mut system = LorenzSystem::default();
    system.run(10_000);

    let reference = reference_states(10_000);
    let expected = reference[5_000..]
        .iter()
        .map(|&(x, y, z)| LorenzState::new(x, y, z).to_point());

    assert!(system.trajectory().iter().eq(expected));
}

#[test]
fn test_runs_are_reproducible() {
    let mut a = LorenzSystem::new(LorenzParams::CLASSIC, LorenzState::INITIAL);
    let mut b = LorenzSystem::new(LorenzParams::CLASSIC, LorenzState::INITIAL);
    a.run(2_500);
    b.run(2_500);

    assert_eq!(a.state(), b.state());
    assert!(a.trajectory().iter().eq(b.trajectory().iter()));
}

#[test]
fn test_length_capped_every_step() {
    let mut system = LorenzSystem::default();
    for step in 1..=6_000usize {
        system.step();
        assert_eq!(system.trajectory().len(), step.min(DEFAULT_TRAJECTORY_CAPACITY));
    }
}

#[test]
fn test_trajectory_stays_on_attractor() {
    let mut system = LorenzSystem::default();
    system.run(10_000);

    // The classic attractor lives roughly inside |x|,|y| < 30, 0 < z < 60
    for p in system.trajectory().iter() {
        assert!(p.x.abs() < 30.0 && p.y.abs() < 35.0, "{:?}", p);
        assert!(p.z > 0.0 && p.z < 60.0, "{:?}", p);
    }
}

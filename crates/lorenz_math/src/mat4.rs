//! 4x4 Matrix utilities for camera transforms
//!
//! Matrices are stored column-major (`m[column][row]`), which is the layout
//! WGSL expects for `mat4x4<f32>` uniforms. Projections target wgpu clip
//! space: right-handed view space, depth in `[0, 1]`.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Right-handed look-at view matrix
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = (target - eye).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
    ]
}

/// Perspective projection
///
/// # Arguments
/// * `fov_y` - Vertical field of view in radians
/// * `aspect` - Width / height
/// * `near`, `far` - Clip plane distances (positive)
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * nf, -1.0],
        [0.0, 0.0, near * far * nf, 0.0],
    ]
}

/// Matrix product `a * b`
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];
    for (c, column) in result.iter_mut().enumerate() {
        for (r, value) in column.iter_mut().enumerate() {
            *value = (0..4).map(|k| a[k][r] * b[c][k]).sum();
        }
    }
    result
}

/// Transform a point, returning homogeneous clip coordinates `[x, y, z, w]`
pub fn transform_point(m: Mat4, p: Vec3) -> [f32; 4] {
    let v = [p.x, p.y, p.z, 1.0];
    let mut out = [0.0f32; 4];
    for (r, value) in out.iter_mut().enumerate() {
        *value = (0..4).map(|c| m[c][r] * v[c]).sum();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_mul_identity() {
        let m = perspective(0.5, 1.5, 0.1, 100.0);
        assert_eq!(mul(IDENTITY, m), m);
        assert_eq!(mul(m, IDENTITY), m);
    }

    #[test]
    fn test_mul_order() {
        // Translation then scale vs scale then translation
        let mut translate = IDENTITY;
        translate[3] = [1.0, 0.0, 0.0, 1.0];
        let mut scale = IDENTITY;
        scale[0][0] = 2.0;

        // scale * translate applies translate first: (0 + 1) * 2
        let p = transform_point(mul(scale, translate), Vec3::ZERO);
        assert!(approx(p[0], 2.0));

        let p = transform_point(mul(translate, scale), Vec3::ZERO);
        assert!(approx(p[0], 1.0));
    }

    #[test]
    fn test_look_at_centers_target() {
        let eye = Vec3::new(60.0, 0.0, 40.0);
        let target = Vec3::new(1.0, 1.26, 0.97);
        let view = look_at(eye, target, Vec3::Y);
        let p = transform_point(view, target);
        // Target lies on the -Z axis of view space
        assert!(p[0].abs() < 1e-4);
        assert!(p[1].abs() < 1e-4);
        assert!(p[2] < 0.0);
        assert!((-p[2] - (target - eye).length()).abs() < 1e-3);
    }

    #[test]
    fn test_perspective_depth_range() {
        let proj = perspective(std::f32::consts::FRAC_PI_4, 1.0, 0.1, 100.0);

        let near = transform_point(proj, Vec3::new(0.0, 0.0, -0.1));
        assert!(approx(near[2] / near[3], 0.0));

        let far = transform_point(proj, Vec3::new(0.0, 0.0, -100.0));
        assert!((far[2] / far[3] - 1.0).abs() < 1e-4);
    }
}

//! Hue progression along the trajectory
//!
//! Segment `i` is colored with hue `(base + i * step) mod 360` at full
//! saturation and value. The base hue may drift each frame at `speed`
//! degrees per frame; a speed of zero keeps the gradient fixed.

use lorenz_math::{hsv_to_rgba, srgb_to_linear, Rgba};
use lorenz_sim::Trajectory;

use crate::pipeline::LineInstance;

/// Hue accumulator plus per-segment hue step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueGradient {
    /// Hue of segment 0, in degrees
    pub base_hue: f32,
    /// Degrees added per segment index
    pub hue_step: f32,
    /// Degrees added to `base_hue` per frame
    pub hue_speed: f32,
}

impl Default for HueGradient {
    fn default() -> Self {
        Self {
            base_hue: 0.0,
            hue_step: 0.1,
            hue_speed: 0.0,
        }
    }
}

impl HueGradient {
    pub fn new(hue_step: f32, hue_speed: f32) -> Self {
        Self {
            base_hue: 0.0,
            hue_step,
            hue_speed,
        }
    }

    /// Hue of segment `index`, in `[0, 360)`
    pub fn segment_hue(&self, index: usize) -> f32 {
        wrap_degrees(self.base_hue + index as f32 * self.hue_step)
    }

    /// sRGB color of segment `index`
    pub fn segment_color(&self, index: usize) -> Rgba {
        hsv_to_rgba(self.segment_hue(index), 1.0, 1.0)
    }

    /// Move the base hue forward by one frame
    pub fn advance(&mut self) {
        self.base_hue = wrap_degrees(self.base_hue + self.hue_speed);
    }
}

/// Wrap an angle into `[0, 360)`
///
/// `rem_euclid` rounds tiny negative inputs up to exactly 360.0 in `f32`.
fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Fill `out` with one colored line per adjacent pair of trajectory points.
///
/// `out` is cleared first and left empty for fewer than two points. When
/// `linear_target` is set, colors are converted from sRGB to linear light
/// for an sRGB surface.
pub fn build_segments(
    trajectory: &Trajectory,
    gradient: &HueGradient,
    linear_target: bool,
    out: &mut Vec<LineInstance>,
) {
    out.clear();
    out.reserve(trajectory.segment_count());

    for (i, start, end) in trajectory.segments() {
        let mut color = gradient.segment_color(i);
        if linear_target {
            for c in &mut color[..3] {
                *c = srgb_to_linear(*c);
            }
        }
        out.push(LineInstance::new(start, end, color));
    }
}

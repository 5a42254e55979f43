/// Gradient start and end points as fractions of the target box.
///
/// `(0, 0)` is the top-left corner of the box and `(1, 1)` the bottom-right.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GradientPoints {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl GradientPoints {
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x0, self.y0, self.x1, self.y1]
    }
}

/// Converts a gradient angle in degrees into start/end fractions.
///
/// Convention: `0°` runs left to right and angles grow clockwise on screen,
/// so `90°` runs top to bottom, `180°` right to left and `270°` bottom to top.
/// The gradient line goes through the box center and is stretched so that
/// both ends reach the corners of the box (`45°` runs corner to corner).
///
/// Components above `1` are clamped to `1`. Components at or below `0` are
/// passed through untouched, so rounding can leave a tiny negative start.
pub fn gradient_points(angle: f32) -> GradientPoints {
    let (sin, cos) = f64::from(angle).to_radians().sin_cos();
    let reach = (cos.abs() + sin.abs()) * 0.5;
    let (dx, dy) = (cos * reach, sin * reach);

    GradientPoints {
        x0: clamp_upper(0.5 - dx),
        y0: clamp_upper(0.5 - dy),
        x1: clamp_upper(0.5 + dx),
        y1: clamp_upper(0.5 + dy),
    }
}

#[inline]
fn clamp_upper(v: f64) -> f32 {
    let v = v as f32;
    if v > 1.0 { 1.0 } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(p: GradientPoints, expected: [f32; 4]) {
        for (got, want) in p.to_array().into_iter().zip(expected) {
            assert!((got - want).abs() < 1e-6, "{p:?} != {expected:?}");
        }
    }

    // ── standard angles ───────────────────────────────────────────────────

    #[test]
    fn zero_degrees_runs_left_to_right() {
        assert_eq!(gradient_points(0.0), GradientPoints { x0: 0.0, y0: 0.5, x1: 1.0, y1: 0.5 });
    }

    #[test]
    fn forty_five_degrees_runs_corner_to_corner() {
        approx(gradient_points(45.0), [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn ninety_degrees_runs_top_to_bottom() {
        approx(gradient_points(90.0), [0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn one_eighty_degrees_runs_right_to_left() {
        approx(gradient_points(180.0), [1.0, 0.5, 0.0, 0.5]);
    }

    #[test]
    fn two_seventy_degrees_runs_bottom_to_top() {
        approx(gradient_points(270.0), [0.5, 1.0, 0.5, 0.0]);
    }

    #[test]
    fn full_turn_matches_zero() {
        approx(gradient_points(360.0), gradient_points(0.0).to_array());
        approx(gradient_points(720.0), gradient_points(0.0).to_array());
    }

    #[test]
    fn negative_angle_wraps_around() {
        approx(gradient_points(-90.0), gradient_points(270.0).to_array());
        approx(gradient_points(-45.0), [0.0, 1.0, 1.0, 0.0]);
    }

    // ── clamping ──────────────────────────────────────────────────────────

    #[test]
    fn no_component_ever_exceeds_one() {
        for tenth in -7200..=7200 {
            let p = gradient_points(tenth as f32 * 0.1);
            assert!(p.to_array().iter().all(|&v| v <= 1.0), "{p:?}");
        }
    }

    #[test]
    fn clamp_is_upper_only() {
        assert_eq!(clamp_upper(1.5), 1.0);
        assert_eq!(clamp_upper(1.0), 1.0);
        assert_eq!(clamp_upper(-0.25), -0.25);
        assert_eq!(clamp_upper(0.0), 0.0);
    }

    #[test]
    fn end_points_mirror_through_center() {
        for angle in [10.0_f32, 33.0, 123.0, 200.0, 301.0] {
            let p = gradient_points(angle);
            assert!((p.x0 + p.x1 - 1.0).abs() < 1e-6);
            assert!((p.y0 + p.y1 - 1.0).abs() < 1e-6);
        }
    }
}

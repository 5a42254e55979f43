use core::f32::consts::FRAC_PI_2;

use crate::coords::Vec2;

/// Circular arc segment.
///
/// Angles are radians in y-down space: `0` points at +X, `PI / 2` at +Y.
/// A positive `sweep` turns clockwise on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arc {
    pub center: Vec2,
    pub radius: f32,
    pub start_angle: f32,
    pub sweep: f32,
}

impl Arc {
    #[inline]
    pub const fn new(center: Vec2, radius: f32, start_angle: f32, sweep: f32) -> Self {
        Self { center, radius, start_angle, sweep }
    }

    /// Clockwise quarter circle starting at `start_angle`.
    #[inline]
    pub const fn quarter(center: Vec2, radius: f32, start_angle: f32) -> Self {
        Self::new(center, radius, start_angle, FRAC_PI_2)
    }

    #[inline]
    pub fn end_angle(self) -> f32 {
        self.start_angle + self.sweep
    }

    #[inline]
    pub fn point_at(self, angle: f32) -> Vec2 {
        self.center + Vec2::from_angle(angle) * self.radius
    }

    #[inline]
    pub fn start_point(self) -> Vec2 {
        self.point_at(self.start_angle)
    }

    #[inline]
    pub fn end_point(self) -> Vec2 {
        self.point_at(self.end_angle())
    }
}

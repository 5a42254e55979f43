use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1] but is not enforced.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient bound to pixel coordinates.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as the path it paints.
/// - Stops are kept in the order they were given; renderers interpolate in that order.
/// - Beyond `start` and `end` the edge stop colors extend (pad / clamp tiling).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Returns true when the gradient definition is structurally usable.
    ///
    /// A single stop is accepted; renderers paint it as a flat color.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && !self.stops.is_empty()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
    }

    /// Stop colors in stop order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.stops.iter().map(|s| s.color)
    }

    /// Stop offsets in stop order.
    pub fn offsets(&self) -> impl Iterator<Item = f32> + '_ {
        self.stops.iter().map(|s| s.t)
    }
}

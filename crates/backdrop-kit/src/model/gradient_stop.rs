use backdrop_engine::paint::Color;

/// One waypoint of a color ramp.
///
/// `offset` is a fraction along the gradient axis, normally in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    pub color: Color,
    pub offset: f32,
}

impl GradientStop {
    #[inline]
    pub const fn new(color: Color, offset: f32) -> Self {
        Self { color, offset }
    }
}

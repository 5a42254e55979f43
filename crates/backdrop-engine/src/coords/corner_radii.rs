/// Per-corner radii for a rounded rectangle, in device pixels.
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
/// This is also the clockwise order path builders walk the corners in.
/// Negative values are treated as zero by path builders.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Radii as an array in top-left, top-right, bottom-right, bottom-left order.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }

    /// Applies `f` to each corner.
    #[inline]
    pub fn map(self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.top_left), f(self.top_right), f(self.bottom_right), f(self.bottom_left))
    }

    /// True when no corner is rounded.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.to_array().iter().all(|&r| r <= 0.0)
    }

    /// Clamps every corner into `[0, max]`.
    #[inline]
    pub fn clamped(self, max: f32) -> Self {
        let max = max.max(0.0);
        self.map(|r| r.clamp(0.0, max))
    }
}

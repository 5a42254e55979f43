use backdrop_engine::coords::{CornerRadii, Density};

/// Per-corner rounding in logical units.
///
/// Constructor argument order is top-left, top-right, bottom-left,
/// bottom-right, the order UI markup usually spells corners in.
/// Use [`CornerRadius::to_radii`] to get the clockwise order path builders want.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_left: f32,
    pub bottom_right: f32,
}

impl CornerRadius {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_left: f32, bottom_right: f32) -> Self {
        Self { top_left, top_right, bottom_left, bottom_right }
    }

    #[inline]
    pub const fn all(r: f32) -> Self {
        Self::new(r, r, r, r)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// All four corners are zero.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.top_left == 0.0 && self.top_right == 0.0 && self.bottom_left == 0.0 && self.bottom_right == 0.0
    }

    /// All four corners are equal and non-zero.
    #[inline]
    pub fn is_uniform(self) -> bool {
        self.top_left != 0.0
            && self.top_left == self.top_right
            && self.top_left == self.bottom_left
            && self.top_left == self.bottom_right
    }

    /// Same corners in top-left, top-right, bottom-right, bottom-left order.
    #[inline]
    pub fn to_radii(self) -> CornerRadii {
        CornerRadii::new(self.top_left, self.top_right, self.bottom_right, self.bottom_left)
    }

    /// Converts every corner to device pixels.
    #[inline]
    pub fn scaled(self, density: Density) -> Self {
        Self::new(
            density.to_px(self.top_left),
            density.to_px(self.top_right),
            density.to_px(self.bottom_left),
            density.to_px(self.bottom_right),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_requires_equal_and_non_zero() {
        assert!(CornerRadius::all(4.0).is_uniform());
        assert!(!CornerRadius::all(0.0).is_uniform());
        assert!(!CornerRadius::new(4.0, 4.0, 4.0, 2.0).is_uniform());
    }

    #[test]
    fn empty_only_when_all_zero() {
        assert!(CornerRadius::zero().is_empty());
        assert!(!CornerRadius::new(0.0, 0.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn to_radii_reorders_bottom_corners() {
        let r = CornerRadius::new(1.0, 2.0, 3.0, 4.0).to_radii();
        assert_eq!(r, CornerRadii::new(1.0, 2.0, 4.0, 3.0));
    }

    #[test]
    fn scaled_multiplies_each_corner() {
        let r = CornerRadius::new(1.0, 2.0, 3.0, 4.0).scaled(Density::new(2.0));
        assert_eq!(r, CornerRadius::new(2.0, 4.0, 6.0, 8.0));
    }
}

use super::Vec2;

/// Axis-aligned rectangle in pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle anchored at the origin, as handed out by layout callbacks.
    #[inline]
    pub const fn from_size(w: f32, h: f32) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Shrinks the rectangle by `d` on every side.
    ///
    /// The size never goes below zero; an over-inset rect collapses onto its center.
    #[inline]
    pub fn inset(self, d: f32) -> Self {
        let r = self.normalized();
        let w = (r.size.x - 2.0 * d).max(0.0);
        let h = (r.size.y - 2.0 * d).max(0.0);
        let cx = r.origin.x + r.size.x * 0.5;
        let cy = r.origin.y + r.size.y * 0.5;
        Rect::new(cx - w * 0.5, cy - h * 0.5, w, h)
    }

    /// Maps a fractional position (`0..=1` on each axis) into this rectangle.
    ///
    /// Fractions outside the unit range map outside the rectangle.
    #[inline]
    pub fn point_at(self, fx: f32, fy: f32) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * fx, self.origin.y + self.size.y * fy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── inset ─────────────────────────────────────────────────────────────

    #[test]
    fn inset_shrinks_every_side() {
        assert_eq!(r(0.0, 0.0, 100.0, 50.0).inset(2.0), r(2.0, 2.0, 96.0, 46.0));
    }

    #[test]
    fn inset_larger_than_half_collapses_to_center() {
        let i = r(0.0, 0.0, 10.0, 40.0).inset(8.0);
        assert_eq!(i.size.x, 0.0);
        assert_eq!(i.origin.x, 5.0);
        assert_eq!(i.size.y, 24.0);
        assert!(i.is_empty());
    }

    // ── point_at ──────────────────────────────────────────────────────────

    #[test]
    fn point_at_maps_fractions() {
        let rect = r(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.point_at(0.0, 0.0), Vec2::new(10.0, 20.0));
        assert_eq!(rect.point_at(1.0, 0.5), Vec2::new(110.0, 45.0));
        assert_eq!(rect.point_at(-0.5, 0.0), Vec2::new(-40.0, 20.0));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(r(0.0, 0.0, f32::NAN, 5.0).is_empty());
    }

    #[test]
    fn is_empty_positive_size() {
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}

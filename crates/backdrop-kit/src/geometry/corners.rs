use backdrop_engine::coords::{CornerRadii, Density, Rect};
use backdrop_engine::path::Path;

use crate::model::CornerRadius;

/// Corner rounding converted to device pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum ResolvedRadius {
    /// No rounding: draw a plain rectangle.
    #[default]
    Square,
    /// Same radius on every corner.
    Uniform(f32),
    /// Independent radii, top-left, top-right, bottom-right, bottom-left.
    PerCorner(CornerRadii),
}

impl ResolvedRadius {
    /// Radii for every corner, whatever the variant.
    pub fn to_radii(self) -> CornerRadii {
        match self {
            ResolvedRadius::Square => CornerRadii::zero(),
            ResolvedRadius::Uniform(r) => CornerRadii::all(r),
            ResolvedRadius::PerCorner(radii) => radii,
        }
    }

    /// Outline of `rect` with this rounding applied.
    pub fn path(self, rect: Rect) -> Path {
        match self {
            ResolvedRadius::Square => Path::rect(rect),
            ResolvedRadius::Uniform(r) => Path::rounded_rect_uniform(rect, r),
            ResolvedRadius::PerCorner(radii) => Path::rounded_rect(rect, radii),
        }
    }
}

/// Converts logical corner radii into device pixels.
pub fn resolve_corner_radius(corner_radius: CornerRadius, density: Density) -> ResolvedRadius {
    if corner_radius.is_empty() {
        return ResolvedRadius::Square;
    }

    if corner_radius.is_uniform() {
        return ResolvedRadius::Uniform(density.to_px(corner_radius.top_left));
    }

    ResolvedRadius::PerCorner(corner_radius.to_radii().map(|r| density.to_px(r)))
}

/// Radius left for a corner once a border of `border_width` eats into it.
///
/// Never negative: a border wider than the radius leaves a square corner.
#[inline]
pub fn inset_corner(radius: f32, border_width: f32) -> f32 {
    (radius - border_width).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── resolve ───────────────────────────────────────────────────────────

    #[test]
    fn uniform_resolves_to_single_scaled_radius() {
        let resolved = resolve_corner_radius(CornerRadius::all(6.0), Density::new(2.5));
        assert_eq!(resolved, ResolvedRadius::Uniform(15.0));
    }

    #[test]
    fn all_zero_resolves_to_square() {
        let resolved = resolve_corner_radius(CornerRadius::zero(), Density::new(3.0));
        assert_eq!(resolved, ResolvedRadius::Square);
        assert_eq!(resolved.to_radii(), CornerRadii::zero());
    }

    #[test]
    fn mixed_resolves_clockwise_from_top_left() {
        // top-left, top-right, bottom-left, bottom-right
        let cr = CornerRadius::new(1.0, 2.0, 3.0, 4.0);
        let resolved = resolve_corner_radius(cr, Density::new(2.0));
        assert_eq!(resolved, ResolvedRadius::PerCorner(CornerRadii::new(2.0, 4.0, 8.0, 6.0)));
    }

    #[test]
    fn square_path_has_no_arcs() {
        let path = ResolvedRadius::Square.path(Rect::from_size(10.0, 10.0));
        assert_eq!(path.vertex_count(), 4);
        assert_eq!(path.arc_count(), 0);
    }

    // ── inset ─────────────────────────────────────────────────────────────

    #[test]
    fn inset_subtracts_border_width() {
        assert_eq!(inset_corner(10.0, 3.0), 7.0);
    }

    #[test]
    fn border_wider_than_radius_gives_square_corner() {
        assert_eq!(inset_corner(2.0, 5.0), 0.0);
        assert_eq!(inset_corner(0.0, 1.0), 0.0);
    }
}

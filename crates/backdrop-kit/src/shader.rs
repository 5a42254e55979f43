use backdrop_engine::coords::Rect;
use backdrop_engine::paint::{Color, ColorStop, LinearGradient, Paint};

use crate::geometry::{gradient_points, GradientPoints};
use crate::model::GradientStop;

/// Linear gradient whose geometry is not yet bound to a rectangle.
///
/// Built once per property change from the stop list and the angle; bound to
/// pixel coordinates with [`GradientShader::resize`] each time the target
/// rectangle changes size.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientShader {
    points: GradientPoints,
    colors: Vec<Color>,
    offsets: Vec<f32>,
}

impl GradientShader {
    /// Returns `None` for an empty stop list: there is no gradient to draw.
    ///
    /// Stops keep the order they were given in.
    pub fn new(stops: &[GradientStop], angle: f32) -> Option<Self> {
        if stops.is_empty() {
            return None;
        }

        let (colors, offsets) = stops.iter().map(|s| (s.color, s.offset)).unzip();
        Some(Self { points: gradient_points(angle), colors, offsets })
    }

    /// Stop colors, parallel to [`offsets`](Self::offsets).
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Stop offsets, parallel to [`colors`](Self::colors).
    #[inline]
    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }

    /// Binds the gradient to `bounds`. Outside the stop range colors clamp
    /// to the edge stops.
    pub fn resize(&self, bounds: Rect) -> LinearGradient {
        let GradientPoints { x0, y0, x1, y1 } = self.points;
        let stops = self
            .offsets
            .iter()
            .zip(&self.colors)
            .map(|(&t, &color)| ColorStop::new(t, color))
            .collect();

        LinearGradient::new(bounds.point_at(x0, y0), bounds.point_at(x1, y1), stops)
    }

    /// [`resize`](Self::resize) wrapped as a paint source.
    #[inline]
    pub fn paint(&self, bounds: Rect) -> Paint {
        Paint::LinearGradient(self.resize(bounds))
    }
}

#[cfg(test)]
mod tests {
    use backdrop_engine::coords::Vec2;

    use super::*;

    fn red() -> Color {
        Color::from_argb_u32(0xFFFF_0000)
    }

    fn blue() -> Color {
        Color::from_argb_u32(0xFF00_00FF)
    }

    #[test]
    fn empty_stops_build_nothing() {
        assert!(GradientShader::new(&[], 45.0).is_none());
    }

    #[test]
    fn stop_order_and_offsets_are_preserved() {
        let stops = [GradientStop::new(red(), 0.0), GradientStop::new(blue(), 1.0)];
        let shader = GradientShader::new(&stops, 0.0).unwrap();

        assert_eq!(shader.colors(), &[red(), blue()]);
        assert_eq!(shader.offsets(), &[0.0, 1.0]);

        let reversed = [GradientStop::new(blue(), 1.0), GradientStop::new(red(), 0.0)];
        let shader = GradientShader::new(&reversed, 0.0).unwrap();
        assert_eq!(shader.colors(), &[blue(), red()]);
        assert_eq!(shader.offsets(), &[1.0, 0.0]);
    }

    #[test]
    fn resize_binds_points_to_bounds() {
        let stops = [GradientStop::new(red(), 0.0), GradientStop::new(blue(), 1.0)];
        let shader = GradientShader::new(&stops, 0.0).unwrap();

        let g = shader.resize(Rect::new(10.0, 0.0, 200.0, 100.0));
        assert_eq!(g.start, Vec2::new(10.0, 50.0));
        assert_eq!(g.end, Vec2::new(210.0, 50.0));
        assert_eq!(g.colors().collect::<Vec<_>>(), vec![red(), blue()]);
        assert_eq!(g.offsets().collect::<Vec<_>>(), vec![0.0, 1.0]);

        let g = shader.resize(Rect::from_size(50.0, 20.0));
        assert_eq!(g.end, Vec2::new(50.0, 10.0));
    }

    #[test]
    fn single_stop_is_still_a_gradient() {
        let shader = GradientShader::new(&[GradientStop::new(red(), 0.3)], 90.0).unwrap();
        let g = shader.resize(Rect::from_size(10.0, 10.0));
        assert!(g.is_valid());
        assert_eq!(g.stops.len(), 1);
    }
}

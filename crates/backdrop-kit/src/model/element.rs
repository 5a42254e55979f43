use backdrop_engine::paint::Color;

use super::{CornerRadius, GradientStop};

/// Read-only view of a material-styled visual element.
///
/// Adapters take a snapshot of these values when they are built or updated
/// and never call back into the element. Lengths are logical units and
/// angles are degrees (see [`gradient_points`](crate::geometry::gradient_points)).
pub trait MaterialVisualElement {
    /// Fill color. `None` means the framework default: leave the fill as it is.
    fn color(&self) -> Option<Color>;
    fn corner_radius(&self) -> CornerRadius;
    /// Fill gradient stops in interpolation order. Empty means no gradient.
    fn gradients(&self) -> &[GradientStop];
    fn angle(&self) -> f32;
    fn border_width(&self) -> f32;
    fn border_color(&self) -> Color;
    /// Border gradient stops in interpolation order. Empty means no gradient.
    fn border_gradients(&self) -> &[GradientStop];
    fn border_angle(&self) -> f32;
    /// Dash length. Non-positive values disable dashing.
    fn dash_width(&self) -> f32;
    /// Gap length. Non-positive values disable dashing.
    fn dash_gap(&self) -> f32;
}

/// Owned, plain-data [`MaterialVisualElement`].
///
/// All properties are optional; the default style paints nothing.
///
/// # Example
/// ```rust
/// use backdrop_kit::prelude::*;
///
/// let style = BackgroundStyle::new()
///     .fill(Color::from_argb_u32(0xFF20_2030))
///     .rounded(CornerRadius::new(12.0, 12.0, 0.0, 0.0))
///     .border(2.0, Color::WHITE)
///     .dashed(6.0, 3.0);
/// assert_eq!(style.border_width(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundStyle {
    color: Option<Color>,
    corner_radius: CornerRadius,
    gradients: Vec<GradientStop>,
    angle: f32,
    border_width: f32,
    border_color: Color,
    border_gradients: Vec<GradientStop>,
    border_angle: f32,
    dash_width: f32,
    dash_gap: f32,
}

impl BackgroundStyle {
    pub fn new() -> Self {
        Self {
            color: None,
            corner_radius: CornerRadius::zero(),
            gradients: Vec::new(),
            angle: 0.0,
            border_width: 0.0,
            border_color: Color::BLACK,
            border_gradients: Vec::new(),
            border_angle: 0.0,
            dash_width: 0.0,
            dash_gap: 0.0,
        }
    }

    /// Copies every property out of another element.
    pub fn snapshot(element: &(impl MaterialVisualElement + ?Sized)) -> Self {
        Self {
            color: element.color(),
            corner_radius: element.corner_radius(),
            gradients: element.gradients().to_vec(),
            angle: element.angle(),
            border_width: element.border_width(),
            border_color: element.border_color(),
            border_gradients: element.border_gradients().to_vec(),
            border_angle: element.border_angle(),
            dash_width: element.dash_width(),
            dash_gap: element.dash_gap(),
        }
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn rounded(mut self, corner_radius: CornerRadius) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn gradient(mut self, stops: impl IntoIterator<Item = GradientStop>, angle: f32) -> Self {
        self.gradients = stops.into_iter().collect();
        self.angle = angle;
        self
    }

    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border_width = width;
        self.border_color = color;
        self
    }

    pub fn border_gradient(mut self, stops: impl IntoIterator<Item = GradientStop>, angle: f32) -> Self {
        self.border_gradients = stops.into_iter().collect();
        self.border_angle = angle;
        self
    }

    pub fn dashed(mut self, dash_width: f32, dash_gap: f32) -> Self {
        self.dash_width = dash_width;
        self.dash_gap = dash_gap;
        self
    }
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialVisualElement for BackgroundStyle {
    fn color(&self) -> Option<Color> {
        self.color
    }

    fn corner_radius(&self) -> CornerRadius {
        self.corner_radius
    }

    fn gradients(&self) -> &[GradientStop] {
        &self.gradients
    }

    fn angle(&self) -> f32 {
        self.angle
    }

    fn border_width(&self) -> f32 {
        self.border_width
    }

    fn border_color(&self) -> Color {
        self.border_color
    }

    fn border_gradients(&self) -> &[GradientStop] {
        &self.border_gradients
    }

    fn border_angle(&self) -> f32 {
        self.border_angle
    }

    fn dash_width(&self) -> f32 {
        self.dash_width
    }

    fn dash_gap(&self) -> f32 {
        self.dash_gap
    }
}

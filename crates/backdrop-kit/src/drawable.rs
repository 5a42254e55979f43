use backdrop_engine::coords::{Density, Rect};
use backdrop_engine::paint::{Color, Paint};
use backdrop_engine::path::Path;
use backdrop_engine::scene::{Canvas, Dash, StrokeStyle};

use crate::geometry::{resolve_corner_radius, ResolvedRadius};
use crate::model::{CornerRadius, GradientStop, MaterialVisualElement};
use crate::shader::GradientShader;

/// Construction parameters for [`BackgroundDrawable`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DrawableConfig {
    /// Converts every logical length (radii, stroke width, dashes) to device pixels.
    pub density: Density,
}

impl DrawableConfig {
    /// Config for a display with `scale` device pixels per logical unit.
    pub fn with_density(scale: f32) -> Self {
        Self { density: Density::new(scale) }
    }
}

/// Fill state: flat color plus an optional gradient that takes precedence.
#[derive(Debug)]
struct FillPaint {
    color: Color,
    shader: Option<GradientShader>,
    paint: Paint,
}

impl FillPaint {
    fn refresh(&mut self, bounds: Rect) {
        self.paint = match &self.shader {
            Some(shader) => shader.paint(bounds),
            None => Paint::Solid(self.color),
        };
    }
}

/// Stroke state. When a border gradient is set, `color` holds a placeholder
/// and the visible color comes from the gradient.
#[derive(Debug)]
struct StrokePaint {
    style: StrokeStyle,
    color: Color,
    shader: Option<GradientShader>,
    paint: Paint,
}

impl StrokePaint {
    fn refresh(&mut self, bounds: Rect) {
        self.paint = match &self.shader {
            Some(shader) => shader.paint(bounds),
            None => Paint::Solid(self.color),
        };
    }
}

/// Paintable background: a rounded-rectangle fill with an independently
/// styled stroke on top.
///
/// Lifecycle:
/// - build once per visual element with [`BackgroundDrawable::new`]
/// - push property changes through the `set_*` methods (or [`update_from`](Self::update_from))
/// - call [`set_bounds`](Self::set_bounds) from the layout callback; gradients are bound to the new size there
/// - call [`draw`](Self::draw) from the draw callback
/// - [`dispose`](Self::dispose) (or drop) releases paints and shaders; later calls are no-ops
///
/// # Example
/// ```rust
/// use backdrop_kit::prelude::*;
///
/// let style = BackgroundStyle::new()
///     .fill(Color::WHITE)
///     .rounded(CornerRadius::all(8.0))
///     .border(1.0, Color::BLACK);
///
/// let mut drawable = BackgroundDrawable::new(DrawableConfig::with_density(2.0), Some(&style));
/// drawable.set_bounds(Rect::from_size(200.0, 80.0));
///
/// let mut list = DrawList::new();
/// drawable.draw(&mut list);
/// assert_eq!(list.len(), 2); // fill, then stroke
/// ```
#[derive(Debug)]
pub struct BackgroundDrawable {
    density: Density,
    bounds: Rect,
    corners: ResolvedRadius,
    shape: Path,
    fill: Option<FillPaint>,
    stroke: Option<StrokePaint>,
}

impl BackgroundDrawable {
    /// Creates a drawable, copying every property out of `element` when given.
    pub fn new(config: DrawableConfig, element: Option<&dyn MaterialVisualElement>) -> Self {
        let mut drawable = Self {
            density: config.density,
            bounds: Rect::default(),
            corners: ResolvedRadius::Square,
            shape: Path::new(),
            fill: Some(FillPaint {
                color: Color::TRANSPARENT,
                shader: None,
                paint: Paint::Solid(Color::TRANSPARENT),
            }),
            stroke: Some(StrokePaint {
                style: StrokeStyle::default(),
                color: Color::TRANSPARENT,
                shader: None,
                paint: Paint::Solid(Color::TRANSPARENT),
            }),
        };

        if let Some(element) = element {
            drawable.update_from(element);
        }

        drawable
    }

    /// Re-reads every property from `element`.
    pub fn update_from(&mut self, element: &dyn MaterialVisualElement) {
        if let Some(color) = element.color() {
            self.set_color(color);
        }
        self.set_corner_radius(element.corner_radius());
        self.set_gradient(element.gradients(), element.angle());
        self.set_border_gradient(element.border_gradients(), element.border_angle());
        self.set_stroke(element.border_width(), element.border_color());
        self.set_dashed_border(element.dash_width(), element.dash_gap());
    }

    // ── properties ────────────────────────────────────────────────────────

    /// Flat fill color, used whenever no fill gradient is set.
    pub fn set_color(&mut self, color: Color) {
        let bounds = self.bounds;
        let Some(fill) = self.fill.as_mut() else { return; };

        fill.color = color;
        fill.refresh(bounds);
    }

    /// Corner rounding. All-zero radii draw a plain rectangle.
    pub fn set_corner_radius(&mut self, corner_radius: CornerRadius) {
        if self.is_disposed() {
            return;
        }

        self.corners = resolve_corner_radius(corner_radius, self.density);
        self.rebuild_shape();
    }

    /// Fill gradient. An empty stop list removes the gradient and restores the flat color.
    pub fn set_gradient(&mut self, stops: &[GradientStop], angle: f32) {
        let bounds = self.bounds;
        let Some(fill) = self.fill.as_mut() else { return; };

        fill.shader = GradientShader::new(stops, angle);
        fill.refresh(bounds);
    }

    /// Stroke width (logical units) and flat stroke color.
    ///
    /// The color is ignored while a border gradient is set.
    pub fn set_stroke(&mut self, width: f32, color: Color) {
        let (density, bounds) = (self.density, self.bounds);
        let Some(stroke) = self.stroke.as_mut() else { return; };

        stroke.style.width = density.to_px(width);
        if stroke.shader.is_none() {
            stroke.color = color;
        }
        stroke.refresh(bounds);
    }

    /// Dash pattern in logical units. A non-positive length on either side
    /// gives a solid stroke.
    pub fn set_dashed_border(&mut self, dash_width: f32, dash_gap: f32) {
        let density = self.density;
        let Some(stroke) = self.stroke.as_mut() else { return; };

        stroke.style.dash = if dash_width <= 0.0 || dash_gap <= 0.0 {
            None
        } else {
            Dash::new(density.to_px(dash_width), density.to_px(dash_gap))
        };
    }

    /// Border gradient. While set, the flat stroke color is replaced by a
    /// white placeholder; an empty stop list removes the gradient so
    /// [`set_stroke`](Self::set_stroke) can set a flat color again.
    pub fn set_border_gradient(&mut self, stops: &[GradientStop], angle: f32) {
        let bounds = self.bounds;
        let Some(stroke) = self.stroke.as_mut() else { return; };

        stroke.shader = GradientShader::new(stops, angle);
        if stroke.shader.is_some() {
            stroke.color = Color::WHITE;
        }
        stroke.refresh(bounds);
    }

    // ── layout / draw ─────────────────────────────────────────────────────

    /// Layout callback: moves the drawable to `bounds` (device pixels) and
    /// rebuilds the outline and both gradients for the new size.
    ///
    /// Non-finite bounds are treated as empty.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if self.is_disposed() {
            return;
        }

        let bounds = if bounds.is_finite() {
            bounds
        } else {
            log::warn!("ignoring non-finite background bounds {bounds:?}");
            Rect::default()
        };
        if bounds == self.bounds {
            return;
        }

        self.bounds = bounds;
        self.rebuild_shape();

        if let Some(fill) = self.fill.as_mut() {
            fill.refresh(bounds);
        }
        if let Some(stroke) = self.stroke.as_mut() {
            stroke.refresh(bounds);
        }

        log::trace!("background resized to {}x{}", bounds.width(), bounds.height());
    }

    /// Draw callback: paints the fill, then the stroke on top of it.
    ///
    /// Draws nothing before the first non-empty [`set_bounds`](Self::set_bounds)
    /// or after [`dispose`](Self::dispose).
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let (Some(fill), Some(stroke)) = (&self.fill, &self.stroke) else { return; };
        if self.shape.is_empty() {
            return;
        }

        canvas.fill_path(&self.shape, &fill.paint);
        canvas.stroke_path(&self.shape, &stroke.style, &stroke.paint);
    }

    /// Releases paints, shaders and the cached outline. Idempotent.
    pub fn dispose(&mut self) {
        if self.is_disposed() {
            return;
        }

        self.fill = None;
        self.stroke = None;
        self.shape = Path::new();
        log::debug!("background drawable disposed");
    }

    // ── inspection ────────────────────────────────────────────────────────

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.fill.is_none()
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn density(&self) -> Density {
        self.density
    }

    #[inline]
    pub fn corners(&self) -> ResolvedRadius {
        self.corners
    }

    /// Outline shared by fill and stroke. Empty until laid out.
    #[inline]
    pub fn shape(&self) -> &Path {
        &self.shape
    }

    pub fn fill_paint(&self) -> Option<&Paint> {
        self.fill.as_ref().map(|f| &f.paint)
    }

    pub fn fill_shader(&self) -> Option<&GradientShader> {
        self.fill.as_ref().and_then(|f| f.shader.as_ref())
    }

    pub fn stroke_paint(&self) -> Option<&Paint> {
        self.stroke.as_ref().map(|s| &s.paint)
    }

    pub fn stroke_style(&self) -> Option<StrokeStyle> {
        self.stroke.as_ref().map(|s| s.style)
    }

    /// Flat stroke color; the placeholder while a border gradient is set.
    pub fn stroke_color(&self) -> Option<Color> {
        self.stroke.as_ref().map(|s| s.color)
    }

    pub fn border_shader(&self) -> Option<&GradientShader> {
        self.stroke.as_ref().and_then(|s| s.shader.as_ref())
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn rebuild_shape(&mut self) {
        self.shape = self.corners.path(self.bounds);
    }
}

impl Drop for BackgroundDrawable {
    fn drop(&mut self) {
        self.dispose();
    }
}

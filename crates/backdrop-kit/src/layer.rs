use backdrop_engine::coords::{Density, Rect};
use backdrop_engine::paint::{Color, Paint};
use backdrop_engine::path::Path;
use backdrop_engine::scene::{Canvas, Dash, StrokeStyle};

use crate::geometry::inset_corner;
use crate::model::{BackgroundStyle, CornerRadius, MaterialVisualElement};
use crate::shader::GradientShader;

/// Outline of `bounds` with independently rounded corners, inset so that a
/// stroke of `border_width` drawn on it stays inside `bounds`.
///
/// - the rectangle shrinks by `border_width / 2` on every side
/// - each corner radius shrinks by `border_width`, never below zero
/// - all-zero radii give a plain rectangle, equal radii a uniform rounded rectangle
/// - otherwise one clockwise quarter arc per rounded corner, starting top-right
///
/// Empty or fully inset bounds give an empty path.
pub fn rounded_corners_path(bounds: Rect, corner_radius: CornerRadius, border_width: f32) -> Path {
    let border_width = border_width.max(0.0);
    let rect = bounds.inset(border_width * 0.5);
    if rect.is_empty() {
        return Path::new();
    }

    if corner_radius.is_empty() {
        return Path::rect(rect);
    }

    if corner_radius.is_uniform() {
        return Path::rounded_rect_uniform(rect, inset_corner(corner_radius.top_left, border_width));
    }

    let radii = corner_radius.to_radii().map(|r| inset_corner(r, border_width));
    Path::rounded_rect(rect, radii)
}

/// Paths and paints built for one layout pass.
#[derive(Debug)]
struct LayerContents {
    fill_path: Path,
    fill_paint: Paint,
    stroke_path: Path,
    stroke_style: StrokeStyle,
    stroke_paint: Paint,
}

/// Layer-style background: builds static paths once per layout instead of
/// re-deriving them on every draw.
///
/// The fill follows `bounds` exactly; the stroke path is inset by the border
/// width (see [`rounded_corners_path`]) so the whole stroke stays visible.
/// `bounds` are device pixels; element lengths are converted with the
/// layer's [`Density`].
#[derive(Debug)]
pub struct BackgroundLayer {
    density: Density,
    style: BackgroundStyle,
    fill: Option<GradientShader>,
    border: Option<GradientShader>,
    bounds: Rect,
    contents: Option<LayerContents>,
    disposed: bool,
}

impl BackgroundLayer {
    pub fn new(element: &dyn MaterialVisualElement, density: Density) -> Self {
        let mut layer = Self {
            density,
            style: BackgroundStyle::new(),
            fill: None,
            border: None,
            bounds: Rect::default(),
            contents: None,
            disposed: false,
        };
        layer.apply(element);
        layer
    }

    /// Takes a fresh snapshot of `element` and rebuilds against the current bounds.
    ///
    /// A default color (`None`) keeps the fill color from the previous snapshot.
    pub fn apply(&mut self, element: &dyn MaterialVisualElement) {
        if self.disposed {
            return;
        }

        let mut style = BackgroundStyle::snapshot(element);
        if let (None, Some(previous)) = (element.color(), self.style.color()) {
            style = style.fill(previous);
        }
        self.style = style;
        self.fill = GradientShader::new(element.gradients(), element.angle());
        self.border = GradientShader::new(element.border_gradients(), element.border_angle());
        self.rebuild();
    }

    /// Layout callback: rebuilds paths and gradients for `bounds`.
    pub fn layout(&mut self, bounds: Rect) {
        if self.disposed {
            return;
        }

        self.bounds = bounds;
        self.rebuild();
    }

    /// Paints the fill, then the stroke on top of it.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let Some(contents) = &self.contents else { return; };

        canvas.fill_path(&contents.fill_path, &contents.fill_paint);
        canvas.stroke_path(&contents.stroke_path, &contents.stroke_style, &contents.stroke_paint);
    }

    /// Releases built paths and shaders. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }

        self.disposed = true;
        self.contents = None;
        self.fill = None;
        self.border = None;
        log::debug!("background layer disposed");
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Fill outline from the last layout, if any.
    pub fn fill_path(&self) -> Option<&Path> {
        self.contents.as_ref().map(|c| &c.fill_path)
    }

    /// Stroke outline from the last layout, if any.
    pub fn stroke_path(&self) -> Option<&Path> {
        self.contents.as_ref().map(|c| &c.stroke_path)
    }

    fn rebuild(&mut self) {
        if self.bounds.is_empty() || !self.bounds.is_finite() {
            self.contents = None;
            return;
        }

        let density = self.density;
        let style = &self.style;
        let corners = style.corner_radius().scaled(density);
        let border_width = density.to_px(style.border_width()).max(0.0);

        let fill_paint = match (&self.fill, style.color()) {
            (Some(shader), _) => shader.paint(self.bounds),
            (None, Some(color)) => Paint::Solid(color),
            (None, None) => Paint::Solid(Color::TRANSPARENT),
        };
        let stroke_paint = match &self.border {
            Some(shader) => shader.paint(self.bounds),
            None => Paint::Solid(style.border_color()),
        };

        let (dash_width, dash_gap) = (style.dash_width(), style.dash_gap());
        let dash = if dash_width <= 0.0 || dash_gap <= 0.0 {
            None
        } else {
            Dash::new(density.to_px(dash_width), density.to_px(dash_gap))
        };

        self.contents = Some(LayerContents {
            fill_path: rounded_corners_path(self.bounds, corners, 0.0),
            fill_paint,
            stroke_path: rounded_corners_path(self.bounds, corners, border_width),
            stroke_style: StrokeStyle::solid(border_width).with_dash(dash),
            stroke_paint,
        });

        log::trace!("background layer rebuilt for {}x{}", self.bounds.width(), self.bounds.height());
    }
}

impl Drop for BackgroundLayer {
    fn drop(&mut self) {
        self.dispose();
    }
}

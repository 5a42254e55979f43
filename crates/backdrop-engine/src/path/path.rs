use core::f32::consts::{FRAC_PI_2, PI};

use crate::coords::{CornerRadii, Rect, Vec2};

use super::Arc;

/// A single path element.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathEl {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Arc continuing from the current point. The current point is always the
    /// arc's start point; [`Path::arc`] inserts the connecting segment.
    Arc(Arc),
    Close,
}

/// A sequence of path elements forming zero or more subpaths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    els: Vec<PathEl>,
    current: Option<Vec2>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.els
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.els.is_empty()
    }

    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.els.push(PathEl::MoveTo(p));
        self.current = Some(p);
        self
    }

    /// Adds a straight segment, or starts a subpath when there is no current point.
    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        match self.current {
            None => return self.move_to(p),
            Some(c) if c == p => return self,
            Some(_) => self.els.push(PathEl::LineTo(p)),
        }
        self.current = Some(p);
        self
    }

    /// Appends `arc`, connecting its start point to the current point with a
    /// straight segment (or a move when the path has no current point).
    pub fn arc(&mut self, arc: Arc) -> &mut Self {
        self.line_to(arc.start_point());
        self.els.push(PathEl::Arc(arc));
        self.current = Some(arc.end_point());
        self
    }

    /// Closes the current subpath. A no-op on a path without a current point.
    pub fn close(&mut self) -> &mut Self {
        if self.current.take().is_some() {
            self.els.push(PathEl::Close);
        }
        self
    }

    /// Number of points placed by moves and lines.
    pub fn vertex_count(&self) -> usize {
        self.els
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_) | PathEl::LineTo(_)))
            .count()
    }

    pub fn arc_count(&self) -> usize {
        self.els.iter().filter(|el| matches!(el, PathEl::Arc(_))).count()
    }

    pub fn arcs(&self) -> impl Iterator<Item = &Arc> + '_ {
        self.els.iter().filter_map(|el| match el {
            PathEl::Arc(a) => Some(a),
            _ => None,
        })
    }

    // ── shapes ────────────────────────────────────────────────────────────

    /// Plain rectangle, clockwise from the top-left corner.
    ///
    /// Empty or non-finite rectangles produce an empty path.
    pub fn rect(rect: Rect) -> Self {
        let mut path = Path::new();
        let Some(r) = drawable_rect(rect) else {
            return path;
        };

        let (min, max) = (r.min(), r.max());
        path.move_to(min)
            .line_to(Vec2::new(max.x, min.y))
            .line_to(max)
            .line_to(Vec2::new(min.x, max.y))
            .close();
        path
    }

    /// Rectangle with the same radius on every corner.
    ///
    /// The radius is clamped to half the shorter side; a zero radius yields
    /// [`Path::rect`].
    pub fn rounded_rect_uniform(rect: Rect, radius: f32) -> Self {
        let Some(r) = drawable_rect(rect) else {
            return Path::new();
        };
        let radius = radius.clamp(0.0, r.width().min(r.height()) * 0.5);
        if !(radius > 0.0) {
            return Path::rect(r);
        }
        Path::rounded_rect(r, CornerRadii::all(radius))
    }

    /// Rectangle with independently rounded corners.
    ///
    /// Traversal is clockwise starting with the top-right corner, one quarter
    /// arc per rounded corner joined by straight edges. Radii are clamped into
    /// `[0, min(w, h) / 2]`; a zero-radius corner is square and contributes no
    /// arc; all-square radii give [`Path::rect`]. Empty or non-finite
    /// rectangles produce an empty path.
    pub fn rounded_rect(rect: Rect, radii: CornerRadii) -> Self {
        let mut path = Path::new();
        let Some(r) = drawable_rect(rect) else {
            return path;
        };

        let radii = radii.clamped(r.width().min(r.height()) * 0.5);
        if radii.is_zero() {
            return Path::rect(r);
        }
        let (min, max) = (r.min(), r.max());

        path.corner(
            Vec2::new(max.x - radii.top_right, min.y + radii.top_right),
            radii.top_right,
            1.5 * PI,
            Vec2::new(max.x, min.y),
        );
        path.corner(
            Vec2::new(max.x - radii.bottom_right, max.y - radii.bottom_right),
            radii.bottom_right,
            0.0,
            max,
        );
        path.corner(
            Vec2::new(min.x + radii.bottom_left, max.y - radii.bottom_left),
            radii.bottom_left,
            FRAC_PI_2,
            Vec2::new(min.x, max.y),
        );
        path.corner(
            Vec2::new(min.x + radii.top_left, min.y + radii.top_left),
            radii.top_left,
            PI,
            min,
        );
        path.close();
        path
    }

    fn corner(&mut self, center: Vec2, radius: f32, start_angle: f32, square: Vec2) {
        if radius > 0.0 {
            self.arc(Arc::quarter(center, radius, start_angle));
        } else {
            self.line_to(square);
        }
    }
}

/// Normalized `rect`, or `None` when nothing can be drawn inside it.
fn drawable_rect(rect: Rect) -> Option<Rect> {
    let r = rect.normalized();
    (r.is_finite() && !r.is_empty()).then_some(r)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 1e-4
    }

    // ── builder ───────────────────────────────────────────────────────────

    #[test]
    fn line_without_current_point_starts_subpath() {
        let mut p = Path::new();
        p.line_to(Vec2::new(1.0, 1.0));
        assert_eq!(p.elements(), &[PathEl::MoveTo(Vec2::new(1.0, 1.0))]);
    }

    #[test]
    fn zero_length_line_is_skipped() {
        let mut p = Path::new();
        p.move_to(Vec2::zero()).line_to(Vec2::zero());
        assert_eq!(p.elements().len(), 1);
    }

    #[test]
    fn close_on_empty_path_is_noop() {
        let mut p = Path::new();
        p.close();
        assert!(p.is_empty());
    }

    // ── rect ──────────────────────────────────────────────────────────────

    #[test]
    fn rect_has_four_vertices_and_no_arcs() {
        let p = Path::rect(Rect::new(0.0, 0.0, 20.0, 10.0));
        assert_eq!(p.vertex_count(), 4);
        assert_eq!(p.arc_count(), 0);
        assert_eq!(
            p.elements(),
            &[
                PathEl::MoveTo(Vec2::new(0.0, 0.0)),
                PathEl::LineTo(Vec2::new(20.0, 0.0)),
                PathEl::LineTo(Vec2::new(20.0, 10.0)),
                PathEl::LineTo(Vec2::new(0.0, 10.0)),
                PathEl::Close,
            ]
        );
    }

    #[test]
    fn empty_rect_gives_empty_path() {
        assert!(Path::rect(Rect::new(5.0, 5.0, 0.0, 10.0)).is_empty());
        assert!(Path::rounded_rect(Rect::new(0.0, 0.0, 10.0, 0.0), CornerRadii::all(2.0)).is_empty());
        assert!(Path::rounded_rect_uniform(Rect::default(), 4.0).is_empty());
    }

    #[test]
    fn non_finite_rect_gives_empty_path() {
        let nan = Rect::new(0.0, 0.0, f32::NAN, f32::NAN);
        let wide = Rect::new(0.0, 0.0, f32::INFINITY, 10.0);
        for rect in [nan, wide, Rect::new(f32::NEG_INFINITY, 0.0, 5.0, 5.0)] {
            assert!(Path::rect(rect).is_empty());
            assert!(Path::rounded_rect_uniform(rect, 4.0).is_empty());
            assert!(Path::rounded_rect(rect, CornerRadii::all(4.0)).is_empty());
        }
    }

    // ── rounded rect ──────────────────────────────────────────────────────

    #[test]
    fn rounded_rect_has_one_arc_per_corner_clockwise() {
        let p = Path::rounded_rect(Rect::new(0.0, 0.0, 100.0, 50.0), CornerRadii::new(4.0, 8.0, 12.0, 16.0));
        let arcs: Vec<Arc> = p.arcs().copied().collect();
        assert_eq!(arcs.len(), 4);

        // Top-right, bottom-right, bottom-left, top-left.
        assert_eq!(arcs[0].radius, 8.0);
        assert_eq!(arcs[1].radius, 12.0);
        assert_eq!(arcs[2].radius, 16.0);
        assert_eq!(arcs[3].radius, 4.0);

        assert!(close(arcs[0].start_point(), Vec2::new(92.0, 0.0)));
        assert!(close(arcs[0].end_point(), Vec2::new(100.0, 8.0)));
        assert!(close(arcs[1].end_point(), Vec2::new(88.0, 50.0)));
        assert!(close(arcs[2].end_point(), Vec2::new(0.0, 34.0)));
        assert!(close(arcs[3].end_point(), Vec2::new(4.0, 0.0)));

        assert!(arcs.iter().all(|a| a.sweep > 0.0));
        assert_eq!(p.elements().last(), Some(&PathEl::Close));
    }

    #[test]
    fn square_corner_has_no_arc() {
        let p = Path::rounded_rect(Rect::new(0.0, 0.0, 40.0, 40.0), CornerRadii::new(0.0, 5.0, 5.0, 5.0));
        assert_eq!(p.arc_count(), 3);
        assert!(p.elements().contains(&PathEl::LineTo(Vec2::new(0.0, 0.0))));
    }

    #[test]
    fn radii_are_clamped_to_half_the_short_side() {
        let p = Path::rounded_rect_uniform(Rect::new(0.0, 0.0, 40.0, 10.0), 30.0);
        assert!(p.arcs().all(|a| a.radius == 5.0));
    }

    #[test]
    fn uniform_zero_radius_is_plain_rect() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(Path::rounded_rect_uniform(rect, 0.0), Path::rect(rect));
        assert_eq!(Path::rounded_rect_uniform(rect, f32::NAN), Path::rect(rect));
    }

    #[test]
    fn all_square_corners_are_plain_rect() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(Path::rounded_rect(rect, CornerRadii::new(0.0, -1.0, 0.0, 0.0)), Path::rect(rect));
    }

    #[test]
    fn uniform_matches_general_case() {
        let rect = Rect::new(1.0, 2.0, 30.0, 20.0);
        assert_eq!(
            Path::rounded_rect_uniform(rect, 6.0),
            Path::rounded_rect(rect, CornerRadii::all(6.0))
        );
    }
}

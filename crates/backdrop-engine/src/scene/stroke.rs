/// Dash pattern for a stroke, in device pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dash {
    /// Length of each painted segment.
    pub on: f32,
    /// Length of each gap.
    pub off: f32,
    /// Offset into the pattern at the start of the path.
    pub phase: f32,
}

impl Dash {
    /// Creates a dash pattern starting at phase 0.
    ///
    /// Returns `None` unless both lengths are positive and finite; callers
    /// treat that as a solid stroke.
    pub fn new(on: f32, off: f32) -> Option<Self> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        (usable(on) && usable(off)).then_some(Self { on, off, phase: 0.0 })
    }
}

/// Stroke geometry. Paint is supplied separately.
///
/// The stroke is centered on the path, so half of `width` lies outside it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub dash: Option<Dash>,
}

impl StrokeStyle {
    #[inline]
    pub fn solid(width: f32) -> Self {
        Self { width, dash: None }
    }

    #[inline]
    pub fn with_dash(mut self, dash: Option<Dash>) -> Self {
        self.dash = dash;
        self
    }

    /// True when stroking with this style paints nothing.
    #[inline]
    pub fn is_invisible(&self) -> bool {
        !(self.width > 0.0 && self.width.is_finite())
    }
}

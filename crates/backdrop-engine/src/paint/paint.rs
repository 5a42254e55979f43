use crate::paint::Color;
use crate::paint::gradient::LinearGradient;

/// Paint source for filling or stroking a path.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Returns the gradient, or `None` for solid paints.
    #[inline]
    pub fn as_linear_gradient(&self) -> Option<&LinearGradient> {
        match self {
            Paint::Solid(_) => None,
            Paint::LinearGradient(g) => Some(g),
        }
    }

    /// True when painting with this source can have no visible effect.
    #[inline]
    pub fn is_invisible(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a <= 0.0,
            Paint::LinearGradient(g) => g.stops.iter().all(|s| s.color.a <= 0.0),
        }
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    #[inline]
    fn from(gradient: LinearGradient) -> Self {
        Paint::LinearGradient(gradient)
    }
}

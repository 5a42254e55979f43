/// Device-pixel-per-logical-unit ratio.
///
/// Every logical length that reaches a path or a stroke (corner radii, stroke
/// widths, dash lengths) goes through [`Density::to_px`], so all of them scale
/// the same way.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Density(f32);

impl Density {
    /// 1 logical unit == 1 device pixel.
    pub const IDENTITY: Density = Density(1.0);

    /// Creates a density factor.
    ///
    /// Non-finite or non-positive factors are replaced by `1.0`.
    pub fn new(scale: f32) -> Self {
        if scale.is_finite() && scale > 0.0 {
            Self(scale)
        } else {
            log::warn!("invalid density factor {scale}, falling back to 1.0");
            Self::IDENTITY
        }
    }

    #[inline]
    pub fn scale(self) -> f32 {
        self.0
    }

    /// Converts a logical length to device pixels.
    #[inline]
    pub fn to_px(self, logical: f32) -> f32 {
        logical * self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_px_multiplies_by_scale() {
        assert_eq!(Density::new(2.5).to_px(4.0), 10.0);
        assert_eq!(Density::IDENTITY.to_px(3.0), 3.0);
    }

    #[test]
    fn invalid_scale_falls_back_to_identity() {
        assert_eq!(Density::new(0.0), Density::IDENTITY);
        assert_eq!(Density::new(-3.0), Density::IDENTITY);
        assert_eq!(Density::new(f32::NAN), Density::IDENTITY);
        assert_eq!(Density::new(f32::INFINITY), Density::IDENTITY);
    }
}

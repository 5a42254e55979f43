//! The descriptive background model adapters read from.
//!
//! Everything here is in logical units. Adapters copy values out of a
//! [`MaterialVisualElement`] and convert them to device pixels themselves.

mod corner_radius;
mod element;
mod gradient_stop;

pub use corner_radius::CornerRadius;
pub use element::{BackgroundStyle, MaterialVisualElement};
pub use gradient_stop::GradientStop;

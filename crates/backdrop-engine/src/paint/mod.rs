//! Paint model shared between the kit and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, linear gradients)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
mod paint;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient};
pub use paint::Paint;

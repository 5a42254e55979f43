//! Coordinate and geometry types shared across the engine and the kit.
//!
//! Canonical CPU space:
//! - Logical pixels, converted to device pixels through [`Density`]
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are radians measured from +X towards +Y, so positive sweeps turn
//! clockwise on screen.

mod corner_radii;
mod density;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use density::Density;
pub use rect::Rect;
pub use vec2::Vec2;

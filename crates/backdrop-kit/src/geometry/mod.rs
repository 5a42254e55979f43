//! Pure geometry helpers: gradient direction from an angle, and corner radii
//! resolution for path builders.

mod angle;
mod corners;

pub use angle::{gradient_points, GradientPoints};
pub use corners::{inset_corner, resolve_corner_radius, ResolvedRadius};

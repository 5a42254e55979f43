//! Backdrop engine crate.
//!
//! Renderer-agnostic building blocks for painting backgrounds: logical-pixel
//! geometry, paint sources, paths with circular arcs, and a recorded draw
//! stream that downstream renderers consume.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod path;
pub mod scene;

//! Backdrop kit: material-style backgrounds on top of `backdrop-engine`.
//!
//! A background is described by a [`MaterialVisualElement`](model::MaterialVisualElement)
//! (fill color, per-corner radii, fill gradient, border width/color/gradient,
//! dash pattern) and painted by one of two adapters:
//!
//! | Adapter | Behaviour |
//! |---------|-----------|
//! | [`BackgroundDrawable`](drawable::BackgroundDrawable) | keeps fill/stroke paints, rebinds gradients on resize, draws the outline on every draw callback |
//! | [`BackgroundLayer`](layer::BackgroundLayer) | builds fill and inset stroke paths once per layout |
//!
//! Both paint through [`Canvas`](backdrop_engine::scene::Canvas), fill first
//! and stroke on top.
//!
//! # Quick start
//!
//! ```rust
//! use backdrop_kit::prelude::*;
//!
//! let style = BackgroundStyle::new()
//!     .gradient(
//!         [
//!             GradientStop::new(Color::from_argb_u32(0xFFFF_0000), 0.0),
//!             GradientStop::new(Color::from_argb_u32(0xFF00_00FF), 1.0),
//!         ],
//!         45.0,
//!     )
//!     .rounded(CornerRadius::new(16.0, 16.0, 0.0, 0.0));
//!
//! let mut layer = style.to_layer(Density::new(3.0));
//! layer.layout(Rect::from_size(300.0, 120.0));
//!
//! let mut list = DrawList::new();
//! layer.draw(&mut list);
//! assert_eq!(list.len(), 1);
//! ```

pub mod drawable;
pub mod ext;
pub mod geometry;
pub mod layer;
pub mod model;
pub mod shader;

/// Everything needed to describe and paint backgrounds.
pub mod prelude {
    pub use crate::drawable::{BackgroundDrawable, DrawableConfig};
    pub use crate::ext::MaterialBackgroundExt;
    pub use crate::geometry::{gradient_points, resolve_corner_radius, GradientPoints, ResolvedRadius};
    pub use crate::layer::{rounded_corners_path, BackgroundLayer};
    pub use crate::model::{BackgroundStyle, CornerRadius, GradientStop, MaterialVisualElement};
    pub use crate::shader::GradientShader;

    // Re-export the engine primitives everyone needs.
    pub use backdrop_engine::coords::{CornerRadii, Density, Rect, Vec2};
    pub use backdrop_engine::paint::{Color, ColorStop, LinearGradient, Paint};
    pub use backdrop_engine::path::{Arc, Path, PathEl};
    pub use backdrop_engine::scene::{Canvas, Dash, DrawCmd, DrawList, StrokeStyle};
}

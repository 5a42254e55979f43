//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - define the [`Canvas`] contract adapters paint through
//! - store renderer-agnostic draw commands in paint order
//! - describe stroke geometry (width, dash pattern) separately from paint

mod canvas;
mod cmd;
mod list;
mod stroke;

pub use canvas::Canvas;
pub use cmd::{DrawCmd, FillCmd, StrokeCmd};
pub use list::DrawList;
pub use stroke::{Dash, StrokeStyle};

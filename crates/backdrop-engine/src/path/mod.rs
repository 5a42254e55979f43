//! Paths built from straight segments and circular arcs.
//!
//! Arcs are kept as arcs rather than flattened so renderers can choose their
//! own tessellation tolerance, and so callers can reason about corner geometry.

mod arc;
mod path;

pub use arc::Arc;
pub use path::{Path, PathEl};

use crate::paint::Paint;
use crate::path::Path;

use super::StrokeStyle;

/// Fill the interior of `path` with `paint` (non-zero winding).
#[derive(Debug, Clone, PartialEq)]
pub struct FillCmd {
    pub path: Path,
    pub paint: Paint,
}

/// Stroke the outline of `path` with `paint`.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCmd {
    pub path: Path,
    pub style: StrokeStyle,
    pub paint: Paint,
}

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new variant here
/// - add the matching method to [`Canvas`](super::Canvas) and record it in [`DrawList`](super::DrawList)
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill(FillCmd),
    Stroke(StrokeCmd),
}

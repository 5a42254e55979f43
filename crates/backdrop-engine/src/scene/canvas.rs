use crate::paint::Paint;
use crate::path::Path;

use super::StrokeStyle;

/// Drawing target handed to adapters on every draw callback.
///
/// Calls are painted in the order they are made: later calls land on top.
pub trait Canvas {
    /// Fills the interior of `path`.
    fn fill_path(&mut self, path: &Path, paint: &Paint);

    /// Strokes the outline of `path`, centered on the path.
    fn stroke_path(&mut self, path: &Path, style: &StrokeStyle, paint: &Paint);
}

use crate::paint::Paint;
use crate::path::Path;

use super::{Canvas, DrawCmd, FillCmd, StrokeCmd, StrokeStyle};

/// Recorded draw stream.
///
/// Commands are stored in paint order (back-to-front). Recording through the
/// [`Canvas`] impl drops commands that cannot paint anything: empty paths,
/// zero-width strokes and fully transparent paints.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a command as-is, on top of everything recorded so far.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }
}

impl Canvas for DrawList {
    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        if path.is_empty() || paint.is_invisible() {
            return;
        }
        self.push(DrawCmd::Fill(FillCmd { path: path.clone(), paint: paint.clone() }));
    }

    fn stroke_path(&mut self, path: &Path, style: &StrokeStyle, paint: &Paint) {
        if path.is_empty() || style.is_invisible() || paint.is_invisible() {
            return;
        }
        self.push(DrawCmd::Stroke(StrokeCmd {
            path: path.clone(),
            style: *style,
            paint: paint.clone(),
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::Color;

    fn square() -> Path {
        Path::rect(Rect::new(0.0, 0.0, 10.0, 10.0))
    }

    #[test]
    fn records_in_call_order() {
        let mut list = DrawList::new();
        list.fill_path(&square(), &Paint::solid(Color::BLACK));
        list.stroke_path(&square(), &StrokeStyle::solid(2.0), &Paint::solid(Color::WHITE));

        assert_eq!(list.len(), 2);
        assert!(matches!(list.items()[0], DrawCmd::Fill(_)));
        assert!(matches!(list.items()[1], DrawCmd::Stroke(_)));
    }

    #[test]
    fn drops_commands_that_paint_nothing() {
        let mut list = DrawList::new();
        list.fill_path(&Path::new(), &Paint::solid(Color::BLACK));
        list.fill_path(&square(), &Paint::solid(Color::TRANSPARENT));
        list.stroke_path(&square(), &StrokeStyle::solid(0.0), &Paint::solid(Color::BLACK));
        assert!(list.is_empty());
    }

    #[test]
    fn clear_empties_the_stream() {
        let mut list = DrawList::new();
        list.fill_path(&square(), &Paint::solid(Color::BLACK));
        list.clear();
        assert!(list.is_empty());
    }
}

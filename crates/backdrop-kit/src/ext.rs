use backdrop_engine::coords::Density;

use crate::drawable::{BackgroundDrawable, DrawableConfig};
use crate::layer::BackgroundLayer;
use crate::model::MaterialVisualElement;

/// Builds platform backgrounds straight from an element.
///
/// Implemented for every [`MaterialVisualElement`].
pub trait MaterialBackgroundExt: MaterialVisualElement {
    /// Paint-drawable background for this element.
    fn to_drawable(&self, config: DrawableConfig) -> BackgroundDrawable;

    /// Layer background for this element.
    fn to_layer(&self, density: Density) -> BackgroundLayer;
}

impl<T: MaterialVisualElement> MaterialBackgroundExt for T {
    fn to_drawable(&self, config: DrawableConfig) -> BackgroundDrawable {
        BackgroundDrawable::new(config, Some(self))
    }

    fn to_layer(&self, density: Density) -> BackgroundLayer {
        BackgroundLayer::new(self, density)
    }
}

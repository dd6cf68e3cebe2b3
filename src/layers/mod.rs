//! Layer definitions handed to the deck.gl engine

pub mod base;
pub mod layer;
pub mod macros;

/// A lone layer stands for a one-element layer list.
impl From<layer::Layer> for Vec<layer::Layer> {
    fn from(layer: layer::Layer) -> Self {
        vec![layer]
    }
}

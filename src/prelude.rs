//! Prelude module for common decklet types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use decklet::prelude::*;`

pub use crate::core::{
    builder::DeckBuilder,
    config::{HtmlOptions, JsonOptions},
    deck::{Advisory, Deck},
    environment::{Environment, ProcessEnvironment, StaticEnvironment},
    geo::LatLng,
};

pub use crate::json::JsonNode;

pub use crate::layers::{base::LayerType, layer::Layer};

pub use crate::views::{compute::compute_view, view::View, view_state::ViewState};

pub use crate::ui::{
    display::{DisplayStrategy, EvcxrDisplay, Headless},
    tooltip::{Tooltip, TooltipTemplate},
    widget::{DeckWidget, Dimension},
};

pub use crate::{Error, Result};

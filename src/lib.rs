//! # decklet
//!
//! Build deck.gl visualizations from Rust and render them in a notebook or
//! as a standalone HTML page.
//!
//! All drawing, picking and camera math happens in the browser inside the
//! deck.gl engine. This crate assembles the JSON configuration the engine
//! consumes, keeps a channel to the notebook widget, and writes HTML files
//! that bootstrap the engine from a CDN.
//!
//! ```no_run
//! use decklet::prelude::*;
//!
//! # fn main() -> decklet::Result<()> {
//! let points = serde_json::json!([{"lng": -122.4, "lat": 37.8}]);
//! let layer = Layer::new(LayerType::Scatterplot, points)?
//!     .with("get_position", "[lng, lat]")?
//!     .with("pickable", true)?;
//!
//! let deck = Deck::builder()
//!     .with_layers(layer)
//!     .with_initial_view_state(ViewState::new(-122.4, 37.8, 11.0))
//!     .build();
//!
//! let path = deck.to_html(&HtmlOptions::default().with_filename("map.html"))?;
//! println!("wrote {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod io;
pub mod json;
pub mod layers;
pub mod prelude;
pub mod ui;
pub mod views;
pub use crate::core::constants;

// Re-export public API
pub use core::{
    builder::DeckBuilder,
    config::{HtmlOptions, JsonOptions},
    deck::{Advisory, Deck},
    environment::{Environment, ProcessEnvironment, StaticEnvironment},
    geo::LatLng,
};

pub use json::JsonNode;

pub use layers::{base::LayerType, layer::Layer};

pub use views::{compute::compute_view, view::View, view_state::ViewState};

pub use ui::{
    display::{DisplayStrategy, EvcxrDisplay, Headless},
    tooltip::{Tooltip, TooltipContent, TooltipTemplate},
    widget::{DeckWidget, Dimension, SelectionSender},
};

pub use io::html::HtmlEmitter;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot serialize attribute `{attribute}` of type `{type_name}`: {source}")]
    Serialization {
        attribute: String,
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot join object of type `{type_name}` to a deck")]
    Configuration { type_name: &'static str },

    #[error("Browser error: {0}")]
    Browser(String),
}

/// Error type alias for convenience
pub type Error = DeckError;

/// Installs `env_logger` as the `log` backend.
///
/// Safe to call more than once; later calls are ignored.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .try_init();
}

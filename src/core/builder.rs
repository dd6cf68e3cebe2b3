//! Deck builder for fluent API configuration
//!
//! This module provides a DeckBuilder that collects layers, views, camera
//! and display options, then resolves the basemap credential once in
//! `build`.

use std::sync::Arc;

use crate::{
    core::{
        constants::{DEFAULT_HEIGHT, DEFAULT_MAP_STYLE, DEFAULT_WIDTH},
        deck::{default_display, Deck},
        environment::{resolve_credential, Environment, ProcessEnvironment},
    },
    layers::layer::Layer,
    ui::{display::DisplayStrategy, tooltip::Tooltip, widget::Dimension},
    views::{view::View, view_state::ViewState},
};

/// Builder for creating and configuring Deck instances
pub struct DeckBuilder {
    layers: Vec<Layer>,
    views: Vec<View>,
    initial_view_state: ViewState,
    map_style: String,
    /// Explicit credential, checked before the environment
    mapbox_key: Option<String>,
    environment: Box<dyn Environment>,
    width: Dimension,
    height: Dimension,
    tooltip: Tooltip,
    display: Arc<dyn DisplayStrategy>,
}

impl DeckBuilder {
    /// Create a new DeckBuilder with default settings
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            views: vec![View::default()],
            initial_view_state: ViewState::default(),
            map_style: DEFAULT_MAP_STYLE.to_string(),
            mapbox_key: None,
            environment: Box::new(ProcessEnvironment),
            width: Dimension::from(DEFAULT_WIDTH),
            height: Dimension::from(DEFAULT_HEIGHT),
            tooltip: Tooltip::default(),
            display: default_display(),
        }
    }

    /// Set the layers, bottom first. A single layer is accepted as well.
    pub fn with_layers(mut self, layers: impl Into<Vec<Layer>>) -> Self {
        self.layers = layers.into();
        self
    }

    /// Append one layer on top of those already set
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn with_views(mut self, views: impl Into<Vec<View>>) -> Self {
        self.views = views.into();
        self
    }

    pub fn with_initial_view_state(mut self, view_state: ViewState) -> Self {
        self.initial_view_state = view_state;
        self
    }

    /// Set the basemap style URI
    pub fn with_map_style(mut self, map_style: impl Into<String>) -> Self {
        self.map_style = map_style.into();
        self
    }

    /// Set the basemap credential, taking precedence over `MAPBOX_API_KEY`
    pub fn with_mapbox_key(mut self, mapbox_key: impl Into<String>) -> Self {
        self.mapbox_key = Some(mapbox_key.into());
        self
    }

    /// Set where the fallback credential is looked up
    pub fn with_environment(mut self, environment: impl Environment + 'static) -> Self {
        self.environment = Box::new(environment);
        self
    }

    pub fn with_width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = width.into();
        self
    }

    pub fn with_height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = height.into();
        self
    }

    /// Toggle the default tooltip or pass a template
    pub fn with_tooltip(mut self, tooltip: impl Into<Tooltip>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    /// Set how `to_html` shows its inline frame
    pub fn with_display(mut self, display: impl DisplayStrategy + 'static) -> Self {
        self.display = Arc::new(display);
        self
    }

    /// Build the deck with the configured options
    pub fn build(self) -> Deck {
        let mapbox_key = resolve_credential(self.mapbox_key, self.environment.as_ref());

        Deck::from_parts(
            self.layers,
            self.views,
            self.initial_view_state,
            self.map_style,
            self.width,
            self.height,
            self.tooltip,
            mapbox_key,
            self.display,
        )
    }
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self::new()
    }
}

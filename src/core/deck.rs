//! The scene document
//!
//! A [`Deck`] owns everything deck.gl needs to draw one visualization and
//! knows three ways to realize it: JSON text, the notebook widget, or an
//! HTML file.

use std::{any::Any, fmt, path::PathBuf, sync::Arc};

use serde::Deserialize;
use serde_json::Value;

use crate::{
    core::{
        builder::DeckBuilder,
        config::HtmlOptions,
        constants::{DEFAULT_HEIGHT, DEFAULT_MAP_STYLE, DEFAULT_WIDTH},
    },
    impl_serialize_via_mapping,
    io::html::HtmlEmitter,
    json::{self, JsonMap, JsonNode},
    layers::layer::Layer,
    ui::{
        display::{DisplayStrategy, Headless},
        tooltip::Tooltip,
        widget::{DeckWidget, Dimension},
    },
    views::{view::View, view_state::ViewState},
    Error, Result,
};

/// Non-fatal problems noticed while building a deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// No basemap credential; the map renders without basemap tiles.
    MissingCredential,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::MissingCredential => f.write_str(
                "Mapbox API key is not set. This may impact available features of the basemap.",
            ),
        }
    }
}

/// The renderer and configuration for a visualization
#[derive(Debug, Clone)]
pub struct Deck {
    /// Drawn in order; later layers on top
    pub layers: Vec<Layer>,
    pub views: Vec<View>,
    pub initial_view_state: ViewState,
    /// Basemap style URI
    pub map_style: String,
    pub width: Dimension,
    pub height: Dimension,
    pub tooltip: Tooltip,
    mapbox_key: Option<String>,
    advisories: Vec<Advisory>,
    widget: DeckWidget,
    display: Arc<dyn DisplayStrategy>,
}

impl Deck {
    /// A deck with every default, credential read from `MAPBOX_API_KEY`.
    pub fn new() -> Self {
        DeckBuilder::new().build()
    }

    pub fn builder() -> DeckBuilder {
        DeckBuilder::new()
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        layers: Vec<Layer>,
        views: Vec<View>,
        initial_view_state: ViewState,
        map_style: String,
        width: Dimension,
        height: Dimension,
        tooltip: Tooltip,
        mapbox_key: Option<String>,
        display: Arc<dyn DisplayStrategy>,
    ) -> Self {
        let advisories = advisories_for(mapbox_key.as_deref());

        Self {
            layers,
            views,
            initial_view_state,
            map_style,
            width,
            height,
            tooltip,
            mapbox_key,
            advisories,
            widget: DeckWidget::new(),
            display,
        }
    }

    /// Parses a document produced by [`JsonNode::to_json`].
    ///
    /// The credential is not part of the document; it is resolved again
    /// from the process environment.
    pub fn from_json(text: &str) -> Result<Self> {
        let document: DeckDocument = serde_json::from_str(text)?;
        Ok(DeckBuilder::new()
            .with_layers(document.layers)
            .with_views(document.views)
            .with_initial_view_state(document.initial_view_state)
            .with_map_style(document.map_style)
            .with_width(document.width)
            .with_height(document.height)
            .with_tooltip(document.tooltip)
            .build())
    }

    /// Appends a layer on top of the existing ones
    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Replaces the whole view list
    pub fn set_views(&mut self, views: impl Into<Vec<View>>) {
        self.views = views.into();
    }

    pub fn set_initial_view_state(&mut self, view_state: ViewState) {
        self.initial_view_state = view_state;
    }

    /// Attaches a configuration fragment of any node type.
    ///
    /// A `Layer` is appended. A `View` *replaces* the view list with just
    /// itself. A `ViewState` replaces the initial view state. Anything else
    /// is rejected with [`Error::Configuration`] and the deck is unchanged.
    pub fn compose<N: JsonNode + Any>(&mut self, node: N) -> Result<()> {
        let node: Box<dyn Any> = Box::new(node);

        let node = match node.downcast::<Layer>() {
            Ok(layer) => {
                self.add_layer(*layer);
                return Ok(());
            }
            Err(other) => other,
        };
        let node = match node.downcast::<View>() {
            Ok(view) => {
                self.set_views(*view);
                return Ok(());
            }
            Err(other) => other,
        };
        match node.downcast::<ViewState>() {
            Ok(view_state) => {
                self.set_initial_view_state(*view_state);
                Ok(())
            }
            Err(_) => Err(Error::Configuration {
                type_name: short_type_name::<N>(),
            }),
        }
    }

    pub fn mapbox_key(&self) -> Option<&str> {
        self.mapbox_key.as_deref()
    }

    /// Sets the credential used by the widget and HTML output and
    /// re-evaluates the advisories.
    pub fn set_mapbox_key(&mut self, mapbox_key: Option<String>) {
        self.mapbox_key = mapbox_key.filter(|key| !key.is_empty());
        self.advisories = advisories_for(self.mapbox_key.as_deref());
    }

    /// Non-fatal problems with the current configuration
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    pub fn set_display(&mut self, display: Arc<dyn DisplayStrategy>) {
        self.display = display;
    }

    /// Pushes the current configuration to the widget.
    ///
    /// Call after changing layers or their data to refresh a displayed map.
    pub fn update(&mut self) -> Result<()> {
        let json_input = self.to_json()?;
        self.widget.set_mapbox_key(self.mapbox_key.clone());
        self.widget.set_size(self.width.clone(), self.height.clone());
        self.widget.set_tooltip(self.tooltip.clone());
        self.widget.set_json_input(json_input);
        Ok(())
    }

    /// Updates the widget and returns it for display by the notebook
    pub fn show(&mut self) -> Result<&DeckWidget> {
        self.update()?;
        Ok(&self.widget)
    }

    pub fn widget(&self) -> &DeckWidget {
        &self.widget
    }

    /// Writes the deck to a standalone HTML file and returns its absolute path.
    ///
    /// The page fetches deck.gl from a CDN, so viewing it needs network
    /// access.
    pub fn to_html(&self, options: &HtmlOptions) -> Result<PathBuf> {
        let json_input = self.to_json()?;
        HtmlEmitter::new(self.display.as_ref()).emit(
            &json_input,
            self.mapbox_key(),
            options,
            &self.tooltip,
        )
    }

    /// Whatever the engine last reported as selected
    pub fn selected_data(&self) -> Option<Value> {
        self.widget.selected_data()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Decks are equal when they describe the same visualization.
impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.layers == other.layers
            && self.views == other.views
            && self.initial_view_state == other.initial_view_state
            && self.map_style == other.map_style
            && self.width == other.width
            && self.height == other.height
            && self.tooltip == other.tooltip
            && self.mapbox_key == other.mapbox_key
    }
}

impl JsonNode for Deck {
    fn to_mapping(&self) -> Result<JsonMap> {
        let mut mapping = JsonMap::new();
        mapping.insert("layers".into(), json::nodes_to_value(&self.layers)?);
        mapping.insert("views".into(), json::nodes_to_value(&self.views)?);
        mapping.insert(
            "initialViewState".into(),
            Value::Object(self.initial_view_state.to_mapping()?),
        );
        mapping.insert("mapStyle".into(), Value::String(self.map_style.clone()));
        mapping.insert("width".into(), json::to_value("width", &self.width)?);
        mapping.insert("height".into(), json::to_value("height", &self.height)?);
        mapping.insert("tooltip".into(), json::to_value("tooltip", &self.tooltip)?);
        log::debug!(
            "serialized deck: {} layers, {} views",
            self.layers.len(),
            self.views.len()
        );
        Ok(mapping)
    }
}

impl_serialize_via_mapping!(Deck);

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeckDocument {
    #[serde(default)]
    layers: Vec<Layer>,
    #[serde(default = "default_views")]
    views: Vec<View>,
    #[serde(default)]
    initial_view_state: ViewState,
    #[serde(default = "default_map_style")]
    map_style: String,
    #[serde(default = "default_width")]
    width: Dimension,
    #[serde(default = "default_height")]
    height: Dimension,
    #[serde(default)]
    tooltip: Tooltip,
}

fn advisories_for(mapbox_key: Option<&str>) -> Vec<Advisory> {
    let mut advisories = Vec::new();
    if mapbox_key.is_none() {
        log::warn!("{}", Advisory::MissingCredential);
        advisories.push(Advisory::MissingCredential);
    }
    advisories
}

fn default_views() -> Vec<View> {
    vec![View::default()]
}

fn default_map_style() -> String {
    DEFAULT_MAP_STYLE.to_string()
}

fn default_width() -> Dimension {
    Dimension::from(DEFAULT_WIDTH)
}

fn default_height() -> Dimension {
    Dimension::from(DEFAULT_HEIGHT)
}

pub(crate) fn default_display() -> Arc<dyn DisplayStrategy> {
    Arc::new(Headless)
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

//! Defaults shared with the deck.gl Jupyter widget and the HTML template.
//! Keeping them in a single place makes it easier to bump CDN versions.

/// Environment variable read for the basemap credential when none is passed.
pub const MAPBOX_API_KEY_ENV: &str = "MAPBOX_API_KEY";

/// Default basemap style URI.
pub const DEFAULT_MAP_STYLE: &str = "mapbox://styles/mapbox/dark-v9";

/// View type used when a `View` is created without one.
pub const DEFAULT_VIEW_TYPE: &str = "MapView";

/// Default widget width, as a CSS length.
pub const DEFAULT_WIDTH: &str = "100%";

/// Default widget height in pixels.
pub const DEFAULT_HEIGHT: u32 = 500;

/// Inline frame size used when an HTML file is displayed in a notebook.
pub const DEFAULT_IFRAME_WIDTH: u32 = 700;
pub const DEFAULT_IFRAME_HEIGHT: u32 = 500;

/// Zoom limits of a default `ViewState`.
pub const DEFAULT_MIN_ZOOM: f64 = 0.0;
pub const DEFAULT_MAX_ZOOM: f64 = 20.0;

/// Prefix of generated HTML file names.
pub const HTML_FILE_PREFIX: &str = "decklet_";

/// deck.gl Jupyter widget bundle, loaded through RequireJS.
pub const DECKGL_BUNDLE_URL: &str = "https://unpkg.com/@deck.gl/jupyter-widget@^8.0.0/dist/index";

/// Mapbox GL, needed by the engine to draw the basemap.
pub const MAPBOX_GL_JS_URL: &str = "https://api.tiles.mapbox.com/mapbox-gl-js/v1.2.1/mapbox-gl.js";
pub const MAPBOX_GL_CSS_URL: &str = "https://api.tiles.mapbox.com/mapbox-gl-js/v1.2.1/mapbox-gl.css";

pub const REQUIREJS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/require.js/2.3.6/require.min.js";

/// Engine-side tooltip text is cut to this many characters per value.
pub const TOOLTIP_VALUE_MAX_LENGTH: usize = 50;

/// Arrays longer than this are summarized as `Array<n>` in default tooltips.
pub const TOOLTIP_ARRAY_PREVIEW_LIMIT: usize = 4;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{
    core::{
        constants::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM},
        geo::LatLng,
    },
    impl_attribute_bag, impl_serialize_via_mapping,
    json::{self, JsonMap, JsonNode},
    Result,
};

const RESERVED: &[&str] = &[
    "longitude",
    "latitude",
    "zoom",
    "min_zoom",
    "minZoom",
    "max_zoom",
    "maxZoom",
    "pitch",
    "bearing",
];

/// Camera pose the scene opens with
///
/// The default is fully zoomed out over `0, 0`. To frame a set of points,
/// see [`crate::compute_view`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Degrees from nadir
    pub pitch: f64,
    /// Degrees clockwise from north
    pub bearing: f64,
    attributes: JsonMap,
}

impl ViewState {
    pub fn new(longitude: f64, latitude: f64, zoom: f64) -> Self {
        Self {
            longitude,
            latitude,
            zoom,
            ..Self::default()
        }
    }

    pub fn with_pitch(mut self, pitch: f64) -> Self {
        self.pitch = pitch;
        self
    }

    pub fn with_bearing(mut self, bearing: f64) -> Self {
        self.bearing = bearing;
        self
    }

    /// Set zoom limits
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }

    impl_attribute_bag!(attributes);
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            longitude: 0.0,
            latitude: 0.0,
            zoom: DEFAULT_MIN_ZOOM,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            pitch: 0.0,
            bearing: 0.0,
            attributes: JsonMap::new(),
        }
    }
}

impl JsonNode for ViewState {
    fn to_mapping(&self) -> Result<JsonMap> {
        let mut mapping = JsonMap::new();
        for (key, value) in [
            ("longitude", self.longitude),
            ("latitude", self.latitude),
            ("zoom", self.zoom),
            ("minZoom", self.min_zoom),
            ("maxZoom", self.max_zoom),
            ("pitch", self.pitch),
            ("bearing", self.bearing),
        ] {
            mapping.insert(key.into(), json::to_value(key, &value)?);
        }
        json::extend_external(&mut mapping, &self.attributes, RESERVED);
        Ok(mapping)
    }
}

impl_serialize_via_mapping!(ViewState);

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViewStateFields {
    longitude: Option<f64>,
    latitude: Option<f64>,
    zoom: Option<f64>,
    min_zoom: Option<f64>,
    max_zoom: Option<f64>,
    pitch: Option<f64>,
    bearing: Option<f64>,
    #[serde(flatten)]
    attributes: JsonMap,
}

impl<'de> Deserialize<'de> for ViewState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let fields = ViewStateFields::deserialize(deserializer)?;
        let defaults = ViewState::default();

        Ok(Self {
            longitude: fields.longitude.unwrap_or(defaults.longitude),
            latitude: fields.latitude.unwrap_or(defaults.latitude),
            zoom: fields.zoom.unwrap_or(defaults.zoom),
            min_zoom: fields.min_zoom.unwrap_or(defaults.min_zoom),
            max_zoom: fields.max_zoom.unwrap_or(defaults.max_zoom),
            pitch: fields.pitch.unwrap_or(defaults.pitch),
            bearing: fields.bearing.unwrap_or(defaults.bearing),
            attributes: json::normalize_keys(
                fields
                    .attributes
                    .into_iter()
                    .filter(|(_, value)| !matches!(value, Value::Null))
                    .collect(),
            ),
        })
    }
}

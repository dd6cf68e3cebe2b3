use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

use crate::{
    core::constants::DEFAULT_VIEW_TYPE,
    impl_attribute_bag, impl_serialize_via_mapping,
    json::{self, JsonMap, JsonNode},
    Result,
};

/// A `controller` attribute in the bag (an options object) overrides the flag.
const RESERVED: &[&str] = &["type"];

/// One viewport of the scene.
///
/// A deck normally has a single full-extent `MapView`; several views
/// positioned with `x`/`y`/`width`/`height` attributes give split screens.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    view_type: String,
    controller: bool,
    attributes: JsonMap,
}

impl View {
    pub fn new(view_type: impl Into<String>) -> Self {
        Self {
            view_type: view_type.into(),
            controller: true,
            attributes: JsonMap::new(),
        }
    }

    /// Enable or disable camera interaction
    pub fn with_controller(mut self, controller: bool) -> Self {
        self.controller = controller;
        self
    }

    pub fn view_type(&self) -> &str {
        &self.view_type
    }

    pub fn set_view_type(&mut self, view_type: impl Into<String>) {
        self.view_type = view_type.into();
    }

    pub fn controller(&self) -> bool {
        self.controller
    }

    pub fn set_controller(&mut self, controller: bool) {
        self.controller = controller;
    }

    impl_attribute_bag!(attributes);
}

impl Default for View {
    fn default() -> Self {
        Self::new(DEFAULT_VIEW_TYPE)
    }
}

impl JsonNode for View {
    fn to_mapping(&self) -> Result<JsonMap> {
        let mut mapping = JsonMap::new();
        mapping.insert("type".into(), Value::String(self.view_type.clone()));
        mapping.insert("controller".into(), Value::Bool(self.controller));
        json::extend_external(&mut mapping, &self.attributes, RESERVED);
        Ok(mapping)
    }
}

impl_serialize_via_mapping!(View);

impl<'de> Deserialize<'de> for View {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let mut attributes = JsonMap::deserialize(deserializer)?;

        let view_type = match attributes.shift_remove("type") {
            Some(Value::String(name)) => name,
            Some(_) => return Err(de::Error::custom("view `type` must be a string")),
            None => DEFAULT_VIEW_TYPE.to_string(),
        };
        // controller option objects stay in the bag
        let controller = match attributes.get("controller").and_then(Value::as_bool) {
            Some(enabled) => {
                attributes.shift_remove("controller");
                enabled
            }
            None => true,
        };

        Ok(Self {
            view_type,
            controller,
            attributes: json::normalize_keys(attributes),
        })
    }
}

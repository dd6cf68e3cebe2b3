use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{
    impl_attribute_bag, impl_serialize_via_mapping,
    json::{self, JsonMap, JsonNode},
    layers::base::LayerType,
    Result,
};

/// Keys written from typed fields, never from the attribute bag.
const RESERVED: &[&str] = &["type", "id"];

/// One renderable deck.gl layer.
///
/// Only `type` and `id` are typed. Everything else (`data`, accessors such
/// as `get_position`, styling, `pickable`...) lives in an ordered attribute
/// bag and is passed to the engine as-is; deck.gl validates it, not us.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    layer_type: LayerType,
    id: String,
    attributes: JsonMap,
}

impl Layer {
    /// Creates a layer of `layer_type` drawing `data`, with a random id.
    ///
    /// `data` can be inline records or a URL the engine fetches.
    pub fn new<T: Serialize>(layer_type: impl Into<LayerType>, data: T) -> Result<Self> {
        let mut layer = Self::without_data(layer_type);
        layer.set("data", &data)?;
        Ok(layer)
    }

    /// Creates a layer with no `data` attribute, e.g. for tile layers that
    /// fetch their own content.
    pub fn without_data(layer_type: impl Into<LayerType>) -> Self {
        Self {
            layer_type: layer_type.into(),
            id: uuid::Uuid::new_v4().to_string(),
            attributes: JsonMap::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn layer_type(&self) -> &LayerType {
        &self.layer_type
    }

    pub fn set_layer_type(&mut self, layer_type: impl Into<LayerType>) {
        self.layer_type = layer_type.into();
    }

    pub fn data(&self) -> Option<&Value> {
        self.attributes.get("data")
    }

    impl_attribute_bag!(attributes);
}

impl JsonNode for Layer {
    fn to_mapping(&self) -> Result<JsonMap> {
        let mut mapping = JsonMap::new();
        mapping.insert("type".into(), Value::String(self.layer_type.to_string()));
        mapping.insert("id".into(), Value::String(self.id.clone()));
        json::extend_external(&mut mapping, &self.attributes, RESERVED);
        Ok(mapping)
    }
}

impl_serialize_via_mapping!(Layer);

impl<'de> Deserialize<'de> for Layer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let mut attributes = JsonMap::deserialize(deserializer)?;

        let layer_type = match attributes.shift_remove("type") {
            Some(Value::String(name)) => LayerType::from(name),
            Some(other) => {
                return Err(de::Error::invalid_type(
                    de::Unexpected::Other(&other.to_string()),
                    &"a layer type name",
                ))
            }
            None => return Err(de::Error::missing_field("type")),
        };
        let id = match attributes.shift_remove("id") {
            Some(Value::String(id)) => id,
            _ => uuid::Uuid::new_v4().to_string(),
        };

        Ok(Self {
            layer_type,
            id,
            attributes: json::normalize_keys(attributes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_layer_mapping_order_and_names() {
        let layer = Layer::new(LayerType::Scatterplot, json!([{"lng": 0, "lat": 0}]))
            .unwrap()
            .with_id("points")
            .with("get_position", "[lng, lat]")
            .unwrap()
            .with("get_fill_color", [255, 0, 0])
            .unwrap()
            .with("pickable", true)
            .unwrap();

        let mapping = layer.to_mapping().unwrap();
        let keys: Vec<_> = mapping.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["type", "id", "data", "getPosition", "getFillColor", "pickable"]
        );
        assert_eq!(mapping["type"], "ScatterplotLayer");
        assert_eq!(mapping["getFillColor"], json!([255, 0, 0]));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Layer::without_data("TileLayer");
        let b = Layer::without_data("TileLayer");
        assert_ne!(a.id(), b.id());
        assert!(a.data().is_none());
    }

    #[test]
    fn test_bag_cannot_shadow_typed_fields() {
        let mut layer = Layer::new("HexagonLayer", "https://example.com/data.csv")
            .unwrap()
            .with_id("hex");
        layer.set("id", "other").unwrap().set("type", "Other").unwrap();

        let mapping = layer.to_mapping().unwrap();
        assert_eq!(mapping["id"], "hex");
        assert_eq!(mapping["type"], "HexagonLayer");
        assert_eq!(mapping["data"], "https://example.com/data.csv");
    }

    #[test]
    fn test_null_attributes_are_omitted() {
        let layer = Layer::without_data(LayerType::Text)
            .with("get_text", Option::<String>::None)
            .unwrap();
        assert!(!layer.to_mapping().unwrap().contains_key("getText"));
    }

    #[test]
    fn test_remove_attribute() {
        let mut layer = Layer::without_data(LayerType::Arc)
            .with("get_width", 3)
            .unwrap();
        assert_eq!(layer.remove("get_width"), Some(json!(3)));
        assert!(layer.get("get_width").is_none());
    }

    #[test]
    fn test_deserialize_from_engine_json() {
        let layer: Layer = serde_json::from_value(json!({
            "type": "GeoJsonLayer",
            "id": "shapes",
            "data": "shapes.geojson",
            "getLineColor": [0, 0, 0]
        }))
        .unwrap();

        assert_eq!(layer.layer_type(), &LayerType::GeoJson);
        assert_eq!(layer.id(), "shapes");
        assert_eq!(layer.get("getLineColor"), Some(&json!([0, 0, 0])));

        let missing = serde_json::from_value::<Layer>(json!({"id": "x"}));
        assert!(missing.is_err());
    }

    #[test]
    fn test_one_entry_per_engine_name() {
        let mut layer: Layer = serde_json::from_value(json!({
            "type": "ScatterplotLayer",
            "id": "p",
            "getPosition": "[x, y]",
            "radius_scale": 2
        }))
        .unwrap();
        layer.set("get_position", "[lng, lat]").unwrap();

        assert_eq!(layer.attributes().len(), 2);
        assert_eq!(layer.get("getPosition"), Some(&json!("[lng, lat]")));
        assert_eq!(layer.get("radius_scale"), Some(&json!(2)));

        let mapping = layer.to_mapping().unwrap();
        let keys: Vec<_> = mapping.keys().map(String::as_str).collect();
        assert_eq!(keys, ["type", "id", "getPosition", "radiusScale"]);
    }

    #[test]
    fn test_non_finite_attribute_is_rejected() {
        let err = Layer::without_data(LayerType::Scatterplot)
            .with("radius_scale", f64::NAN)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Serialization { ref attribute, .. } if attribute == "radius_scale"
        ));

        let mut layer = Layer::without_data(LayerType::Scatterplot).with_id("p");
        assert!(layer.set("radius_scale", &f64::INFINITY).is_err());
        assert!(layer.get("radius_scale").is_none());
    }
}

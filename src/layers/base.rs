use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// deck.gl layer classes, with an escape hatch for anything else the engine
/// (or a custom bundle) registers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LayerType {
    Arc,
    Bitmap,
    Column,
    GeoJson,
    Grid,
    H3Hexagon,
    Heatmap,
    Hexagon,
    Icon,
    Line,
    Path,
    Polygon,
    Scatterplot,
    ScreenGrid,
    Text,
    Tile,
    Trips,
    Custom(String),
}

impl LayerType {
    const KNOWN: [LayerType; 17] = [
        LayerType::Arc,
        LayerType::Bitmap,
        LayerType::Column,
        LayerType::GeoJson,
        LayerType::Grid,
        LayerType::H3Hexagon,
        LayerType::Heatmap,
        LayerType::Hexagon,
        LayerType::Icon,
        LayerType::Line,
        LayerType::Path,
        LayerType::Polygon,
        LayerType::Scatterplot,
        LayerType::ScreenGrid,
        LayerType::Text,
        LayerType::Tile,
        LayerType::Trips,
    ];

    /// The class name the engine's JSON converter looks up.
    pub fn as_str(&self) -> &str {
        match self {
            LayerType::Arc => "ArcLayer",
            LayerType::Bitmap => "BitmapLayer",
            LayerType::Column => "ColumnLayer",
            LayerType::GeoJson => "GeoJsonLayer",
            LayerType::Grid => "GridLayer",
            LayerType::H3Hexagon => "H3HexagonLayer",
            LayerType::Heatmap => "HeatmapLayer",
            LayerType::Hexagon => "HexagonLayer",
            LayerType::Icon => "IconLayer",
            LayerType::Line => "LineLayer",
            LayerType::Path => "PathLayer",
            LayerType::Polygon => "PolygonLayer",
            LayerType::Scatterplot => "ScatterplotLayer",
            LayerType::ScreenGrid => "ScreenGridLayer",
            LayerType::Text => "TextLayer",
            LayerType::Tile => "TileLayer",
            LayerType::Trips => "TripsLayer",
            LayerType::Custom(name) => name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, LayerType::Custom(_))
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayerType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for LayerType {
    fn from(name: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|known| known.as_str() == name)
            .cloned()
            .unwrap_or_else(|| LayerType::Custom(name.to_string()))
    }
}

impl From<String> for LayerType {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl Serialize for LayerType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LayerType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(LayerType::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_type_names() {
        assert_eq!(LayerType::Scatterplot.to_string(), "ScatterplotLayer");
        assert_eq!(LayerType::from("HexagonLayer"), LayerType::Hexagon);
        assert_eq!(
            LayerType::from("MyCustomLayer"),
            LayerType::Custom("MyCustomLayer".to_string())
        );
        assert!(LayerType::from("MyCustomLayer").is_custom());
    }

    #[test]
    fn test_known_names_round_trip() {
        for known in LayerType::KNOWN.iter() {
            assert_eq!(&LayerType::from(known.as_str()), known);
        }
    }
}

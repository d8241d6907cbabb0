use serde::Deserialize;

/// GeoJSON feature collection as produced by KML to GeoJSON converters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feed {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<Properties>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Properties {
    pub name: Option<String>,
    #[serde(rename = "coordTimes")]
    pub coord_times: Option<Vec<String>>,
    #[serde(rename = "coordinateProperties")]
    pub coordinate_properties: Option<CoordinateProperties>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoordinateProperties {
    pub times: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: serde_json::Value,
}

impl Feature {
    pub fn name(&self) -> Option<&str> {
        self.properties.as_ref()?.name.as_deref()
    }

    /// Per-coordinate timestamps, newer converters first.
    pub fn times(&self) -> Option<&[String]> {
        let properties = self.properties.as_ref()?;
        properties
            .coordinate_properties
            .as_ref()
            .and_then(|c| c.times.as_deref())
            .or(properties.coord_times.as_deref())
    }
}

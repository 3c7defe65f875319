use geo::Coord;
use serde::{Deserialize, Serialize};

use super::DistrictId;

/// A district as known to the static registry.
/// Coordinates are the marker position (lon, lat), not a boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoDistrict {
    pub id: DistrictId,
    pub name: String,
    pub state: String,
    pub state_code: String,
    #[serde(with = "lon_lat")]
    pub coordinates: Coord<f64>,
}

impl GeoDistrict {
    pub fn new(id: &str, name: &str, state: &str, state_code: &str, lon: f64, lat: f64) -> Self {
        Self {
            id: DistrictId::from(id),
            name: name.to_string(),
            state: state.to_string(),
            state_code: state_code.to_string(),
            coordinates: Coord { x: lon, y: lat },
        }
    }
}

/// A state or union territory, used for labelling and state-level lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateInfo {
    pub code: String,
    pub name: String,
    #[serde(with = "lon_lat")]
    pub coordinates: Coord<f64>,
    pub total_districts: u32,
}

/// Serialize a `Coord` as a `[lon, lat]` pair.
pub(crate) mod lon_lat {
    use geo::Coord;
    use serde::{Deserialize, Deserializer, Serializer, ser::SerializeTuple};

    pub(crate) fn serialize<S: Serializer>(coord: &Coord<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&coord.x)?;
        tuple.serialize_element(&coord.y)?;
        tuple.end()
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Coord<f64>, D::Error> {
        let (x, y) = <(f64, f64)>::deserialize(deserializer)?;
        Ok(Coord { x, y })
    }
}

use std::{fmt, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Stable key for a district in the static registry, e.g. "DL-SOUTH".
/// Cheap to clone; the text is shared rather than re-allocated per copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DistrictId(Arc<str>);

impl DistrictId {
    pub fn new(id: impl Into<Arc<str>>) -> Self { Self(id.into()) }

    #[inline] pub fn as_str(&self) -> &str { &self.0 }

    /// The state code prefix of the id ("DL" for "DL-SOUTH").
    /// If the id has no separator, the full id is returned.
    pub fn state_prefix(&self) -> &str {
        self.0.split_once('-').map_or(self.as_str(), |(prefix, _)| prefix)
    }
}

impl fmt::Display for DistrictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(&self.0) }
}

impl From<&str> for DistrictId {
    fn from(id: &str) -> Self { Self(Arc::from(id)) }
}

impl From<String> for DistrictId {
    fn from(id: String) -> Self { Self(Arc::from(id)) }
}

impl Serialize for DistrictId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DistrictId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(DistrictId::from)
    }
}

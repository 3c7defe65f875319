use std::collections::HashMap;

use anyhow::{ensure, Result};
use geo::Coord;

use super::{data, DistrictId, GeoDistrict, StateInfo};

/// Immutable district registry: identity, state and marker coordinates.
/// Iteration order is the registration order and is preserved by every merge.
#[derive(Debug, Clone)]
pub struct GeoRegistry {
    index: HashMap<DistrictId, u32>, // Map between district ids and contiguous indices.
    districts: Vec<GeoDistrict>,
    states: Vec<StateInfo>,
}

impl GeoRegistry {
    /// Build a registry from an explicit district list. District ids must be unique.
    pub fn new(districts: Vec<GeoDistrict>, states: Vec<StateInfo>) -> Result<Self> {
        let mut index = HashMap::with_capacity(districts.len());
        for (i, district) in districts.iter().enumerate() {
            let previous = index.insert(district.id.clone(), i as u32);
            ensure!(previous.is_none(), "[registry] duplicate district id '{}'", district.id);
        }

        Ok(Self { index, districts, states })
    }

    /// The built-in registry of Indian districts and states.
    pub fn india() -> Self {
        let districts = data::DISTRICTS.iter()
            .map(|&(id, name, state, code, lon, lat)| GeoDistrict::new(id, name, state, code, lon, lat))
            .collect::<Vec<_>>();

        let states = data::STATES.iter()
            .map(|&(code, name, lon, lat, total_districts)| StateInfo {
                code: code.to_string(),
                name: name.to_string(),
                coordinates: Coord { x: lon, y: lat },
                total_districts,
            })
            .collect::<Vec<_>>();

        let index = districts.iter().enumerate()
            .map(|(i, district)| (district.id.clone(), i as u32))
            .collect();

        Self { index, districts, states }
    }

    #[inline] pub fn districts(&self) -> &[GeoDistrict] { &self.districts }

    #[inline] pub fn states(&self) -> &[StateInfo] { &self.states }

    #[inline] pub fn len(&self) -> usize { self.districts.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.districts.is_empty() }

    pub fn get(&self, id: &DistrictId) -> Option<&GeoDistrict> {
        self.index.get(id).map(|&i| &self.districts[i as usize])
    }

    #[inline] pub fn contains(&self, id: &DistrictId) -> bool { self.index.contains_key(id) }

    /// Look up a state by its two-letter code (case-insensitive).
    pub fn state(&self, code: &str) -> Option<&StateInfo> {
        self.states.iter().find(|state| state.code.eq_ignore_ascii_case(code))
    }

    /// All districts registered under the given state code.
    pub fn districts_in_state<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a GeoDistrict> + 'a {
        self.districts.iter().filter(move |district| district.state_code.eq_ignore_ascii_case(code))
    }
}

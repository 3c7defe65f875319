//! District list shown next to the map.

use std::{fmt, str::FromStr};

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::{
    merge::MergedDistrict,
    metrics::RiskLevel,
    registry::DistrictId,
};

/// Risk dropdown of the sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RiskFilter {
    #[default]
    All,
    Level(RiskLevel),
}

impl RiskFilter {
    #[inline]
    pub fn accepts(&self, level: RiskLevel) -> bool {
        match self {
            RiskFilter::All => true,
            RiskFilter::Level(wanted) => *wanted == level,
        }
    }
}

impl FromStr for RiskFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") { return Ok(RiskFilter::All) }
        RiskLevel::parse_label(s)
            .map(RiskFilter::Level)
            .ok_or_else(|| anyhow!("[sidebar] unknown risk filter '{s}'"))
    }
}

impl fmt::Display for RiskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskFilter::All => f.write_str("all"),
            RiskFilter::Level(level) => f.write_str(level.as_str()),
        }
    }
}

/// Search text plus risk filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarFilter {
    pub query: String,
    pub risk: RiskFilter,
}

impl SidebarFilter {
    pub fn new(query: impl Into<String>, risk: RiskFilter) -> Self {
        Self { query: query.into(), risk }
    }

    /// Case-insensitive substring match on name or state, and risk filter.
    pub fn matches(&self, district: &MergedDistrict) -> bool {
        if !self.risk.accepts(district.risk_level) { return false }

        let query = self.query.trim().to_lowercase();
        query.is_empty()
            || district.name.to_lowercase().contains(&query)
            || district.state.to_lowercase().contains(&query)
    }

    /// Matching districts, in input order.
    pub fn filter<'a>(&self, districts: &'a [MergedDistrict]) -> Vec<&'a MergedDistrict> {
        districts.iter().filter(|district| self.matches(district)).collect()
    }

    /// Sidebar rows for the matching districts, with the selection highlighted.
    pub fn entries(&self, districts: &[MergedDistrict], selected: Option<&DistrictId>) -> Vec<SidebarEntry> {
        self.filter(districts).into_iter()
            .map(|district| SidebarEntry::new(district, selected == Some(&district.id)))
            .collect()
    }
}

/// One sidebar row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarEntry {
    pub id: DistrictId,
    pub name: String,
    pub state: String,
    pub risk_level: RiskLevel,
    pub saturation_ratio: f64,
    pub highlighted: bool,
}

impl SidebarEntry {
    fn new(district: &MergedDistrict, highlighted: bool) -> Self {
        Self {
            id: district.id.clone(),
            name: district.name.clone(),
            state: district.state.clone(),
            risk_level: district.risk_level,
            saturation_ratio: district.metrics.saturation_ratio,
            highlighted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        merge::{merge_districts, MergeOptions},
        metrics::MetricRecord,
        registry::GeoDistrict,
    };

    fn districts() -> Vec<MergedDistrict> {
        let registry = vec![
            GeoDistrict::new("DL-SOUTH", "South Delhi", "Delhi", "DL", 77.2090, 28.5355),
            GeoDistrict::new("DL-NORTH", "North Delhi", "Delhi", "DL", 77.2167, 28.6667),
            GeoDistrict::new("MH-MUMBAI", "Mumbai", "Maharashtra", "MH", 72.8777, 19.0760),
        ];
        let records = vec![
            MetricRecord::new("South Delhi", "Delhi", 92.3, "High"),
            MetricRecord::new("Mumbai", "Maharashtra", 97.1, "Low"),
        ];
        merge_districts(&registry, &records, &MergeOptions::default())
    }

    #[test]
    fn parses_risk_filter() {
        assert_eq!("all".parse::<RiskFilter>().unwrap(), RiskFilter::All);
        assert_eq!("Priority".parse::<RiskFilter>().unwrap(), RiskFilter::Level(RiskLevel::Critical));
        assert_eq!(RiskFilter::Level(RiskLevel::High).to_string(), "high");
        assert!("severe".parse::<RiskFilter>().is_err());
    }

    #[test]
    fn query_matches_name_or_state() {
        let districts = districts();
        let by_state = SidebarFilter::new("delhi", RiskFilter::All).filter(&districts);
        assert_eq!(by_state.len(), 2);

        let by_name = SidebarFilter::new(" MUM ", RiskFilter::All).filter(&districts);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, DistrictId::from("MH-MUMBAI"));

        assert_eq!(SidebarFilter::default().filter(&districts).len(), 3);
    }

    #[test]
    fn risk_filter_uses_merged_level() {
        let districts = districts();
        // North Delhi has no metrics and therefore counts as low.
        let low = SidebarFilter::new("", RiskFilter::Level(RiskLevel::Low)).filter(&districts);
        let ids = low.iter().map(|d| d.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, ["DL-NORTH", "MH-MUMBAI"]);

        let high = SidebarFilter::new("delhi", RiskFilter::Level(RiskLevel::High)).filter(&districts);
        assert_eq!(high.len(), 1);
    }

    #[test]
    fn selected_entry_is_highlighted() {
        let districts = districts();
        let selected = DistrictId::from("DL-SOUTH");
        let entries = SidebarFilter::default().entries(&districts, Some(&selected));
        let highlighted = entries.iter().filter(|entry| entry.highlighted).collect::<Vec<_>>();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].id, selected);
        assert_eq!(highlighted[0].saturation_ratio, 92.3);

        // Filtered-out selection highlights nothing.
        let entries = SidebarFilter::new("mumbai", RiskFilter::All).entries(&districts, Some(&selected));
        assert!(entries.iter().all(|entry| !entry.highlighted));
    }
}

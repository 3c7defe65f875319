//! Join of the static registry with fetched per-district metrics.
//!
//! The merge is a pure function: one output per registry district, in registry
//! order. Metrics only ever enrich districts; they never add or remove them.

use ahash::AHashMap;
use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::{
    metrics::{MetricRecord, RiskLevel},
    registry::{lon_lat, DistrictId, GeoDistrict},
};

/// Unmatched districts reported individually per merge pass.
const MAX_REPORTED_UNMATCHED: usize = 5;

/// Normalized metrics block rendered for a district. All zero when unmatched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictMetrics {
    /// 0-100
    pub saturation_ratio: f64,
    /// 0-100, the backend's fractional UII times the configured scale.
    pub update_intensity: f64,
    pub temporal_deviation: f64,
    pub equity_gap: f64,
    pub child_biometric_compliance: f64,
}

/// Per-district view-model: registry identity and geometry plus metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedDistrict {
    pub id: DistrictId,
    pub name: String,
    pub state: String,
    pub state_code: String,
    #[serde(with = "lon_lat")]
    pub coordinates: Coord<f64>,
    pub metrics: DistrictMetrics,
    pub risk_level: RiskLevel,
    /// Whether a backend record matched this district.
    pub has_metrics: bool,
}

impl MergedDistrict {
    /// Safe default for a district the backend did not report.
    pub fn unmatched(geo: &GeoDistrict) -> Self {
        Self {
            id: geo.id.clone(),
            name: geo.name.clone(),
            state: geo.state.clone(),
            state_code: geo.state_code.clone(),
            coordinates: geo.coordinates,
            metrics: DistrictMetrics::default(),
            risk_level: RiskLevel::Low,
            has_metrics: false,
        }
    }

    /// Registry keeps identity and coordinates; the backend is authoritative for
    /// the displayed state name and all metrics.
    pub fn matched(geo: &GeoDistrict, record: &MetricRecord, options: &MergeOptions) -> Self {
        Self {
            id: geo.id.clone(),
            name: geo.name.clone(),
            state: record.state.clone(),
            state_code: geo.state_code.clone(),
            coordinates: geo.coordinates,
            metrics: DistrictMetrics {
                saturation_ratio: record.asr,
                update_intensity: record.uii.map_or(0.0, |uii| uii * options.update_intensity_scale),
                temporal_deviation: record.tds.unwrap_or(0.0),
                equity_gap: record.aepg.unwrap_or(0.0),
                child_biometric_compliance: record.cbcg.unwrap_or(0.0),
            },
            risk_level: RiskLevel::from_label(&record.risk_level),
            has_metrics: true,
        }
    }
}

/// Tunables for the merge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeOptions {
    /// Factor turning the backend's UII into a percentage.
    pub update_intensity_scale: f64,
}

impl Default for MergeOptions {
    fn default() -> Self { Self { update_intensity_scale: 100.0 } }
}

/// Matching key: trimmed and lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Merge registry districts with backend records by normalized name.
///
/// The output has the same length and order as `registry`. When several records
/// normalize to the same name, the first one wins.
pub fn merge_districts(registry: &[GeoDistrict], records: &[MetricRecord], options: &MergeOptions) -> Vec<MergedDistrict> {
    let mut lookup: AHashMap<String, &MetricRecord> = AHashMap::with_capacity(records.len());
    for record in records {
        lookup.entry(normalize_name(&record.district)).or_insert(record);
    }

    let mut unmatched = 0usize;
    let merged = registry.iter()
        .map(|geo| match lookup.get(&normalize_name(&geo.name)) {
            Some(record) => MergedDistrict::matched(geo, record, options),
            None => {
                if unmatched < MAX_REPORTED_UNMATCHED {
                    tracing::warn!("[merge] '{}' has no backend metrics, using defaults", normalize_name(&geo.name));
                }
                unmatched += 1;
                MergedDistrict::unmatched(geo)
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        "[merge] {} districts, {} matched, {} unmatched, {} backend records",
        merged.len(),
        merged.len() - unmatched,
        unmatched,
        records.len(),
    );

    merged
}

use serde::{Deserialize, Serialize};

/// National KPI block from `GET /national/summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalSummary {
    pub total_enrolments: u64,
    pub average_saturation: f64,
    pub national_risk_index: f64,
    pub high_risk_districts: u64,
}

/// Per-district metrics as returned by `/map` and `/risk/top`.
/// `district` is free text and is matched against the registry by normalized name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub district: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub risk_score: f64,
    #[serde(default)]
    pub risk_level: String,
    /// Saturation percentage, 0-100.
    #[serde(default)]
    pub asr: f64,
    /// Update intensity, fractional 0-1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uii: Option<f64>,
    /// Signed temporal deviation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aepg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cbcg: Option<f64>,
}

impl MetricRecord {
    /// A record with only the name, state and saturation set.
    pub fn new(district: &str, state: &str, asr: f64, risk_level: &str) -> Self {
        Self {
            district: district.to_string(),
            state: state.to_string(),
            risk_score: 0.0,
            risk_level: risk_level.to_string(),
            asr,
            uii: None,
            tds: None,
            aepg: None,
            cbcg: None,
        }
    }
}

/// One month of a district's history from `/district/{name}/trends`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    #[serde(default)]
    pub uii: Option<f64>,
    #[serde(default)]
    pub asr: f64,
    #[serde(default)]
    pub risk_score: f64,
}

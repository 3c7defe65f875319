use std::collections::HashMap;

use anyhow::{anyhow, Result};
use serde_json::Value;

use super::{MetricRecord, NationalSummary, TrendPoint};

/// Read-only access to the metrics backend.
/// Implementations do no caching or retrying; callers decide how to degrade.
pub trait MetricsSource {
    /// `GET /national/summary`
    fn national_summary(&self) -> Result<NationalSummary>;

    /// `GET /map?month=<month>`; all months when `month` is `None`.
    fn map_metrics(&self, month: Option<&str>) -> Result<Vec<MetricRecord>>;

    /// `GET /risk/top?limit=<limit>`, ordered by descending risk score.
    fn top_risk(&self, limit: usize) -> Result<Vec<MetricRecord>>;

    /// `GET /district/{district}`; the backend keys districts by name.
    fn district_details(&self, district: &str) -> Result<Value>;

    /// `GET /district/{district}/trends`, ordered by month.
    fn district_trends(&self, district: &str) -> Result<Vec<TrendPoint>>;
}

/// Simple in-memory source.
/// Missing entries behave like a backend error, which makes it usable for failure paths too.
#[derive(Debug, Default, Clone)]
pub struct MemSource {
    pub summary: Option<NationalSummary>,
    pub records: Vec<MetricRecord>,
    pub records_by_month: HashMap<String, Vec<MetricRecord>>,
    pub details: HashMap<String, Value>,
    pub trends: HashMap<String, Vec<TrendPoint>>,
}

impl MemSource {
    pub fn new(summary: NationalSummary, records: Vec<MetricRecord>) -> Self {
        Self { summary: Some(summary), records, ..Default::default() }
    }
}

impl MetricsSource for MemSource {
    fn national_summary(&self) -> Result<NationalSummary> {
        self.summary.clone()
            .ok_or_else(|| anyhow!("[metrics] national summary unavailable"))
    }

    fn map_metrics(&self, month: Option<&str>) -> Result<Vec<MetricRecord>> {
        match month {
            None => Ok(self.records.clone()),
            Some(month) => self.records_by_month.get(month).cloned()
                .ok_or_else(|| anyhow!("[metrics] no map metrics for month {month}")),
        }
    }

    fn top_risk(&self, limit: usize) -> Result<Vec<MetricRecord>> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| b.risk_score.total_cmp(&a.risk_score));
        records.truncate(limit);
        Ok(records)
    }

    fn district_details(&self, district: &str) -> Result<Value> {
        self.details.get(district).cloned()
            .ok_or_else(|| anyhow!("[metrics] district not found: {district}"))
    }

    fn district_trends(&self, district: &str) -> Result<Vec<TrendPoint>> {
        Ok(self.trends.get(district).cloned().unwrap_or_default())
    }
}

impl<S: MetricsSource + ?Sized> MetricsSource for &S {
    fn national_summary(&self) -> Result<NationalSummary> { (**self).national_summary() }

    fn map_metrics(&self, month: Option<&str>) -> Result<Vec<MetricRecord>> { (**self).map_metrics(month) }

    fn top_risk(&self, limit: usize) -> Result<Vec<MetricRecord>> { (**self).top_risk(limit) }

    fn district_details(&self, district: &str) -> Result<Value> { (**self).district_details(district) }

    fn district_trends(&self, district: &str) -> Result<Vec<TrendPoint>> { (**self).district_trends(district) }
}

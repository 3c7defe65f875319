use std::time::Duration;

use anyhow::{anyhow, ensure, Context, Result};
use reqwest::{blocking::Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{MetricRecord, MetricsSource, NationalSummary, TrendPoint};

/// Blocking HTTP client for the metrics backend, e.g. `http://localhost:8005/api`.
pub struct HttpSource {
    client: Client,
    base: Url,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base_url)
            .with_context(|| format!("[metrics] invalid api base url: {base_url}"))?;
        ensure!(!base.cannot_be_a_base(), "[metrics] api base url cannot carry a path: {base_url}");

        let client = Client::builder()
            .user_agent(concat!("aari/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("[metrics] failed to build http client")?;

        Ok(Self { client, base })
    }

    #[inline] pub fn base_url(&self) -> &str { self.base.as_str() }

    /// Append path segments to the base url. Segments are percent-encoded,
    /// so district names with spaces are safe.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url.path_segments_mut()
                .map_err(|_| anyhow!("[metrics] api base url cannot carry a path: {}", self.base))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, segments: &[&str], query: &[(&str, String)]) -> Result<T> {
        let url = self.endpoint(segments)?;
        tracing::debug!("[metrics] GET {url} {query:?}");

        self.client.get(url.clone())
            .query(query)
            .send()
            .with_context(|| format!("[metrics] GET {url}"))?
            .error_for_status()
            .with_context(|| format!("[metrics] GET {url} returned error status"))?
            .json::<T>()
            .with_context(|| format!("[metrics] GET {url} returned a malformed body"))
    }
}

impl MetricsSource for HttpSource {
    fn national_summary(&self) -> Result<NationalSummary> {
        self.get_json(&["national", "summary"], &[])
    }

    fn map_metrics(&self, month: Option<&str>) -> Result<Vec<MetricRecord>> {
        let query = month.map(|month| vec![("month", month.to_string())]).unwrap_or_default();
        self.get_json(&["map"], &query)
    }

    fn top_risk(&self, limit: usize) -> Result<Vec<MetricRecord>> {
        self.get_json(&["risk", "top"], &[("limit", limit.to_string())])
    }

    fn district_details(&self, district: &str) -> Result<Value> {
        self.get_json(&["district", district], &[])
    }

    fn district_trends(&self, district: &str) -> Result<Vec<TrendPoint>> {
        self.get_json(&["district", district, "trends"], &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base: &str) -> HttpSource {
        HttpSource::new(base, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn endpoints_append_to_base_path() {
        let url = source("http://localhost:8005/api").endpoint(&["national", "summary"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8005/api/national/summary");

        let url = source("http://localhost:8005/api/").endpoint(&["map"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8005/api/map");
    }

    #[test]
    fn district_names_are_percent_encoded() {
        let url = source("http://localhost:8005/api").endpoint(&["district", "South Delhi", "trends"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8005/api/district/South%20Delhi/trends");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(HttpSource::new("not a url", Duration::from_secs(1)).is_err());
        assert!(HttpSource::new("mailto:someone@example.com", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn unreachable_backend_is_an_error() {
        // Port 9 (discard) is closed on loopback in test environments.
        let source = source("http://127.0.0.1:9/api");
        assert!(source.national_summary().is_err());
    }
}

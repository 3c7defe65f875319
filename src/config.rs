use std::{path::Path, time::Duration};

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    merge::MergeOptions,
    render::{Camera, RenderOptions, Viewport},
};

/// Dashboard settings. Every field has a default, so a config file only
/// needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the metrics backend, e.g. `http://localhost:8005/api`.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Default `limit` for the top-risk list.
    pub top_risk_limit: usize,
    /// Factor turning the backend's fractional UII into a percentage.
    pub update_intensity_scale: f64,
    /// Initial camera centre as `[lon, lat]`.
    pub initial_center: [f64; 2],
    pub initial_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub fly_to_zoom: f64,
    pub fly_to_duration_ms: u64,
    pub popup_offset_px: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8005/api".to_string(),
            request_timeout_secs: 10,
            top_risk_limit: 10,
            update_intensity_scale: 100.0,
            initial_center: [82.8, 22.5],
            initial_zoom: 4.2,
            min_zoom: 3.0,
            max_zoom: 10.0,
            fly_to_zoom: 6.5,
            fly_to_duration_ms: 1000,
            popup_offset_px: 24.0,
            viewport_width: 1200.0,
            viewport_height: 800.0,
        }
    }
}

impl DashboardConfig {
    /// Read a JSON config file and validate it.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("[config] Failed to read {}", path.display()))?;
        let config: DashboardConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("[config] Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.api_base_url.trim().is_empty(), "[config] api_base_url must not be empty");
        ensure!(self.request_timeout_secs > 0, "[config] request_timeout_secs must be positive");
        ensure!(self.top_risk_limit > 0, "[config] top_risk_limit must be positive");
        ensure!(self.update_intensity_scale.is_finite() && self.update_intensity_scale > 0.0,
            "[config] update_intensity_scale must be positive, got {}", self.update_intensity_scale);
        ensure!(self.viewport_width > 0.0 && self.viewport_height > 0.0,
            "[config] viewport must have a positive size, got {}x{}", self.viewport_width, self.viewport_height);
        ensure!(self.min_zoom <= self.max_zoom,
            "[config] min_zoom ({}) exceeds max_zoom ({})", self.min_zoom, self.max_zoom);
        ensure!(self.popup_offset_px >= 0.0, "[config] popup_offset_px must not be negative");
        Ok(())
    }

    #[inline]
    pub fn request_timeout(&self) -> Duration { Duration::from_secs(self.request_timeout_secs) }

    pub fn initial_camera(&self) -> Camera {
        let [lon, lat] = self.initial_center;
        Camera::new(lon, lat, self.initial_zoom)
    }

    pub fn viewport(&self) -> Result<Viewport> {
        Viewport::new(self.viewport_width, self.viewport_height, self.initial_camera(), self.min_zoom, self.max_zoom)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            fly_to_zoom: self.fly_to_zoom,
            fly_to_duration_ms: self.fly_to_duration_ms,
            popup_offset_px: self.popup_offset_px,
        }
    }

    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions { update_intensity_scale: self.update_intensity_scale }
    }
}

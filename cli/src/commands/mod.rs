pub mod district;
pub mod map;
pub mod registry;
pub mod render;
pub mod summary;
pub mod top_risk;

use anyhow::Result;
use aari::{DashboardConfig, HttpSource};

use crate::cli::Cli;

/// Config file (or defaults) with the `--api-url` override applied.
pub fn load_config(cli: &Cli) -> Result<DashboardConfig> {
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_json_file(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(url) = &cli.api_url {
        config.api_base_url = url.clone();
    }
    config.validate()?;
    Ok(config)
}

pub fn http_source(config: &DashboardConfig) -> Result<HttpSource> {
    tracing::debug!("[cli] using backend at {}", config.api_base_url);
    HttpSource::new(&config.api_base_url, config.request_timeout())
}

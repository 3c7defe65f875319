use anyhow::{bail, Result};
use aari::{GeoRegistry, Overview, RiskFilter, SidebarFilter};

use super::{http_source, load_config};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::MapArgs) -> Result<()> {
    let config = load_config(cli)?;
    let risk = args.risk.parse::<RiskFilter>()?;

    let mut overview = Overview::new(http_source(&config)?, GeoRegistry::india(), config)?;
    if !overview.refresh(args.month.as_deref()) {
        bail!("[map] failed to fetch map metrics from {}", overview.config().api_base_url);
    }
    overview.set_filter(SidebarFilter::new(args.query.clone().unwrap_or_default(), risk));

    let shown = overview.filter().filter(overview.districts());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    let matched = overview.districts().iter().filter(|d| d.has_metrics).count();
    if cli.verbose > 0 { eprintln!("[map] {matched}/{} districts matched backend metrics", overview.districts().len()); }

    for district in shown {
        println!("{:<16} {:<28} {:<24} {:>6.1}% {:>6.1} {}",
            district.id,
            district.name,
            district.state,
            district.metrics.saturation_ratio,
            district.metrics.update_intensity,
            if district.has_metrics { district.risk_level.label() } else { "-" },
        );
    }

    Ok(())
}

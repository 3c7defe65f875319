use anyhow::Result;
use aari::{DistrictId, GeoRegistry, Overview};

use super::{http_source, load_config};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::DistrictArgs) -> Result<()> {
    let config = load_config(cli)?;
    let overview = Overview::new(http_source(&config)?, GeoRegistry::india(), config)?;
    let id = DistrictId::from(args.id.to_ascii_uppercase());

    if !args.trends {
        println!("{}", serde_json::to_string_pretty(&overview.district_details(&id)?)?);
        return Ok(());
    }

    let trends = overview.district_trends(&id)?;
    if cli.verbose > 0 { eprintln!("[district] {} months for {id}", trends.len()); }

    for point in trends {
        let uii = point.uii.map_or_else(|| "-".to_string(), |uii| format!("{uii:.3}"));
        println!("{:<8} {:>6.1}% {:>7} {:>7.2}", point.month, point.asr, uii, point.risk_score);
    }

    Ok(())
}

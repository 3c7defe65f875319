use anyhow::Result;
use aari::{GeoRegistry, Overview, RiskLevel};

use super::{http_source, load_config};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::TopRiskArgs) -> Result<()> {
    let config = load_config(cli)?;
    let overview = Overview::new(http_source(&config)?, GeoRegistry::india(), config)?;

    let records = overview.top_risk(args.limit)?;
    if cli.verbose > 0 { eprintln!("[top-risk] {} districts", records.len()); }

    for (rank, record) in records.iter().enumerate() {
        println!("{:>3}. {:<28} {:<24} {:>7.2} {:>6.1}% {}",
            rank + 1,
            record.district,
            record.state,
            record.risk_score,
            record.asr,
            RiskLevel::from_label(&record.risk_level).label(),
        );
    }

    Ok(())
}

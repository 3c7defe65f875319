use anyhow::Result;
use aari::{kpi_cards, MetricsSource};

use super::{http_source, load_config};

pub fn run(cli: &crate::cli::Cli) -> Result<()> {
    let config = load_config(cli)?;
    let summary = http_source(&config)?.national_summary()?;

    for kpi in kpi_cards(Some(&summary)) {
        println!("{:<18} {}", kpi.label, kpi.value);
    }

    Ok(())
}

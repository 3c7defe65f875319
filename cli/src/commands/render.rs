use anyhow::{bail, Result};
use aari::{DistrictId, GeoRegistry, MapEvent, MemSource, MetricsSource, Overview};

use super::{http_source, load_config};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::RenderArgs) -> Result<()> {
    let config = load_config(cli)?;
    let out_path = &args.output.clone().unwrap_or("./map.svg".into());

    if args.offline {
        render(cli, args, Overview::new(MemSource::default(), GeoRegistry::india(), config)?, out_path)
    } else {
        let source = http_source(&config)?;
        render(cli, args, Overview::new(source, GeoRegistry::india(), config)?, out_path)
    }
}

fn render<S: MetricsSource>(
    cli: &crate::cli::Cli,
    args: &crate::cli::RenderArgs,
    mut overview: Overview<S>,
    out_path: &std::path::Path,
) -> Result<()> {
    if !args.offline && !overview.refresh(args.month.as_deref()) {
        tracing::warn!("[render] rendering registry defaults, backend unavailable");
    }

    overview.handle_map_event(MapEvent::Loaded);
    if let Some(id) = &args.select {
        let id = DistrictId::from(id.as_str());
        if !overview.registry().contains(&id) {
            bail!("[render] unknown district id '{id}'");
        }
        overview.select_district(&id);
        overview.renderer_mut().settle();
    }

    if cli.verbose > 0 { eprintln!("[render] writing {}", out_path.display()); }
    overview.renderer().to_svg(out_path)?;

    Ok(())
}

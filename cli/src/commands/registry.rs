use anyhow::{bail, Result};
use aari::GeoRegistry;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::RegistryArgs) -> Result<()> {
    let registry = GeoRegistry::india();

    let districts = match &args.state {
        Some(code) => {
            let Some(state) = registry.state(code) else { bail!("[registry] unknown state code '{code}'") };
            println!("{} ({}), {} districts in total", state.name, state.code, state.total_districts);
            registry.districts_in_state(code).collect::<Vec<_>>()
        }
        None => registry.districts().iter().collect(),
    };

    for district in districts {
        println!("{:<16} {:<28} {:<24} {:>9.4} {:>9.4}",
            district.id, district.name, district.state, district.coordinates.x, district.coordinates.y);
    }

    Ok(())
}

use std::path::PathBuf;

/// AARI dashboard CLI
#[derive(clap::Parser, Debug)]
#[command(name = "aari", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON config file
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overrides the config file
    #[arg(long, global = true, value_hint = clap::ValueHint::Url)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List the built-in district registry
    Registry(RegistryArgs),

    /// Print the national KPIs
    Summary,

    /// Fetch map metrics and print them merged with the registry
    Map(MapArgs),

    /// Print the highest-risk districts
    TopRisk(TopRiskArgs),

    /// Render the marker map to an SVG file
    Render(RenderArgs),

    /// Print the backend's detail document or monthly trends for a district
    District(DistrictArgs),
}

#[derive(clap::Args, Debug)]
pub struct RegistryArgs {
    /// Only districts of this state code, e.g. MH
    #[arg(short, long)]
    pub state: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct MapArgs {
    /// Month to fetch, e.g. 2025-03; all months when omitted
    #[arg(short, long)]
    pub month: Option<String>,

    /// Sidebar search text (name or state)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Risk filter: all, low, medium, high or critical
    #[arg(short, long, default_value = "all")]
    pub risk: String,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct TopRiskArgs {
    /// Number of districts, defaults to the config's top_risk_limit
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Output SVG file, defaults to "./map.svg"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// District id to select, e.g. DL-SOUTH
    #[arg(short, long)]
    pub select: Option<String>,

    /// Month to fetch; all months when omitted
    #[arg(short, long)]
    pub month: Option<String>,

    /// Skip the backend and render registry defaults
    #[arg(long)]
    pub offline: bool,
}

#[derive(clap::Args, Debug)]
pub struct DistrictArgs {
    /// District id, e.g. DL-SOUTH
    pub id: String,

    /// Print the monthly trend table instead of the detail document
    #[arg(short, long)]
    pub trends: bool,
}

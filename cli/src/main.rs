mod cli;
mod commands;

use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// -v count to a default filter; RUST_LOG still wins when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("aari={level},aari_cli={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Registry(args) => commands::registry::run(&cli, args),
        Commands::Summary => commands::summary::run(&cli),
        Commands::Map(args) => commands::map::run(&cli, args),
        Commands::TopRisk(args) => commands::top_risk::run(&cli, args),
        Commands::Render(args) => commands::render::run(&cli, args),
        Commands::District(args) => commands::district::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }

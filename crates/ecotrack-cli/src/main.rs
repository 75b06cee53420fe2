use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod session;

#[derive(Parser)]
#[command(name = "ecotrack-cli", version, about = "EcoTrack carbon footprint CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute today's footprint from the given inputs
    Calc(commands::day::CalcArgs),
    /// Save today's entry
    Save(commands::day::SaveArgs),
    /// Saved history, newest first
    History(commands::view::HistoryArgs),
    /// Seven-day window ending today
    Week(commands::view::JsonArgs),
    /// Achievement counters
    Achievements(commands::view::JsonArgs),
    /// Personal daily target
    Target {
        #[command(subcommand)]
        action: commands::target::TargetAction,
    },
    /// Reset form, today, history, or everything
    Reset(commands::reset::ResetArgs),
    /// Export the text report or the short summary
    Export {
        #[command(subcommand)]
        action: commands::export::ExportAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("ECOTRACK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Calc(args) => commands::day::calc(args),
        Commands::Save(args) => commands::day::save(args),
        Commands::History(args) => commands::view::history(args),
        Commands::Week(args) => commands::view::week(args),
        Commands::Achievements(args) => commands::view::achievements(args),
        Commands::Target { action } => commands::target::run(action),
        Commands::Reset(args) => commands::reset::run(args),
        Commands::Export { action } => commands::export::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

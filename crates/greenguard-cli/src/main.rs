//! CLI for greenguard — the urban tree-monitoring demo dashboard.

mod commands;
mod tui;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "greenguard")]
#[command(about = "greenguard — urban tree-monitoring demo dashboard")]
#[command(version = greenguard_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive dashboard (TUI)
    Run {
        /// Seed for reproducible telemetry and map layout
        #[arg(long)]
        seed: Option<u64>,

        /// Start with demo mode already enabled
        #[arg(long)]
        demo: bool,
    },

    /// Print synthetic sensor readings with their alarm evaluation
    Watch {
        /// Number of readings to produce
        #[arg(long, default_value = "10")]
        ticks: u32,

        /// Delay between readings in milliseconds (0 = no delay)
        #[arg(long, default_value = "0")]
        period_ms: u64,

        /// Seed for a reproducible sequence
        #[arg(long)]
        seed: Option<u64>,

        /// Emit JSON lines instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Ask the scripted assistant a one-shot question
    Ask {
        /// The question (joined with spaces)
        query: Vec<String>,
    },

    /// Print the demo conversation script
    Script,

    /// Dump reference fixtures (alerts, forecast, map nodes) as JSON
    Fixtures {
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<String>,

        /// Seed for the map node layout
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { seed, demo } => commands::run::run(seed, demo),
        Commands::Watch {
            ticks,
            period_ms,
            seed,
            json,
        } => commands::watch::run(ticks, period_ms, seed, json),
        Commands::Ask { query } => commands::ask::run(&query.join(" ")),
        Commands::Script => commands::script::run(),
        Commands::Fixtures { output, seed } => commands::fixtures::run(output.as_deref(), seed),
    }
}

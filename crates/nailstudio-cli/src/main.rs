mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nailstudio", about = "AI nail-art try-on from a photo of your hand")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a nail design to a hand photo
    Generate(commands::generate::GenerateArgs),
    /// Print the prompt a design would send, without calling the API
    Prompt(commands::prompt::PromptArgs),
    /// List the built-in design presets
    Presets,
    /// Show image file metadata
    Info(commands::info::InfoArgs),
    /// Print or save the default config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Prompt(args) => commands::prompt::run(args),
        Commands::Presets => commands::presets::run(),
        Commands::Info(args) => commands::info::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}

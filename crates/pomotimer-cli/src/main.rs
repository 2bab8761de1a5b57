use clap::{Parser, Subcommand};

mod commands;
mod haptics;

#[derive(Parser)]
#[command(name = "pomotimer", version, about = "Pomotimer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive timer session in the terminal
    Run(commands::run::RunArgs),
    /// Resolve raw duration field text into validated minutes
    Resolve(commands::resolve::ResolveArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Resolve(args) => commands::resolve::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a layout file and report what it defines
    Validate(cmd::validate::ValidateArgs),
    /// Render a layout's character tables per layer
    Show(cmd::show::ShowArgs),
    /// Resolve one character slot to its index and canonical stroke
    Trace(cmd::trace::TraceArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate(args) => cmd::validate::run(&args),
        Commands::Show(args) => cmd::show::run(&args),
        Commands::Trace(args) => cmd::trace::run(&args),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand};

use registry_infrastructure::CONFIG_ENV;

#[derive(Parser, Debug)]
#[command(name = "engine-ui-registry")]
#[command(about = "Engine UI component registry server", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Write daily rolling log files into this directory
    #[arg(long)]
    log_dir: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the registry over HTTP (default)
    Serve,
    /// Write every registry route as static JSON
    Build {
        /// Output directory, overrides `export_dir`
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Print the static route parameters as JSON
    Routes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = registry_bootstrap::logging::init_tracing(args.log_dir.as_deref(), args.log_json);
    if let Some(config) = args.config {
        std::env::set_var(CONFIG_ENV, config);
    }
    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => registry_bootstrap::run_standalone().await,
        Command::Build { out } => registry_bootstrap::run_export(out).await,
        Command::Routes => registry_bootstrap::print_routes().await,
    }
}

mod commands;
mod core;
mod ui;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::commands::{
    clear::ClearCommand, export::ExportCommand, facility::FacilityCommand,
    import::ImportCommand, reset::ResetCommand, schema::SchemaCommand, set::SetCommand,
    show::ShowCommand, simulate::SimulateCommand,
};
use crate::core::{CliContext, CliError};

#[derive(Parser)]
#[command(name = "secure-analytics")]
#[command(about = "Assess facility security risk from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard
    Show(ShowCommand),
    /// Assess an indicator
    Set(SetCommand),
    /// Mark an indicator as not assessed
    Clear(ClearCommand),
    /// Show or edit the facility profile
    Facility(FacilityCommand),
    /// Simulate live indicator changes
    Simulate(SimulateCommand),
    /// Write the assessment to a JSON file
    Export(ExportCommand),
    /// Load an assessment from a JSON file
    Import(ImportCommand),
    /// Go back to the reference assessment
    Reset(ResetCommand),
    /// Print the snapshot JSON Schema
    Schema,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Schema = cli.command {
        return SchemaCommand.execute();
    }

    let ctx = CliContext::load()?;

    match cli.command {
        Commands::Show(cmd) => cmd.execute(&ctx),
        Commands::Set(cmd) => cmd.execute(&ctx),
        Commands::Clear(cmd) => cmd.execute(&ctx),
        Commands::Facility(cmd) => cmd.execute(&ctx),
        Commands::Simulate(cmd) => cmd.execute(&ctx).await,
        Commands::Export(cmd) => cmd.execute(&ctx),
        Commands::Import(cmd) => cmd.execute(&ctx),
        Commands::Reset(cmd) => cmd.execute(&ctx),
        Commands::Schema => SchemaCommand.execute(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(cli_error) => cli_error.render(),
                None => eprintln!("\n{} {:#}", console::style("Error:").red().bold(), e),
            }
            ExitCode::FAILURE
        }
    }
}

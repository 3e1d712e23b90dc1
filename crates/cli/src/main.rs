use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use orca_core::configs::tools::{load_tools_config, ToolsConfig};
use orca_core::options::PHPCS_STANDARD_ENV_VAR;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::static_analysis::StaticAnalysisArgs;

/// ORCA - Quality assurance for PHP projects
#[derive(Parser)]
#[command(name = "orca")]
#[command(about = "Runs quality checks against a path and reports one verdict")]
#[command(version)]
struct Cli {
    /// YAML file overriding tool executables and the reports directory
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Show progress (-v) and debugging output (-vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run static analysis tools against a path
    #[command(name = "qa:static-analysis", visible_alias = "analyze")]
    StaticAnalysis(StaticAnalysisArgs),
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "orca_core=warn,orca_cli=warn",
        1 => "orca_core=info,orca_cli=info",
        _ => "orca_core=debug,orca_cli=debug",
    }
}

fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => load_tools_config(path)?,
        None => ToolsConfig::default(),
    };
    debug!(?config, "tools configuration");

    // The environment is read once here and passed down explicitly
    let env_standard = std::env::var(PHPCS_STANDARD_ENV_VAR)
        .ok()
        .filter(|value| !value.is_empty());

    let status = match cli.command {
        Commands::StaticAnalysis(args) => {
            commands::static_analysis::execute(&args, &config, env_standard)?
        }
    };

    Ok(ExitCode::from(status.exit_code()))
}

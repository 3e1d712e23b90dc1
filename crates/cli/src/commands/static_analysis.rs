use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::*;
use orca_core::configs::tools::{ReportsDir, ToolsConfig};
use orca_core::execution::{StatusCode, TaskRunner};
use orca_core::selection::SelectionFlags;
use orca_core::static_analysis::{LocalFilesystem, StaticAnalysis, StaticAnalysisRequest};
use orca_core::tools;

#[derive(Args, Debug)]
pub struct StaticAnalysisArgs {
    /// The path to analyze
    pub path: PathBuf,

    /// Run the Composer validation tool
    #[arg(long)]
    pub composer: bool,

    /// Run the code coverage estimator. Implies "--phploc"
    #[arg(long)]
    pub coverage: bool,

    /// Run the PHP Code Sniffer tool
    #[arg(long)]
    pub phpcs: bool,

    /// Change the PHPCS standard used: AcquiaPHP, AcquiaDrupalStrict or
    /// AcquiaDrupalTransitional [default: $ORCA_PHPCS_STANDARD or AcquiaDrupalTransitional]
    #[arg(long = "phpcs-standard", value_name = "STANDARD")]
    pub phpcs_standard: Option<String>,

    /// Run the PHP Lint tool
    #[arg(long)]
    pub phplint: bool,

    /// Run the PHPLOC tool
    #[arg(long)]
    pub phploc: bool,

    /// Run the PHP Mess Detector tool
    #[arg(long)]
    pub phpmd: bool,

    /// Run the YAML Lint tool
    #[arg(long)]
    pub yamllint: bool,
}

impl StaticAnalysisArgs {
    fn to_request(&self) -> StaticAnalysisRequest {
        StaticAnalysisRequest {
            path: self.path.clone(),
            flags: SelectionFlags {
                composer: self.composer,
                coverage: self.coverage,
                phpcs: self.phpcs,
                phplint: self.phplint,
                phploc: self.phploc,
                phpmd: self.phpmd,
                yamllint: self.yamllint,
            },
            phpcs_standard: self.phpcs_standard.clone(),
        }
    }
}

pub fn execute(
    args: &StaticAnalysisArgs,
    config: &ToolsConfig,
    env_standard: Option<String>,
) -> Result<StatusCode> {
    // Dropped after the run, which removes a scratch reports directory
    let reports = ReportsDir::for_config(config)?;

    let verdict = StaticAnalysis::new(&LocalFilesystem, env_standard)
        .execute(
            &args.to_request(),
            tools::task_set(config, &reports),
            &mut TaskRunner::new(),
        )
        .map_err(|e| anyhow::anyhow!("Static analysis aborted: {}", e))?;

    if let Some(diagnostic) = verdict.diagnostic() {
        eprintln!(
            "{}",
            render_diagnostic(&diagnostic, std::io::stderr().is_terminal())
        );
    }

    Ok(verdict.status())
}

fn render_diagnostic(diagnostic: &str, color: bool) -> String {
    if color {
        diagnostic.red().to_string()
    } else {
        diagnostic.to_string()
    }
}

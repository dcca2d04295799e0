use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use cartwright_core::InstalledSnapshot;
use cartwright_setup::{error_as_html_fragment, run_uninstall_readiness_check, UninstallReadiness};
use clap::{Parser, Subcommand};


#[derive(Parser, Debug)]
#[command(name = "cartwright")]
#[command(about = "Storefront platform setup and maintenance tooling", long_about = None)]
struct Cli {
    #[arg(long, default_value = "installed.json")]
    metadata: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    UninstallCheck {
        #[arg(required = true)]
        packages: Vec<String>,
        #[arg(long)]
        html: bool,
    },
    List,
}

fn main() -> ExitCode {
    match run_cli(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::UninstallCheck { packages, html } => {
            let snapshot = load_snapshot(&cli.metadata)?;
            let readiness = run_uninstall_readiness_check(&snapshot, &packages);
            for line in format_readiness_lines(&readiness, &packages, html) {
                println!("{line}");
            }
            Ok(if readiness.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::List => {
            let snapshot = load_snapshot(&cli.metadata)?;
            for line in format_root_required_lines(&snapshot) {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_snapshot(path: &Path) -> Result<InstalledSnapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read installed snapshot: {}", path.display()))?;
    InstalledSnapshot::from_json_str(&raw)
}

fn format_readiness_lines(
    readiness: &UninstallReadiness,
    packages: &[String],
    html: bool,
) -> Vec<String> {
    match &readiness.error {
        None => vec![format!("ready to uninstall: {}", packages.join(", "))],
        Some(message) if html => vec![error_as_html_fragment(message)],
        Some(message) => {
            let mut lines = vec!["cannot uninstall:".to_string()];
            lines.extend(message.lines().map(|line| format!("  {line}")));
            lines
        }
    }
}

fn format_root_required_lines(snapshot: &InstalledSnapshot) -> Vec<String> {
    let types = snapshot.root_required_package_types_by_name();
    if types.is_empty() {
        return vec!["no root-required packages installed".to_string()];
    }
    types
        .iter()
        .map(|(name, package_type)| format!("{name} ({})", package_type.as_str()))
        .collect()
}

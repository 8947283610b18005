#![forbid(unsafe_code)]

//! projectlist CLI
//!
//! Lists, groups, and checks the projects recorded in a markdown project
//! list.

mod config;
mod render;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use projectlist::{
    ParseReport, ProjectStatus, active_projects, group_by_status, terminal_projects, try_parse_projectlist,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, OutputFormat};

/// Project list viewer and checker
#[derive(Parser, Debug)]
#[command(name = "projectlist", author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Project list document to read
    #[arg(short, long, env = "PROJECTLIST_DOCUMENT")]
    document: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List valid projects
    List {
        /// Only projects that are neither abandoned nor on hold
        #[arg(long, conflicts_with = "terminal")]
        active: bool,

        /// Only abandoned or on-hold projects
        #[arg(long)]
        terminal: bool,

        /// Only projects with this status
        #[arg(long)]
        status: Option<ProjectStatus>,
    },
    /// List projects grouped by the configured statuses
    Groups,
    /// Report entries that were dropped and why
    Check,
    /// Show the lifecycle stages
    Stages,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config::load(args.config.as_deref())?.with_overrides(args.document, args.format);

    match args.command {
        Command::List {
            active,
            terminal,
            status,
        } => {
            let report = load_report(&config)?;
            let mut selected = if active {
                active_projects(&report.projects)
            } else if terminal {
                terminal_projects(&report.projects)
            } else {
                report.projects.iter().collect()
            };
            if let Some(status) = status {
                selected.retain(|p| p.status == status);
            }
            print!("{}", render::projects(&selected, config.format)?);
        }
        Command::Groups => {
            let report = load_report(&config)?;
            let groups = group_by_status(&report.projects, &config.group_statuses);
            print!("{}", render::groups(&groups, config.format)?);
        }
        Command::Check => {
            let report = load_report(&config)?;
            print!("{}", render::rejections(&report.rejected, config.format)?);
            if !report.rejected.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Stages => print!("{}", render::stages()),
    }

    Ok(ExitCode::SUCCESS)
}

/// Read the configured document and parse it.
fn load_report(config: &Config) -> Result<ParseReport> {
    let content = std::fs::read_to_string(&config.document).with_context(|| {
        format!(
            "Failed to read project list {}",
            config.document.display()
        )
    })?;
    let report = try_parse_projectlist(&content)?;
    tracing::info!(
        projects = report.projects.len(),
        rejected = report.rejected.len(),
        "Parsed {}",
        config.document.display()
    );
    Ok(report)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_list_flags() {
        let args = Args::try_parse_from([
            "projectlist",
            "--document",
            "p.md",
            "-f",
            "json",
            "list",
            "--active",
            "--status",
            "on-hold",
        ]);
        let args = match args {
            Ok(args) => args,
            Err(e) => panic!("arguments should parse: {e}"),
        };
        assert_eq!(args.document, Some(PathBuf::from("p.md")));
        assert_eq!(args.format, Some(OutputFormat::Json));
        match args.command {
            Command::List { active, status, .. } => {
                assert!(active);
                assert_eq!(status, Some(ProjectStatus::OnHold));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_active_conflicts_with_terminal() {
        let args = Args::try_parse_from(["projectlist", "list", "--active", "--terminal"]);
        assert!(args.is_err());
    }

    #[test]
    fn test_rejects_unknown_status() {
        let args = Args::try_parse_from(["projectlist", "list", "--status", "shelved"]);
        assert!(args.is_err());
    }

    #[test]
    fn test_verbosity_counts() {
        let args = Args::try_parse_from(["projectlist", "-vv", "stages"]);
        assert!(args.is_ok_and(|a| a.verbose == 2));
    }
}

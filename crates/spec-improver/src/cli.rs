//! CLI command definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::analyzer::analyze;
use crate::checklist::{parse_checklist, QualityChecklist};
use crate::config::{user_config_path, Config};
use crate::creator::{validate_feature_name, Creator, ExternalCreator};
use crate::error::Error;
use crate::find::{find_checklist, find_project_root};
use crate::output::{render_checklist, render_improvements};

/// spec-improver - A tool to improve component specifications
#[derive(Parser, Debug)]
#[command(name = "spec-improver")]
#[command(version)]
#[command(about = "A tool to improve component specifications")]
#[command(after_help = "\
EXAMPLES:
    spec-improver analyze specs/auth/spec.md        List suggested improvements
    spec-improver analyze spec.md -c checklist.yaml Use a specific checklist
    spec-improver create user-auth                  Create a spec for a feature
    spec-improver checklist                         Show the active checklist

CHECKLIST:
    Looked up in this order: --checklist, `checklist` in
    .spec-improver/config.yaml, .spec-improver/checklist.yaml, checklist.yaml.

    content_quality:
      - Clear problem statement
    requirement_completeness:
      - Requirements are testable
    feature_readiness:
      - Acceptance criteria defined")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyzes an existing component specification
    Analyze {
        /// Path to the specification (Markdown)
        #[arg(value_name = "path-to-spec.md")]
        path: Option<PathBuf>,

        /// Checklist file to evaluate against
        #[arg(short, long)]
        checklist: Option<PathBuf>,

        /// Output as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Creates a new component specification
    Create {
        /// Name of the feature to specify
        #[arg(value_name = "feature-name")]
        feature_name: Option<String>,
    },

    /// Updates an existing component specification
    Update,

    /// Show the checklist analyze would use
    Checklist {
        /// Checklist file (default: discovered from the project)
        path: Option<PathBuf>,

        /// Output as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },
}

/// Dispatch a parsed command
pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Analyze {
            path,
            checklist,
            json,
        } => cmd_analyze(path.as_deref(), checklist.as_deref(), json),
        Commands::Create { feature_name } => cmd_create(feature_name.as_deref()),
        Commands::Update => cmd_update(),
        Commands::Checklist { path, json } => cmd_checklist(path.as_deref(), json),
    }
}

/// Analyze a specification and print suggested improvements
pub fn cmd_analyze(path: Option<&Path>, checklist: Option<&Path>, json: bool) -> Result<()> {
    let spec_path =
        path.ok_or_else(|| Error::Usage("path to specification file is required".to_string()))?;

    let project_root = find_project_root()?;
    let checklist = resolve_checklist(checklist, &project_root, user_config_path())?;

    let improvements = analyze(spec_path, &checklist)?;
    println!("{}", render_improvements(&improvements, json)?);

    Ok(())
}

/// Delegate spec creation to the configured create command
pub fn cmd_create(feature_name: Option<&str>) -> Result<()> {
    let feature_name = validate_feature_name(feature_name.unwrap_or(""))?;

    let project_root = find_project_root()?;
    let config = Config::discover(&project_root)?;

    ExternalCreator::new(config.create_command, &project_root).create(feature_name)?;

    println!("{} {}", "Created:".green(), feature_name);
    Ok(())
}

pub fn cmd_update() -> Result<()> {
    println!("Updating specification...");
    Ok(())
}

/// Print the checklist that analyze would use
pub fn cmd_checklist(path: Option<&Path>, json: bool) -> Result<()> {
    let project_root = find_project_root()?;
    let checklist = resolve_checklist(path, &project_root, user_config_path())?;
    println!("{}", render_checklist(&checklist, json)?);
    Ok(())
}

/// Pick the checklist for a run
///
/// Explicit path, then config, then the project's checklist file. With none of
/// those the checklist is empty. `user_config` is the user-level config file.
pub fn resolve_checklist(
    explicit: Option<&Path>,
    project_root: &Path,
    user_config: Option<PathBuf>,
) -> crate::error::Result<QualityChecklist> {
    if let Some(path) = explicit {
        return parse_checklist(path);
    }

    let config = Config::discover_with(project_root, user_config)?;
    if let Some(path) = config.checklist.as_deref() {
        return parse_checklist(path);
    }

    match find_checklist(project_root) {
        Some(path) => {
            info!(path = %path.display(), "Using project checklist");
            parse_checklist(&path)
        }
        None => {
            warn!("No checklist found, analyzing with an empty checklist");
            Ok(QualityChecklist::default())
        }
    }
}

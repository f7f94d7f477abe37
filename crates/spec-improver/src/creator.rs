//! Creating new specifications
//!
//! spec-improver does not write specification files itself. `create` hands the
//! feature name to an external command configured as `create_command`.

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

use crate::error::{Error, Result};

/// Environment variable carrying the feature name to the create command
pub const FEATURE_ENV: &str = "SPEC_IMPROVER_FEATURE";

/// Something that can create a specification for a feature
pub trait Creator {
    fn create(&self, feature_name: &str) -> Result<()>;
}

/// Runs a configured program to create the spec
pub struct ExternalCreator {
    command: Vec<String>,
    working_dir: PathBuf,
}

impl ExternalCreator {
    pub fn new(command: Vec<String>, working_dir: &Path) -> Self {
        Self {
            command,
            working_dir: working_dir.to_path_buf(),
        }
    }
}

impl Creator for ExternalCreator {
    fn create(&self, feature_name: &str) -> Result<()> {
        let feature_name = validate_feature_name(feature_name)?;

        let (program, args) = self.command.split_first().ok_or_else(|| {
            Error::NotConfigured(
                "no create_command set in .spec-improver/config.yaml".to_string(),
            )
        })?;

        info!(program = %program, feature = feature_name, "Running create command");

        let status = Command::new(program)
            .args(args)
            .arg(feature_name)
            .env(FEATURE_ENV, feature_name)
            .current_dir(&self.working_dir)
            .status()
            .map_err(|e| Error::Creator(format!("failed to start '{}': {}", program, e)))?;

        if !status.success() {
            return Err(Error::Creator(format!("'{}' exited with {}", program, status)));
        }

        Ok(())
    }
}

/// Trimmed feature name, or a usage error if it is blank
pub fn validate_feature_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Usage("feature name is required".to_string()));
    }
    Ok(name)
}

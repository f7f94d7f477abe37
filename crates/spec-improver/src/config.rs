//! Configuration for spec-improver
//!
//! Looked up in the project first (`.spec-improver/config.yaml`), then in the
//! user config directory (`~/.config/spec-improver/config.yaml`).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};

/// Project-local state directory
pub const PROJECT_DIR: &str = ".spec-improver";

/// Config file name
pub const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Checklist used when none is given on the command line
    #[serde(default)]
    pub checklist: Option<PathBuf>,

    /// Program and arguments run by `create`; the feature name is appended
    #[serde(default)]
    pub create_command: Vec<String>,
}

impl Config {
    /// Load config from file, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let mut config: Config =
            serde_yaml::from_slice(&content).map_err(|e| Error::parse(path, e))?;

        // Relative checklist paths are relative to the config file
        if let Some(dir) = path.parent() {
            config.checklist = config
                .checklist
                .map(|checklist| if checklist.is_relative() { dir.join(checklist) } else { checklist });
        }

        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Find and load the config that applies to a project
    pub fn discover(project_root: &Path) -> Result<Self> {
        Self::discover_with(project_root, user_config_path())
    }

    /// Like `discover`, with the user-level config path given explicitly
    pub fn discover_with(project_root: &Path, user_config: Option<PathBuf>) -> Result<Self> {
        let candidates = [
            Some(project_root.join(PROJECT_DIR).join(CONFIG_FILE)),
            user_config,
        ];

        for path in candidates.iter().flatten() {
            if path.exists() {
                return Self::load(path);
            }
        }

        Ok(Self::default())
    }
}

/// `~/.config/spec-improver/config.yaml`, if a config directory exists
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("spec-improver").join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_default() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(&temp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_resolves_relative_checklist() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "checklist: lists/quality.yaml\ncreate_command: [\"speckit\", \"new\"]\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.checklist, Some(temp.path().join("lists/quality.yaml")));
        assert_eq!(config.create_command, vec!["speckit", "new"]);
    }

    #[test]
    fn test_discover_prefers_project_config() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(PROJECT_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE), "checklist: /abs/checklist.yaml\n").unwrap();

        let user = temp.path().join("user-config.yaml");
        fs::write(&user, "checklist: /user/checklist.yaml\n").unwrap();

        let config = Config::discover_with(temp.path(), Some(user)).unwrap();
        assert_eq!(config.checklist, Some(PathBuf::from("/abs/checklist.yaml")));
    }

    #[test]
    fn test_discover_falls_back_to_user_config() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let user = home.path().join(CONFIG_FILE);
        fs::write(&user, "checklist: /user/checklist.yaml\n").unwrap();

        let config = Config::discover_with(project.path(), Some(user)).unwrap();
        assert_eq!(config.checklist, Some(PathBuf::from("/user/checklist.yaml")));

        let config = Config::discover_with(project.path(), None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_utf8_config_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, b"create_command: [\xff\xfe]\n").unwrap();
        assert!(matches!(Config::load(&path), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_malformed_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "create_command: {oops").unwrap();
        assert!(matches!(Config::load(&path), Err(Error::Parse { .. })));
    }
}

//! Quality checklist data structures and loading

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};

/// Checklist category, one per top-level key of a checklist file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ContentQuality,
    RequirementCompleteness,
    FeatureReadiness,
}

impl Category {
    /// All categories in evaluation order
    pub const ALL: [Category; 3] = [
        Category::ContentQuality,
        Category::RequirementCompleteness,
        Category::FeatureReadiness,
    ];

    /// Key used in checklist files
    pub fn key(&self) -> &'static str {
        match self {
            Category::ContentQuality => "content_quality",
            Category::RequirementCompleteness => "requirement_completeness",
            Category::FeatureReadiness => "feature_readiness",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::ContentQuality => "Content Quality",
            Category::RequirementCompleteness => "Requirement Completeness",
            Category::FeatureReadiness => "Feature Readiness",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A checklist.yaml file structure
///
/// Unknown keys are ignored and missing keys load as empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityChecklist {
    /// Criteria about content clarity
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content_quality: Vec<String>,

    /// Criteria about requirement completeness
    #[serde(default, deserialize_with = "null_as_empty")]
    pub requirement_completeness: Vec<String>,

    /// Criteria about feature readiness
    #[serde(default, deserialize_with = "null_as_empty")]
    pub feature_readiness: Vec<String>,
}

/// A single checklist entry tagged with its category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion<'a> {
    pub category: Category,
    pub text: &'a str,
}

/// `key:` with no value means the same as an absent key
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl QualityChecklist {
    /// Parse checklist YAML held in memory
    ///
    /// `path` is only used for error reporting.
    pub fn from_yaml_str(content: &str, path: &Path) -> Result<Self> {
        Self::from_yaml_slice(content.as_bytes(), path)
    }

    /// Parse raw checklist bytes; invalid UTF-8 is a parse error
    pub fn from_yaml_slice(content: &[u8], path: &Path) -> Result<Self> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: serde_yaml::Value =
            serde_yaml::from_slice(content).map_err(|e| Error::parse(path, e))?;

        if value.is_null() {
            return Ok(Self::default());
        }

        serde_yaml::from_value(value).map_err(|e| Error::parse(path, e))
    }

    /// Criteria for one category, in file order
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::ContentQuality => &self.content_quality,
            Category::RequirementCompleteness => &self.requirement_completeness,
            Category::FeatureReadiness => &self.feature_readiness,
        }
    }

    /// Iterate every criterion, category by category
    pub fn criteria(&self) -> impl Iterator<Item = Criterion<'_>> {
        Category::ALL.into_iter().flat_map(move |category| {
            self.get(category).iter().map(move |text| Criterion {
                category,
                text: text.as_str(),
            })
        })
    }

    /// Total number of criteria
    pub fn len(&self) -> usize {
        self.content_quality.len() + self.requirement_completeness.len() + self.feature_readiness.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Load a checklist from a YAML file
pub fn parse_checklist(path: &Path) -> Result<QualityChecklist> {
    let content = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    let checklist = QualityChecklist::from_yaml_slice(&content, path)?;

    debug!(
        path = %path.display(),
        content_quality = checklist.content_quality.len(),
        requirement_completeness = checklist.requirement_completeness.len(),
        feature_readiness = checklist.feature_readiness.len(),
        "Loaded checklist"
    );

    Ok(checklist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_checklist(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let temp = tempdir().unwrap();
        let path = temp.path().join("checklist.yaml");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    #[test]
    fn test_parse_full_checklist() {
        let (_temp, path) = write_checklist(
            r#"
content_quality:
  - No implementation details
  - Written for stakeholders
requirement_completeness:
  - Requirements are testable
feature_readiness:
  - Acceptance criteria defined
  - Edge cases identified
  - Scope clearly bounded
"#,
        );

        let checklist = parse_checklist(&path).unwrap();
        assert_eq!(
            checklist.content_quality,
            vec!["No implementation details", "Written for stakeholders"]
        );
        assert_eq!(checklist.requirement_completeness, vec!["Requirements are testable"]);
        assert_eq!(
            checklist.feature_readiness,
            vec![
                "Acceptance criteria defined",
                "Edge cases identified",
                "Scope clearly bounded"
            ]
        );
        assert_eq!(checklist.len(), 6);
    }

    #[test]
    fn test_missing_keys_are_empty() {
        let (_temp, path) = write_checklist(r#"content_quality: ["clear problem statement"]"#);

        let checklist = parse_checklist(&path).unwrap();
        assert_eq!(
            checklist,
            QualityChecklist {
                content_quality: vec!["clear problem statement".to_string()],
                requirement_completeness: vec![],
                feature_readiness: vec![],
            }
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let (_temp, path) = write_checklist(
            "version: 2\nfeature_readiness:\n  - Ships behind a flag\nnotes: anything\n",
        );

        let checklist = parse_checklist(&path).unwrap();
        assert_eq!(checklist.feature_readiness, vec!["Ships behind a flag"]);
        assert!(checklist.content_quality.is_empty());
    }

    #[test]
    fn test_empty_and_null_values() {
        let (_temp, path) = write_checklist("");
        assert!(parse_checklist(&path).unwrap().is_empty());

        let (_temp, path) = write_checklist("content_quality:\nfeature_readiness: []\n");
        assert!(parse_checklist(&path).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let (_temp, path) = write_checklist("content_quality: [unclosed\n");
        let err = parse_checklist(&path).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let (_temp, path) = write_checklist("content_quality:\n  nested: value\n");
        assert!(matches!(parse_checklist(&path), Err(Error::Parse { .. })));

        let (_temp, path) = write_checklist("- just\n- a list\n");
        assert!(matches!(parse_checklist(&path), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("checklist.yaml");
        fs::write(&path, b"content_quality:\n  - \xff\xfe\n").unwrap();

        let err = parse_checklist(&path).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp = tempdir().unwrap();
        let err = parse_checklist(&temp.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_criteria_order() {
        let checklist = QualityChecklist {
            content_quality: vec!["a".into(), "b".into()],
            requirement_completeness: vec![],
            feature_readiness: vec!["c".into()],
        };

        let criteria: Vec<_> = checklist
            .criteria()
            .map(|c| (c.category, c.text))
            .collect();
        assert_eq!(
            criteria,
            vec![
                (Category::ContentQuality, "a"),
                (Category::ContentQuality, "b"),
                (Category::FeatureReadiness, "c"),
            ]
        );
    }
}

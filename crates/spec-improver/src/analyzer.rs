//! Specification analysis
//!
//! Every checklist criterion is run through an ordered list of rules. The
//! first rule that objects produces the improvement for that criterion, so a
//! criterion yields at most one suggestion.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

use crate::checklist::{Category, Criterion, QualityChecklist};
use crate::document::{words, SpecDocument};
use crate::error::Result;

/// Words too common to say anything about a criterion
const STOP_WORDS: &[&str] = &[
    "about", "also", "been", "being", "clearly", "could", "does", "each", "from", "have",
    "into", "more", "most", "must", "only", "other", "should", "some", "such", "than",
    "that", "their", "them", "then", "there", "these", "they", "this", "those", "very",
    "were", "what", "when", "where", "which", "while", "will", "with", "would", "your",
];

/// Minimum keyword length
const MIN_KEYWORD_LENGTH: usize = 4;

/// Placeholder text left in an unfinished spec
const MARKER_PATTERN: &str = r"\b(?:TODO|TBD|FIXME|XXX)\b|(?i:\[needs clarification)";

/// How far a document is from meeting a criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Unmet,
    Partial,
}

/// A suggested change to a specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Improvement {
    pub category: Category,
    pub criterion: String,
    pub status: Status,
    pub suggestion: String,
}

impl Improvement {
    pub fn new(criterion: &Criterion<'_>, status: Status, suggestion: String) -> Self {
        Self {
            category: criterion.category,
            criterion: criterion.text.to_string(),
            status,
            suggestion,
        }
    }
}

impl fmt::Display for Improvement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.suggestion)
    }
}

/// A single check of a document against one criterion
pub trait Rule {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Return an improvement if the document falls short of `criterion`
    ///
    /// `keywords` is never empty.
    fn evaluate(
        &self,
        document: &SpecDocument,
        criterion: &Criterion<'_>,
        keywords: &[String],
    ) -> Option<Improvement>;
}

/// None of the criterion's keywords appear in the document
pub struct MissingTopicRule;

impl Rule for MissingTopicRule {
    fn name(&self) -> &'static str {
        "missing-topic"
    }

    fn evaluate(
        &self,
        document: &SpecDocument,
        criterion: &Criterion<'_>,
        keywords: &[String],
    ) -> Option<Improvement> {
        if keywords.iter().any(|k| document.contains(k)) {
            return None;
        }
        Some(Improvement::new(
            criterion,
            Status::Unmet,
            format!("Add content addressing: {}", criterion.text),
        ))
    }
}

/// The section covering the criterion still has placeholder markers
pub struct UnresolvedMarkerRule {
    marker: Regex,
}

impl UnresolvedMarkerRule {
    pub fn new() -> Self {
        Self {
            marker: Regex::new(MARKER_PATTERN).expect("marker pattern is valid"),
        }
    }
}

impl Default for UnresolvedMarkerRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for UnresolvedMarkerRule {
    fn name(&self) -> &'static str {
        "unresolved-marker"
    }

    fn evaluate(
        &self,
        document: &SpecDocument,
        criterion: &Criterion<'_>,
        keywords: &[String],
    ) -> Option<Improvement> {
        let section = document.best_section(keywords)?;
        if !self.marker.is_match(&section.body) {
            return None;
        }
        Some(Improvement::new(
            criterion,
            Status::Partial,
            format!(
                "Resolve open markers in section '{}' ({})",
                section.heading, criterion.text
            ),
        ))
    }
}

/// Fewer than half of the criterion's keywords appear in the document
pub struct PartialCoverageRule;

impl Rule for PartialCoverageRule {
    fn name(&self) -> &'static str {
        "partial-coverage"
    }

    fn evaluate(
        &self,
        document: &SpecDocument,
        criterion: &Criterion<'_>,
        keywords: &[String],
    ) -> Option<Improvement> {
        let missing: Vec<&str> = keywords
            .iter()
            .filter(|k| !document.contains(k))
            .map(String::as_str)
            .collect();
        let present = keywords.len() - missing.len();

        if present * 2 >= keywords.len() {
            return None;
        }
        Some(Improvement::new(
            criterion,
            Status::Partial,
            format!(
                "Expand coverage of: {} (missing: {})",
                criterion.text,
                missing.join(", ")
            ),
        ))
    }
}

/// Significant lowercase words of a criterion, in order, without repeats
pub fn keywords(text: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();

    for word in words(text) {
        if word.chars().count() >= MIN_KEYWORD_LENGTH
            && !STOP_WORDS.contains(&word.as_str())
            && !keywords.contains(&word)
        {
            keywords.push(word);
        }
    }

    keywords
}

/// Runs rules over every checklist criterion
pub struct Analyzer {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::with_rules(vec![
            Box::new(MissingTopicRule),
            Box::new(UnresolvedMarkerRule::new()),
            Box::new(PartialCoverageRule),
        ])
    }
}

impl Analyzer {
    /// Build an analyzer from rules, tried in the given order
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Load a specification and evaluate it
    pub fn analyze(&self, spec_path: &Path, checklist: &QualityChecklist) -> Result<Vec<Improvement>> {
        info!(path = %spec_path.display(), criteria = checklist.len(), "Analyzing specification");
        let document = SpecDocument::load(spec_path)?;
        Ok(self.evaluate(&document, checklist))
    }

    /// Evaluate an already parsed document
    pub fn evaluate(&self, document: &SpecDocument, checklist: &QualityChecklist) -> Vec<Improvement> {
        debug!(
            path = %document.path.display(),
            sections = document.sections.len(),
            "Evaluating specification"
        );
        let mut improvements = Vec::new();

        for criterion in checklist.criteria() {
            let terms = keywords(criterion.text);
            if terms.is_empty() {
                debug!(criterion = criterion.text, "No keywords, skipping");
                continue;
            }

            let hit = self.rules.iter().find_map(|rule| {
                rule.evaluate(document, &criterion, &terms)
                    .map(|improvement| (rule.name(), improvement))
            });

            if let Some((rule, improvement)) = hit {
                debug!(rule, criterion = criterion.text, "Criterion not met");
                improvements.push(improvement);
            }
        }

        improvements
    }
}

/// Analyze a specification with the default rules
pub fn analyze(spec_path: &Path, checklist: &QualityChecklist) -> Result<Vec<Improvement>> {
    Analyzer::default().analyze(spec_path, checklist)
}

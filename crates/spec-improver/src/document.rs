//! Specification documents split into headed sections

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// One headed section of a specification document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading text, empty for the preamble before the first heading
    pub heading: String,

    /// Heading depth, 0 for the preamble
    pub level: usize,

    /// Plain text under the heading, up to the next heading
    pub body: String,
}

impl Section {
    fn preamble() -> Self {
        Self {
            heading: String::new(),
            level: 0,
            body: String::new(),
        }
    }
}

/// Lowercase alphanumeric words of `text`, in order
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}

/// A parsed Markdown specification
#[derive(Debug, Clone)]
pub struct SpecDocument {
    pub path: PathBuf,
    pub sections: Vec<Section>,
    vocabulary: HashSet<String>,
}

impl SpecDocument {
    /// Read and parse a specification from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::parse(path, &content))
    }

    /// Parse Markdown content
    pub fn parse(path: &Path, markdown: &str) -> Self {
        let mut sections = vec![Section::preamble()];
        let mut in_heading = false;

        for event in Parser::new(markdown) {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    in_heading = true;
                    sections.push(Section {
                        heading: String::new(),
                        level: heading_depth(level),
                        body: String::new(),
                    });
                }
                Event::End(TagEnd::Heading(_)) => in_heading = false,
                Event::Text(text) | Event::Code(text) => {
                    if let Some(section) = sections.last_mut() {
                        if in_heading {
                            section.heading.push_str(&text);
                        } else {
                            section.body.push_str(&text);
                        }
                    }
                }
                Event::SoftBreak | Event::HardBreak => {
                    if let Some(section) = sections.last_mut() {
                        if !in_heading {
                            section.body.push('\n');
                        }
                    }
                }
                Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Item) => {
                    if let Some(section) = sections.last_mut() {
                        section.body.push('\n');
                    }
                }
                _ => {}
            }
        }

        // Drop an empty preamble
        if sections[0].body.trim().is_empty() {
            sections.remove(0);
        }

        let vocabulary = sections
            .iter()
            .flat_map(|s| words(&s.heading).chain(words(&s.body)))
            .collect();

        Self {
            path: path.to_path_buf(),
            sections,
            vocabulary,
        }
    }

    /// Whether a lowercase word occurs anywhere in the document
    ///
    /// Matches whole words only, so `edge` does not match "knowledge".
    pub fn contains(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Section whose heading shares the most keywords
    ///
    /// Ties go to the earlier section. `None` if no heading matches.
    pub fn best_section(&self, keywords: &[String]) -> Option<&Section> {
        let mut best: Option<(&Section, usize)> = None;

        for section in self.sections.iter().filter(|s| s.level > 0) {
            let heading: HashSet<String> = words(&section.heading).collect();
            let hits = keywords.iter().filter(|k| heading.contains(k.as_str())).count();
            if hits > 0 && best.map(|(_, n)| hits > n).unwrap_or(true) {
                best = Some((section, hits));
            }
        }

        best.map(|(section, _)| section)
    }
}

fn heading_depth(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

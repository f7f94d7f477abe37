//! spec-improver - Analyze component specifications against a quality checklist
//!
//! A checklist names criteria in three categories (content quality,
//! requirement completeness, feature readiness). The analyzer checks a
//! Markdown specification against each criterion and suggests improvements.
//!
//! # Examples
//!
//! ```bash
//! spec-improver analyze specs/auth/spec.md
//! spec-improver analyze spec.md --checklist quality.yaml --json
//! spec-improver create user-auth
//! ```

pub mod analyzer;
pub mod checklist;
pub mod cli;
pub mod config;
pub mod creator;
pub mod document;
pub mod error;
pub mod find;
pub mod output;

pub use analyzer::{analyze, Analyzer, Improvement, Rule, Status};
pub use checklist::{parse_checklist, Category, Criterion, QualityChecklist};
pub use cli::{Cli, Commands};
pub use error::{Error, Result};

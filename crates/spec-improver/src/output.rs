//! Output formatting for analysis results and checklists

use colored::*;

use crate::analyzer::Improvement;
use crate::checklist::{Category, QualityChecklist};
use crate::error::Result;

/// Header printed before the improvement list
pub const ANALYSIS_HEADER: &str = "Analysis complete. Found the following potential improvements:";

/// Prefix for each improvement line
pub const IMPROVEMENT_MARKER: &str = "-  ";

/// Render improvements as the header plus one marked line each
pub fn render_improvements(improvements: &[Improvement], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(improvements)?);
    }

    let mut out = String::from(ANALYSIS_HEADER);
    for improvement in improvements {
        out.push('\n');
        out.push_str(IMPROVEMENT_MARKER);
        out.push_str(&improvement.to_string());
    }
    Ok(out)
}

/// Render a checklist grouped by category
pub fn render_checklist(checklist: &QualityChecklist, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(checklist)?);
    }

    let mut lines = Vec::new();
    for category in Category::ALL {
        let criteria = checklist.get(category);
        lines.push(format!("{} ({})", category.label().bold(), criteria.len()));
        if criteria.is_empty() {
            lines.push(format!("  {}", "(none)".dimmed()));
        }
        for criterion in criteria {
            lines.push(format!("  - {}", criterion));
        }
    }
    Ok(lines.join("\n"))
}

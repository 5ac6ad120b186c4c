//! JSON export of problem sets.
//!
//! A set is written as `<name>.json` with camelCase keys (`generatedAt`,
//! `problemTypes`, `lineTuples`) and problem types as upper-case tags.

use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tracing::info;

use crate::error::Result;
use crate::problem_engine::{ProblemSet, ProblemType};

/// `"<name>.json"`. Path separators in the name are replaced so the file
/// always lands directly in the target directory.
pub fn export_file_name(set: &ProblemSet) -> String {
    let stem: String = set
        .name
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{stem}.json")
}

pub fn to_json(set: &ProblemSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(set)?)
}

/// Write the set into `dir` and return the file's path.
pub fn write_problem_set(set: &ProblemSet, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let path = dir.as_ref().join(export_file_name(set));
    std::fs::write(&path, to_json(set)?)?;
    info!(path = %path.display(), problems = set.problems.len(), "exported problem set");
    Ok(path)
}

/// Load a set previously written by [`write_problem_set`].
pub fn read_problem_set(path: impl AsRef<Path>) -> Result<ProblemSet> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Per-type problem counts, for display next to an exported set.
pub fn summary(set: &ProblemSet) -> Value {
    let counts: serde_json::Map<String, Value> = ProblemType::ALL
        .iter()
        .map(|&t| (t.tag().to_string(), json!(set.problems_of(t).count())))
        .collect();
    json!({
        "name": set.name,
        "generatedAt": set.generated_at,
        "requested": set.problem_types.iter().map(|t| t.tag()).collect::<Vec<_>>(),
        "counts": counts,
        "total": set.problems.len(),
    })
}

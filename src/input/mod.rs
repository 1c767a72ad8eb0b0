mod types;

pub use types::{CgpaFile, CourseRow, GpaFile, SemesterRow};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file at {}", path.display()))?;

    serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse input: invalid YAML in {}", path.display()))
}

/// Load the course rows of a semester from a YAML file
pub fn load_gpa_file(path: &Path) -> Result<GpaFile> {
    let file: GpaFile = load_yaml(path)?;
    tracing::debug!(path = %path.display(), courses = file.courses.len(), "loaded course file");
    Ok(file)
}

/// Load semester rows from a YAML file
pub fn load_cgpa_file(path: &Path) -> Result<CgpaFile> {
    let file: CgpaFile = load_yaml(path)?;
    tracing::debug!(path = %path.display(), semesters = file.semesters.len(), "loaded semester file");
    Ok(file)
}

pub mod formatter;

pub use formatter::{
    format_cgpa_report, format_cgpa_tsv, format_gpa_report, format_gpa_tsv, format_grade_table,
    format_json, format_points, should_use_colors, GpaReport,
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// Tab-separated breakdown rows for scripting
    Tsv,
}

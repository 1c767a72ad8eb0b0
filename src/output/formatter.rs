use owo_colors::{OwoColorize, Style};
use serde::Serialize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::grading::{CgpaResult, GpaResult, GradeBucket};
use crate::theme::Palette;

const MAX_RULE_WIDTH: usize = 48;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// GPA result together with the semester it belongs to, for JSON output
#[derive(Debug, Serialize)]
pub struct GpaReport<'a> {
    pub semester: &'a str,
    #[serde(flatten)]
    pub result: &'a GpaResult,
}

fn paint(text: &str, style: Option<Style>) -> String {
    match style {
        Some(style) => text.style(style).to_string(),
        None => text.to_string(),
    }
}

fn rule(palette: Option<&Palette>) -> String {
    let width = terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(MAX_RULE_WIDTH)
        .min(MAX_RULE_WIDTH);
    paint(&"─".repeat(width), palette.map(|p| p.muted))
}

/// Format grade points with two decimals ("62.00")
pub fn format_points(points: f64) -> String {
    format!("{:.2}", points)
}

fn figure_line(label: &str, value: &str, palette: Option<&Palette>) -> String {
    let label = format!("{:<16}", format!("{}:", label));
    format!(
        "  {}{}",
        paint(&label, palette.map(|p| p.label)),
        paint(value, palette.map(|p| p.figure))
    )
}

/// Multi-line report for a semester GPA
pub fn format_gpa_report(semester: &str, result: &GpaResult, palette: Option<&Palette>) -> String {
    let mut lines = vec![
        paint(&format!("{} - GPA Result", semester), palette.map(|p| p.heading)),
        rule(palette),
        figure_line("GPA", &format!("{:.2}/10", result.gpa), palette),
        figure_line("Total Credits", &result.total_credits.to_string(), palette),
        format!(
            "  Performance Level: {}",
            paint(result.performance.label(), palette.map(|p| p.performance(result.performance)))
        ),
        String::new(),
        paint("Course Breakdown:", palette.map(|p| p.label)),
    ];

    if result.breakdown.is_empty() {
        lines.push(paint("  No courses entered.", palette.map(|p| p.muted)));
    }
    for course in &result.breakdown {
        lines.push(format!(
            "  {:<10} {} credits × {} = {} points",
            course.course_type.label(),
            course.credits,
            paint(course.grade.as_str(), palette.map(|p| p.accent)),
            format_points(course.grade_points)
        ));
    }

    if !result.distribution.is_empty() {
        lines.push(String::new());
        lines.push(paint("Grade Distribution:", palette.map(|p| p.label)));
        let counts = result
            .distribution
            .iter()
            .map(|(bucket, count)| format!("{}: {}", bucket.label(), count))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(format!("  {}", counts));
    }

    lines.join("\n")
}

/// Multi-line report for an overall CGPA
pub fn format_cgpa_report(result: &CgpaResult, palette: Option<&Palette>) -> String {
    let mut lines = vec![
        paint("Overall CGPA Result", palette.map(|p| p.heading)),
        rule(palette),
        figure_line("CGPA", &format!("{:.2}/10", result.cgpa), palette),
        figure_line("Total Credits", &result.total_credits.to_string(), palette),
        figure_line("Semesters", &result.breakdown.len().to_string(), palette),
        format!(
            "  Performance Level: {}",
            paint(result.performance.label(), palette.map(|p| p.performance(result.performance)))
        ),
        format!(
            "  Academic Standing: {}",
            paint(result.standing.label(), palette.map(|p| p.accent))
        ),
        String::new(),
        paint("Semester Breakdown:", palette.map(|p| p.label)),
    ];

    if result.breakdown.is_empty() {
        lines.push(paint("  No semesters entered.", palette.map(|p| p.muted)));
    }
    for semester in &result.breakdown {
        lines.push(format!(
            "  {} {} credits × {:.2} = {} points",
            semester.name,
            semester.credits,
            semester.gpa,
            format_points(semester.grade_points)
        ));
    }

    lines.join("\n")
}

/// Course breakdown as tab-separated values
/// Columns: type, credits, grade, grade value, grade points (no headers, no colors)
pub fn format_gpa_tsv(result: &GpaResult) -> String {
    result
        .breakdown
        .iter()
        .map(|course| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                course.course_type.label(),
                course.credits,
                course.grade,
                course.grade_value,
                format_points(course.grade_points)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Semester breakdown as tab-separated values
/// Columns: name, credits, gpa, grade points
pub fn format_cgpa_tsv(result: &CgpaResult) -> String {
    result
        .breakdown
        .iter()
        .map(|semester| {
            format!(
                "{}\t{}\t{:.2}\t{}",
                semester.name,
                semester.credits,
                semester.gpa,
                format_points(semester.grade_points)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// The grading table: letter, points and description per row
pub fn format_grade_table(palette: Option<&Palette>) -> String {
    let mut lines = vec![
        paint("Anna University Grading System", palette.map(|p| p.heading)),
        rule(palette),
    ];
    for bucket in GradeBucket::ALL {
        let letter = format!("{:<8}", bucket.label());
        lines.push(format!(
            "  {}{:>2}  {}",
            paint(&letter, palette.map(|p| p.accent)),
            bucket.points(),
            paint(bucket.description(), palette.map(|p| p.muted))
        ));
    }
    lines.join("\n")
}

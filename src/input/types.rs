use serde::{Deserialize, Serialize};

use crate::config::CreditDefaults;
use crate::grading::{CourseInput, CourseType, GradeLetter, SemesterInput};

/// Course list for a single semester.
///
/// Example YAML:
/// ```yaml
/// semester: "Semester 3"
/// courses:
///   - { type: theory, grade: "A+" }
///   - { type: practical, grade: O }
///   - { type: manual, credits: 2, grade: B }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GpaFile {
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub courses: Vec<CourseRow>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CourseRow {
    #[serde(rename = "type", default)]
    pub course_type: CourseType,
    /// Falls back to the course type's default when omitted
    #[serde(default)]
    pub credits: Option<f64>,
    #[serde(default)]
    pub grade: Option<GradeLetter>,
}

impl CourseRow {
    pub fn resolve(&self, defaults: &CreditDefaults) -> CourseInput {
        CourseInput {
            course_type: self.course_type,
            credits: self
                .credits
                .or_else(|| defaults.credits_for(self.course_type)),
            grade: self.grade,
        }
    }
}

impl GpaFile {
    pub fn course_inputs(&self, defaults: &CreditDefaults) -> Vec<CourseInput> {
        self.courses.iter().map(|row| row.resolve(defaults)).collect()
    }
}

/// Semester list for a cumulative calculation.
///
/// Example YAML:
/// ```yaml
/// semesters:
///   - { name: "Sem 1", credits: 20, gpa: 8.5 }
///   - { name: "Sem 2", credits: 22, gpa: 9.0 }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CgpaFile {
    #[serde(default)]
    pub semesters: Vec<SemesterRow>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SemesterRow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub credits: Option<f64>,
    #[serde(default)]
    pub gpa: Option<f64>,
}

impl CgpaFile {
    pub fn semester_inputs(&self) -> Vec<SemesterInput> {
        self.semesters
            .iter()
            .map(|row| SemesterInput {
                name: row.name.clone(),
                credits: row.credits,
                gpa: row.gpa,
            })
            .collect()
    }
}

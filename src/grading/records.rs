use serde::Serialize;

use super::grades::{CourseType, GradeLetter};

/// One course row as entered. Unset fields stay `None` until validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseInput {
    pub course_type: CourseType,
    pub credits: Option<f64>,
    pub grade: Option<GradeLetter>,
}

impl CourseInput {
    pub fn new(course_type: CourseType, credits: f64, grade: GradeLetter) -> Self {
        Self {
            course_type,
            credits: Some(credits),
            grade: Some(grade),
        }
    }
}

/// One semester row as entered.
#[derive(Debug, Clone, PartialEq)]
pub struct SemesterInput {
    pub name: Option<String>,
    pub credits: Option<f64>,
    pub gpa: Option<f64>,
}

impl SemesterInput {
    pub fn new(name: impl Into<String>, credits: f64, gpa: f64) -> Self {
        Self {
            name: Some(name.into()),
            credits: Some(credits),
            gpa: Some(gpa),
        }
    }
}

/// A course that passed validation: credits in [1, 10] and a grade set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub course_type: CourseType,
    pub credits: f64,
    pub grade: GradeLetter,
}

impl Course {
    pub fn grade_points(&self) -> f64 {
        self.credits * self.grade.value()
    }
}

/// A semester that passed validation: non-blank name, credits >= 1, gpa in [0, 10].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Semester {
    pub name: String,
    pub credits: f64,
    pub gpa: f64,
}

impl Semester {
    pub fn grade_points(&self) -> f64 {
        self.credits * self.gpa
    }
}

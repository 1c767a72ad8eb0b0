use std::fmt;
use thiserror::Error;

use super::records::{Course, CourseInput, Semester, SemesterInput};

pub const MIN_COURSE_CREDITS: f64 = 1.0;
pub const MAX_COURSE_CREDITS: f64 = 10.0;
pub const MIN_SEMESTER_CREDITS: f64 = 1.0;
pub const MAX_GPA: f64 = 10.0;

/// Which kind of row failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Course,
    Semester,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Course => f.write_str("Course"),
            RecordKind::Semester => f.write_str("Semester"),
        }
    }
}

/// The constraint a row broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    MissingCourseFields,
    CreditsOutOfRange,
    MissingSemesterFields,
    GpaOutOfRange,
    CreditsBelowMinimum,
}

impl ValidationReason {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationReason::MissingCourseFields => "missing credits or grade",
            ValidationReason::CreditsOutOfRange => "credits out of range [1,10]",
            ValidationReason::MissingSemesterFields => "missing name/credits/gpa",
            ValidationReason::GpaOutOfRange => "gpa out of range [0,10]",
            ValidationReason::CreditsBelowMinimum => "credits below minimum 1",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First invalid row of a calculation. `index` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} {index}: {reason}")]
pub struct ValidationError {
    pub kind: RecordKind,
    pub index: usize,
    pub reason: ValidationReason,
}

impl ValidationError {
    fn course(index: usize, reason: ValidationReason) -> Self {
        Self {
            kind: RecordKind::Course,
            index,
            reason,
        }
    }

    fn semester(index: usize, reason: ValidationReason) -> Self {
        Self {
            kind: RecordKind::Semester,
            index,
            reason,
        }
    }
}

/// Zero, NaN, infinity and unset all count as "not entered".
fn present_nonzero(value: Option<f64>) -> Option<f64> {
    present(value).filter(|v| *v != 0.0)
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

pub fn validate_course(index: usize, input: &CourseInput) -> Result<Course, ValidationError> {
    let (credits, grade) = match (present_nonzero(input.credits), input.grade) {
        (Some(credits), Some(grade)) => (credits, grade),
        _ => {
            return Err(ValidationError::course(
                index,
                ValidationReason::MissingCourseFields,
            ))
        }
    };

    if !(MIN_COURSE_CREDITS..=MAX_COURSE_CREDITS).contains(&credits) {
        return Err(ValidationError::course(
            index,
            ValidationReason::CreditsOutOfRange,
        ));
    }

    Ok(Course {
        course_type: input.course_type,
        credits,
        grade,
    })
}

pub fn validate_semester(index: usize, input: &SemesterInput) -> Result<Semester, ValidationError> {
    let name = input.name.as_deref().map(str::trim).unwrap_or("");
    let (credits, gpa) = match (present_nonzero(input.credits), present(input.gpa)) {
        (Some(credits), Some(gpa)) if !name.is_empty() => (credits, gpa),
        _ => {
            return Err(ValidationError::semester(
                index,
                ValidationReason::MissingSemesterFields,
            ))
        }
    };

    if !(0.0..=MAX_GPA).contains(&gpa) {
        return Err(ValidationError::semester(
            index,
            ValidationReason::GpaOutOfRange,
        ));
    }

    if credits < MIN_SEMESTER_CREDITS {
        return Err(ValidationError::semester(
            index,
            ValidationReason::CreditsBelowMinimum,
        ));
    }

    Ok(Semester {
        name: name.to_string(),
        credits,
        gpa,
    })
}

/// Validate course rows in order, stopping at the first failure.
pub fn validate_courses(inputs: &[CourseInput]) -> Result<Vec<Course>, ValidationError> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, input)| validate_course(i + 1, input))
        .collect()
}

/// Validate semester rows in order, stopping at the first failure.
pub fn validate_semesters(inputs: &[SemesterInput]) -> Result<Vec<Semester>, ValidationError> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, input)| validate_semester(i + 1, input))
        .collect()
}

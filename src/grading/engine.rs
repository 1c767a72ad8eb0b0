use serde::Serialize;
use std::collections::BTreeMap;

use super::classify::{classify_performance, classify_standing, AcademicStanding, PerformanceLevel};
use super::grades::{CourseType, GradeBucket, GradeLetter};
use super::records::{CourseInput, SemesterInput};
use super::validation::{validate_courses, validate_semesters, ValidationError};

/// Occurrences per grade bucket. Only buckets that were used appear.
pub type GradeDistribution = BTreeMap<GradeBucket, usize>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseContribution {
    pub course_type: CourseType,
    pub credits: f64,
    pub grade: GradeLetter,
    pub grade_value: f64,
    pub grade_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterContribution {
    pub name: String,
    pub credits: f64,
    pub gpa: f64,
    pub grade_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpaResult {
    /// Credit-weighted average, rounded to 2 decimals
    pub gpa: f64,
    pub total_credits: f64,
    pub total_grade_points: f64,
    pub performance: PerformanceLevel,
    pub breakdown: Vec<CourseContribution>,
    pub distribution: GradeDistribution,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CgpaResult {
    /// Credit-weighted average of semester GPAs, rounded to 2 decimals
    pub cgpa: f64,
    pub total_credits: f64,
    pub total_grade_points: f64,
    pub performance: PerformanceLevel,
    pub standing: AcademicStanding,
    pub breakdown: Vec<SemesterContribution>,
}

/// Round half away from zero to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn weighted_average(total_grade_points: f64, total_credits: f64) -> f64 {
    if total_credits > 0.0 {
        round2(total_grade_points / total_credits)
    } else {
        0.0
    }
}

pub fn compute_gpa(courses: &[CourseInput]) -> Result<GpaResult, ValidationError> {
    let courses = validate_courses(courses)?;

    let mut total_credits = 0.0;
    let mut total_grade_points = 0.0;
    let mut breakdown = Vec::with_capacity(courses.len());
    let mut distribution = GradeDistribution::new();

    for course in &courses {
        let grade_points = course.grade_points();
        total_credits += course.credits;
        total_grade_points += grade_points;

        breakdown.push(CourseContribution {
            course_type: course.course_type,
            credits: course.credits,
            grade: course.grade,
            grade_value: course.grade.value(),
            grade_points,
        });
        *distribution.entry(course.grade.bucket()).or_insert(0) += 1;
    }

    let gpa = weighted_average(total_grade_points, total_credits);
    tracing::debug!(
        courses = courses.len(),
        total_credits,
        total_grade_points,
        gpa,
        "computed GPA"
    );

    Ok(GpaResult {
        gpa,
        total_credits,
        total_grade_points,
        performance: classify_performance(gpa),
        breakdown,
        distribution,
    })
}

pub fn compute_cgpa(semesters: &[SemesterInput]) -> Result<CgpaResult, ValidationError> {
    let semesters = validate_semesters(semesters)?;

    let total_credits: f64 = semesters.iter().map(|s| s.credits).sum();
    let total_grade_points: f64 = semesters.iter().map(|s| s.grade_points()).sum();
    let cgpa = weighted_average(total_grade_points, total_credits);

    tracing::debug!(
        semesters = semesters.len(),
        total_credits,
        total_grade_points,
        cgpa,
        "computed CGPA"
    );

    let breakdown = semesters
        .into_iter()
        .map(|semester| SemesterContribution {
            grade_points: semester.grade_points(),
            name: semester.name,
            credits: semester.credits,
            gpa: semester.gpa,
        })
        .collect();

    Ok(CgpaResult {
        cgpa,
        total_credits,
        total_grade_points,
        performance: classify_performance(cgpa),
        standing: classify_standing(cgpa),
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::ValidationReason;

    #[test]
    fn test_gpa_two_courses() {
        let courses = vec![
            CourseInput::new(CourseType::Theory, 3.0, GradeLetter::O),
            CourseInput::new(CourseType::Practical, 4.0, GradeLetter::A),
        ];
        let result = compute_gpa(&courses).unwrap();
        assert_eq!(result.total_credits, 7.0);
        assert_eq!(result.total_grade_points, 62.0);
        assert_eq!(result.gpa, 8.86);
        assert_eq!(result.performance, PerformanceLevel::Excellent);
    }

    #[test]
    fn test_gpa_breakdown_keeps_input_order() {
        let courses = vec![
            CourseInput::new(CourseType::Theory, 3.0, GradeLetter::O),
            CourseInput::new(CourseType::Practical, 4.0, GradeLetter::A),
        ];
        let result = compute_gpa(&courses).unwrap();
        assert_eq!(result.breakdown.len(), 2);
        assert_eq!(result.breakdown[0].grade, GradeLetter::O);
        assert_eq!(result.breakdown[0].grade_points, 30.0);
        assert_eq!(result.breakdown[1].course_type, CourseType::Practical);
        assert_eq!(result.breakdown[1].grade_value, 8.0);
        assert_eq!(result.breakdown[1].grade_points, 32.0);
    }

    #[test]
    fn test_gpa_single_failing_grade() {
        let courses = vec![CourseInput::new(CourseType::Theory, 3.0, GradeLetter::RA)];
        let result = compute_gpa(&courses).unwrap();
        assert_eq!(result.gpa, 0.0);
        assert_eq!(result.performance, PerformanceLevel::Poor);
    }

    #[test]
    fn test_gpa_no_courses() {
        let result = compute_gpa(&[]).unwrap();
        assert_eq!(result.total_credits, 0.0);
        assert_eq!(result.gpa, 0.0);
        assert!(result.breakdown.is_empty());
        assert!(result.distribution.is_empty());
    }

    #[test]
    fn test_gpa_distribution_collapses_failing_grades() {
        let courses = vec![
            CourseInput::new(CourseType::Theory, 3.0, GradeLetter::RA),
            CourseInput::new(CourseType::Theory, 3.0, GradeLetter::SA),
            CourseInput::new(CourseType::Theory, 3.0, GradeLetter::W),
            CourseInput::new(CourseType::Theory, 3.0, GradeLetter::APlus),
            CourseInput::new(CourseType::Theory, 3.0, GradeLetter::O),
            CourseInput::new(CourseType::Theory, 3.0, GradeLetter::O),
        ];
        let result = compute_gpa(&courses).unwrap();
        let entries: Vec<_> = result.distribution.into_iter().collect();
        assert_eq!(
            entries,
            vec![
                (GradeBucket::O, 2),
                (GradeBucket::APlus, 1),
                (GradeBucket::Failed, 3),
            ]
        );
    }

    #[test]
    fn test_gpa_stops_at_first_invalid_course() {
        let courses = vec![
            CourseInput::new(CourseType::Theory, 3.0, GradeLetter::O),
            CourseInput {
                course_type: CourseType::Manual,
                credits: None,
                grade: Some(GradeLetter::A),
            },
            CourseInput::new(CourseType::Manual, 20.0, GradeLetter::A),
        ];
        let err = compute_gpa(&courses).unwrap_err();
        assert_eq!(err.index, 2);
        assert_eq!(err.reason, ValidationReason::MissingCourseFields);
    }

    #[test]
    fn test_gpa_totals_are_exact_sums() {
        let courses: Vec<_> = GradeLetter::ALL
            .iter()
            .enumerate()
            .map(|(i, grade)| CourseInput::new(CourseType::Manual, (i % 10 + 1) as f64, *grade))
            .collect();
        let result = compute_gpa(&courses).unwrap();

        let credits: f64 = courses.iter().filter_map(|c| c.credits).sum();
        let points: f64 = courses
            .iter()
            .map(|c| c.credits.unwrap() * c.grade.unwrap().value())
            .sum();
        assert_eq!(result.total_credits, credits);
        assert_eq!(result.total_grade_points, points);
        assert!((0.0..=10.0).contains(&result.gpa));
    }

    #[test]
    fn test_gpa_is_idempotent() {
        let courses = vec![
            CourseInput::new(CourseType::Theory, 3.0, GradeLetter::BPlus),
            CourseInput::new(CourseType::Project, 1.0, GradeLetter::C),
        ];
        assert_eq!(compute_gpa(&courses).unwrap(), compute_gpa(&courses).unwrap());
    }

    #[test]
    fn test_cgpa_two_semesters() {
        let semesters = vec![
            SemesterInput::new("Sem1", 20.0, 8.5),
            SemesterInput::new("Sem2", 22.0, 9.0),
        ];
        let result = compute_cgpa(&semesters).unwrap();
        assert_eq!(result.total_credits, 42.0);
        assert_eq!(result.total_grade_points, 368.0);
        assert_eq!(result.cgpa, 8.76);
        assert_eq!(result.standing, AcademicStanding::FirstClass);
        assert_eq!(result.performance, PerformanceLevel::Excellent);
        assert_eq!(result.breakdown[1].name, "Sem2");
        assert_eq!(result.breakdown[1].grade_points, 198.0);
    }

    #[test]
    fn test_cgpa_blank_name_is_rejected() {
        let err = compute_cgpa(&[SemesterInput::new("", 10.0, 5.0)]).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.reason.as_str(), "missing name/credits/gpa");
    }

    #[test]
    fn test_cgpa_no_semesters() {
        let result = compute_cgpa(&[]).unwrap();
        assert_eq!(result.cgpa, 0.0);
        assert_eq!(result.standing, AcademicStanding::NeedsImprovement);
    }

    #[test]
    fn test_cgpa_stays_within_scale() {
        let semesters = vec![
            SemesterInput::new("Sem1", 25.0, 10.0),
            SemesterInput::new("Sem2", 1.0, 0.0),
            SemesterInput::new("Sem3", 19.0, 7.25),
        ];
        let result = compute_cgpa(&semesters).unwrap();
        assert!((0.0..=10.0).contains(&result.cgpa));
        assert_eq!(compute_cgpa(&semesters).unwrap(), result);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(8.857142), 8.86);
        assert_eq!(round2(8.761904), 8.76);
        assert_eq!(round2(7.125), 7.13);
        assert_eq!(round2(0.0), 0.0);
    }
}

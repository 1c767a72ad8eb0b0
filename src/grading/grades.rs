use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade awarded for a single course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GradeLetter {
    #[serde(rename = "O")]
    O,
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
    /// Re-appearance required
    #[serde(rename = "RA")]
    RA,
    /// Shortage of attendance
    #[serde(rename = "SA")]
    SA,
    /// Withdrawn
    #[serde(rename = "W")]
    W,
}

/// Grade value table, highest grade first.
const GRADE_VALUES: [(GradeLetter, f64); 9] = [
    (GradeLetter::O, 10.0),
    (GradeLetter::APlus, 9.0),
    (GradeLetter::A, 8.0),
    (GradeLetter::BPlus, 7.0),
    (GradeLetter::B, 6.0),
    (GradeLetter::C, 5.0),
    (GradeLetter::RA, 0.0),
    (GradeLetter::SA, 0.0),
    (GradeLetter::W, 0.0),
];

impl GradeLetter {
    pub const ALL: [GradeLetter; 9] = [
        GradeLetter::O,
        GradeLetter::APlus,
        GradeLetter::A,
        GradeLetter::BPlus,
        GradeLetter::B,
        GradeLetter::C,
        GradeLetter::RA,
        GradeLetter::SA,
        GradeLetter::W,
    ];

    /// Numeric grade value (0-10) from the institutional table
    pub fn value(self) -> f64 {
        GRADE_VALUES
            .iter()
            .find(|(letter, _)| *letter == self)
            .map(|(_, value)| *value)
            .unwrap_or(0.0)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GradeLetter::O => "O",
            GradeLetter::APlus => "A+",
            GradeLetter::A => "A",
            GradeLetter::BPlus => "B+",
            GradeLetter::B => "B",
            GradeLetter::C => "C",
            GradeLetter::RA => "RA",
            GradeLetter::SA => "SA",
            GradeLetter::W => "W",
        }
    }

    /// Distribution bucket this grade is counted under
    pub fn bucket(self) -> GradeBucket {
        match self {
            GradeLetter::O => GradeBucket::O,
            GradeLetter::APlus => GradeBucket::APlus,
            GradeLetter::A => GradeBucket::A,
            GradeLetter::BPlus => GradeBucket::BPlus,
            GradeLetter::B => GradeBucket::B,
            GradeLetter::C => GradeBucket::C,
            GradeLetter::RA | GradeLetter::SA | GradeLetter::W => GradeBucket::Failed,
        }
    }
}

impl fmt::Display for GradeLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade distribution bucket. RA, SA and W share a single bucket.
///
/// Ordering follows the grade table, so a `BTreeMap` keyed by bucket
/// iterates from O down to RA/SA/W.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum GradeBucket {
    #[serde(rename = "O")]
    O,
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "RA/SA/W")]
    Failed,
}

impl GradeBucket {
    pub const ALL: [GradeBucket; 7] = [
        GradeBucket::O,
        GradeBucket::APlus,
        GradeBucket::A,
        GradeBucket::BPlus,
        GradeBucket::B,
        GradeBucket::C,
        GradeBucket::Failed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GradeBucket::O => "O",
            GradeBucket::APlus => "A+",
            GradeBucket::A => "A",
            GradeBucket::BPlus => "B+",
            GradeBucket::B => "B",
            GradeBucket::C => "C",
            GradeBucket::Failed => "RA/SA/W",
        }
    }

    pub fn points(self) -> f64 {
        match self {
            GradeBucket::O => 10.0,
            GradeBucket::APlus => 9.0,
            GradeBucket::A => 8.0,
            GradeBucket::BPlus => 7.0,
            GradeBucket::B => 6.0,
            GradeBucket::C => 5.0,
            GradeBucket::Failed => 0.0,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GradeBucket::O => "Outstanding",
            GradeBucket::APlus => "Excellent",
            GradeBucket::A => "Very Good",
            GradeBucket::BPlus => "Good",
            GradeBucket::B => "Average",
            GradeBucket::C => "Below Average",
            GradeBucket::Failed => "Fail/Absent/Withdrawn",
        }
    }
}

impl fmt::Display for GradeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of course, which decides the default credit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    #[default]
    Theory,
    Practical,
    Project,
    /// Credits entered by hand; no default
    Manual,
}

impl CourseType {
    /// Credits a course of this type carries unless stated otherwise
    pub fn default_credits(self) -> Option<f64> {
        match self {
            CourseType::Theory => Some(3.0),
            CourseType::Practical => Some(4.0),
            CourseType::Project => Some(1.0),
            CourseType::Manual => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CourseType::Theory => "Theory",
            CourseType::Practical => "Practical",
            CourseType::Project => "Project",
            CourseType::Manual => "Manual",
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_values_match_table() {
        assert_eq!(GradeLetter::O.value(), 10.0);
        assert_eq!(GradeLetter::APlus.value(), 9.0);
        assert_eq!(GradeLetter::A.value(), 8.0);
        assert_eq!(GradeLetter::BPlus.value(), 7.0);
        assert_eq!(GradeLetter::B.value(), 6.0);
        assert_eq!(GradeLetter::C.value(), 5.0);
        assert_eq!(GradeLetter::RA.value(), 0.0);
        assert_eq!(GradeLetter::SA.value(), 0.0);
        assert_eq!(GradeLetter::W.value(), 0.0);
    }

    #[test]
    fn test_every_letter_has_a_table_entry() {
        for letter in GradeLetter::ALL {
            assert!(GRADE_VALUES.iter().any(|(l, _)| *l == letter));
        }
    }

    #[test]
    fn test_bucket_points_agree_with_letters() {
        for letter in GradeLetter::ALL {
            assert_eq!(letter.bucket().points(), letter.value());
        }
    }

    #[test]
    fn test_failing_grades_share_bucket() {
        assert_eq!(GradeLetter::RA.bucket(), GradeBucket::Failed);
        assert_eq!(GradeLetter::SA.bucket(), GradeBucket::Failed);
        assert_eq!(GradeLetter::W.bucket(), GradeBucket::Failed);
        assert_eq!(GradeBucket::Failed.label(), "RA/SA/W");
    }

    #[test]
    fn test_bucket_order_follows_table() {
        let mut sorted = GradeBucket::ALL;
        sorted.sort();
        assert_eq!(sorted, GradeBucket::ALL);
    }

    #[test]
    fn test_default_credits() {
        assert_eq!(CourseType::Theory.default_credits(), Some(3.0));
        assert_eq!(CourseType::Practical.default_credits(), Some(4.0));
        assert_eq!(CourseType::Project.default_credits(), Some(1.0));
        assert_eq!(CourseType::Manual.default_credits(), None);
    }

    #[test]
    fn test_grade_letter_parse() {
        let grade: GradeLetter = serde_saphyr::from_str("\"A+\"").unwrap();
        assert_eq!(grade, GradeLetter::APlus);
        let grade: GradeLetter = serde_saphyr::from_str("RA").unwrap();
        assert_eq!(grade, GradeLetter::RA);
        assert!(serde_saphyr::from_str::<GradeLetter>("D").is_err());
    }

    #[test]
    fn test_course_type_parse() {
        let kind: CourseType = serde_saphyr::from_str("practical").unwrap();
        assert_eq!(kind, CourseType::Practical);
    }
}

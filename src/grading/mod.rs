pub mod classify;
pub mod engine;
pub mod grades;
pub mod records;
pub mod validation;

pub use classify::{classify_performance, classify_standing, AcademicStanding, PerformanceLevel};
pub use engine::{compute_cgpa, compute_gpa, CgpaResult, GpaResult, GradeDistribution};
pub use grades::{CourseType, GradeBucket, GradeLetter};
pub use records::{Course, CourseInput, Semester, SemesterInput};
pub use validation::{RecordKind, ValidationError, ValidationReason};

use serde::Serialize;
use std::fmt;

/// Performance tier for a GPA or CGPA, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum PerformanceLevel {
    #[serde(rename = "Poor Performance")]
    Poor,
    #[serde(rename = "Below Average Performance")]
    BelowAverage,
    #[serde(rename = "Average Performance")]
    Average,
    #[serde(rename = "Good Performance")]
    Good,
    #[serde(rename = "Very Good Performance")]
    VeryGood,
    #[serde(rename = "Excellent Performance")]
    Excellent,
    #[serde(rename = "Outstanding Performance")]
    Outstanding,
}

/// Threshold ladder, highest threshold first. First match wins.
const PERFORMANCE_LADDER: [(f64, PerformanceLevel); 6] = [
    (9.5, PerformanceLevel::Outstanding),
    (8.5, PerformanceLevel::Excellent),
    (7.5, PerformanceLevel::VeryGood),
    (6.5, PerformanceLevel::Good),
    (5.5, PerformanceLevel::Average),
    (4.5, PerformanceLevel::BelowAverage),
];

impl PerformanceLevel {
    pub fn label(self) -> &'static str {
        match self {
            PerformanceLevel::Outstanding => "Outstanding Performance",
            PerformanceLevel::Excellent => "Excellent Performance",
            PerformanceLevel::VeryGood => "Very Good Performance",
            PerformanceLevel::Good => "Good Performance",
            PerformanceLevel::Average => "Average Performance",
            PerformanceLevel::BelowAverage => "Below Average Performance",
            PerformanceLevel::Poor => "Poor Performance",
        }
    }

    /// Indicator color as (r, g, b), green for the top tiers through red
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            PerformanceLevel::Outstanding => (0x4C, 0xAF, 0x50),
            PerformanceLevel::Excellent => (0x8B, 0xC3, 0x4A),
            PerformanceLevel::VeryGood => (0xCD, 0xDC, 0x39),
            PerformanceLevel::Good => (0xFF, 0xC1, 0x07),
            PerformanceLevel::Average => (0xFF, 0x98, 0x00),
            PerformanceLevel::BelowAverage => (0xFF, 0x57, 0x22),
            PerformanceLevel::Poor => (0xF4, 0x43, 0x36),
        }
    }
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Honors tier for a CGPA, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum AcademicStanding {
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    #[serde(rename = "Third Class")]
    ThirdClass,
    #[serde(rename = "Second Class")]
    SecondClass,
    #[serde(rename = "First Class")]
    FirstClass,
    #[serde(rename = "First Class with Distinction")]
    FirstClassWithDistinction,
}

const STANDING_LADDER: [(f64, AcademicStanding); 4] = [
    (9.0, AcademicStanding::FirstClassWithDistinction),
    (7.5, AcademicStanding::FirstClass),
    (6.5, AcademicStanding::SecondClass),
    (5.0, AcademicStanding::ThirdClass),
];

impl AcademicStanding {
    pub fn label(self) -> &'static str {
        match self {
            AcademicStanding::FirstClassWithDistinction => "First Class with Distinction",
            AcademicStanding::FirstClass => "First Class",
            AcademicStanding::SecondClass => "Second Class",
            AcademicStanding::ThirdClass => "Third Class",
            AcademicStanding::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for AcademicStanding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify_performance(score: f64) -> PerformanceLevel {
    PERFORMANCE_LADDER
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, level)| *level)
        .unwrap_or(PerformanceLevel::Poor)
}

pub fn classify_standing(cgpa: f64) -> AcademicStanding {
    STANDING_LADDER
        .iter()
        .find(|(threshold, _)| cgpa >= *threshold)
        .map(|(_, standing)| *standing)
        .unwrap_or(AcademicStanding::NeedsImprovement)
}

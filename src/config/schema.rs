use serde::{Deserialize, Serialize};

use crate::grading::CourseType;
use crate::output::OutputFormat;

/// User configuration.
///
/// Every key is optional. Example YAML:
/// ```yaml
/// semester_name: "Semester 5"
/// format: text
/// default_credits:
///   theory: 4
///   practical: 2
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Heading used for GPA results when the input file names no semester
    #[serde(default)]
    pub semester_name: Option<String>,

    /// Output format used when `--format` is not given
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Overrides for the credits a course type carries when a row omits them
    #[serde(default)]
    pub default_credits: Option<CreditDefaults>,
}

impl Config {
    pub fn semester_name(&self) -> &str {
        self.semester_name.as_deref().unwrap_or(DEFAULT_SEMESTER_NAME)
    }

    pub fn credit_defaults(&self) -> CreditDefaults {
        self.default_credits.clone().unwrap_or_default()
    }
}

pub const DEFAULT_SEMESTER_NAME: &str = "Current Semester";

/// Per course type credit overrides. Manual courses never get a default.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CreditDefaults {
    #[serde(default)]
    pub theory: Option<f64>,
    #[serde(default)]
    pub practical: Option<f64>,
    #[serde(default)]
    pub project: Option<f64>,
}

impl CreditDefaults {
    pub fn credits_for(&self, course_type: CourseType) -> Option<f64> {
        let configured = match course_type {
            CourseType::Theory => self.theory,
            CourseType::Practical => self.practical,
            CourseType::Project => self.project,
            CourseType::Manual => None,
        };
        configured.or_else(|| course_type.default_credits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.semester_name(), "Current Semester");
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
semester_name: "Semester 5"
format: json
default_credits:
  theory: 4
  project: 2
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.semester_name(), "Semester 5");
        assert_eq!(config.format, Some(OutputFormat::Json));

        let defaults = config.credit_defaults();
        assert_eq!(defaults.credits_for(CourseType::Theory), Some(4.0));
        assert_eq!(defaults.credits_for(CourseType::Practical), Some(4.0));
        assert_eq!(defaults.credits_for(CourseType::Project), Some(2.0));
        assert_eq!(defaults.credits_for(CourseType::Manual), None);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("queries: []");
        assert!(result.is_err());
    }

    #[test]
    fn test_builtin_credit_defaults() {
        let defaults = CreditDefaults::default();
        assert_eq!(defaults.credits_for(CourseType::Theory), Some(3.0));
        assert_eq!(defaults.credits_for(CourseType::Practical), Some(4.0));
        assert_eq!(defaults.credits_for(CourseType::Project), Some(1.0));
    }
}

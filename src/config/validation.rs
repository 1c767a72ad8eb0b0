use super::schema::Config;
use crate::grading::validation::{MAX_COURSE_CREDITS, MIN_COURSE_CREDITS};

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref name) = config.semester_name {
        if name.trim().is_empty() {
            errors.push("semester_name: must not be blank".to_string());
        }
    }

    if let Some(ref defaults) = config.default_credits {
        let entries = [
            ("theory", defaults.theory),
            ("practical", defaults.practical),
            ("project", defaults.project),
        ];
        for (key, value) in entries {
            if let Some(credits) = value {
                if !(MIN_COURSE_CREDITS..=MAX_COURSE_CREDITS).contains(&credits) {
                    errors.push(format!(
                        "default_credits.{}: {} is outside [{}, {}]",
                        key, credits, MIN_COURSE_CREDITS, MAX_COURSE_CREDITS
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CreditDefaults;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_blank_semester_name() {
        let config = Config {
            semester_name: Some("  ".to_string()),
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("semester_name"));
    }

    #[test]
    fn test_credit_default_out_of_range() {
        let config = Config {
            default_credits: Some(CreditDefaults {
                theory: Some(12.0),
                practical: Some(4.0),
                project: None,
            }),
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("default_credits.theory"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = Config {
            semester_name: Some(String::new()),
            format: None,
            default_credits: Some(CreditDefaults {
                theory: Some(0.0),
                practical: None,
                project: Some(11.0),
            }),
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}

//! JSON configuration.
//!
//! Every section is optional; missing keys take the built-in defaults.
//!
//! ```json
//! {
//!   "extractor": { "extra_medicines": ["keppra", "zyrtec"] },
//!   "schedule": { "reminder_window_minutes": 10 }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::extractor::MedicineVocabulary;
use crate::schedule::ScheduleConfig;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub extractor: ExtractorConfig,
    pub schedule: ScheduleConfig,
}

impl Config {
    /// Parse and validate configuration from a JSON string.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.extractor.validate()?;
        self.schedule.validate()
    }
}

/// Medicine vocabulary settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Names appended after the curated list
    pub extra_medicines: Vec<String>,
    /// Use only `extra_medicines`, dropping the curated list
    pub replace_default_medicines: bool,
}

impl ExtractorConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        let has_extra = self.extra_medicines.iter().any(|m| !m.trim().is_empty());
        if self.replace_default_medicines && !has_extra {
            return Err(ConfigError::Invalid(
                "replace_default_medicines requires at least one extra medicine".into(),
            ));
        }
        Ok(())
    }

    /// Build the vocabulary this configuration describes.
    pub fn build_vocabulary(&self) -> Result<MedicineVocabulary, regex::Error> {
        let mut vocabulary = if self.replace_default_medicines {
            MedicineVocabulary::empty()
        } else {
            MedicineVocabulary::new()
        };

        let mut added = 0;
        for name in &self.extra_medicines {
            if vocabulary.add_medicine(name)? {
                added += 1;
            }
        }
        if added > 0 {
            tracing::info!(added, total = vocabulary.len(), "extended medicine vocabulary");
        }

        Ok(vocabulary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.schedule.default_course_days, 30);
    }

    #[test]
    fn test_extra_medicines() {
        let config =
            Config::from_json_str(r#"{"extractor":{"extra_medicines":["Keppra","aspirin"]}}"#)
                .unwrap();
        let vocab = config.extractor.build_vocabulary().unwrap();

        assert!(vocab.contains("keppra"));
        // aspirin is already curated
        assert_eq!(vocab.len(), crate::extractor::DEFAULT_MEDICINES.len() + 1);
    }

    #[test]
    fn test_replace_defaults() {
        let config = Config::from_json_str(
            r#"{"extractor":{"extra_medicines":["zyrtec"],"replace_default_medicines":true}}"#,
        )
        .unwrap();
        let vocab = config.extractor.build_vocabulary().unwrap();

        assert_eq!(vocab.len(), 1);
        assert!(!vocab.contains("aspirin"));
    }

    #[test]
    fn test_replace_without_extras_is_invalid() {
        let err = Config::from_json_str(r#"{"extractor":{"replace_default_medicines":true}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_out_of_range_schedule_is_invalid() {
        for json in [
            r#"{"schedule":{"default_course_days":9223372036854775807}}"#,
            r#"{"schedule":{"meal_offset_minutes":9223372036854775807}}"#,
            r#"{"schedule":{"reminder_window_minutes":9223372036854775807}}"#,
        ] {
            let err = Config::from_json_str(json).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "accepted {}", json);
        }
    }

    #[test]
    fn test_bad_json() {
        let err = Config::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"schedule":{{"reminder_window_minutes":5}},"extractor":{{"extra_medicines":["keppra"]}}}}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.schedule.reminder_window_minutes, 5);
        assert_eq!(config.extractor.extra_medicines, vec!["keppra"]);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load("/definitely/not/here/medvoice.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

//! Medvoice Core Library
//!
//! Rule-based extraction of medication details from spoken or typed
//! sentences, plus the reminder and calendar rules applied to saved entries.
//!
//! # Architecture
//!
//! ```text
//! Utterance → Annotator → Annotation ─┬─→ medicine name  (dictionary → entity → verb → noun chunk)
//!                                     ├─→ dosage
//!                                     ├─→ frequency
//!                                     ├─→ timing ──────────────→ TimingInfo → reminder / cutoff
//!                                     ├─→ duration ────────────→ course end date
//!                                     └─→ instructions
//!                                                 │
//!                                          MedicationRecord
//! ```
//!
//! Field extractors are pure functions of the annotation; none reads another
//! field's result.
//!
//! # Modules
//!
//! - [`annotator`]: Annotator trait and the built-in rule annotator
//! - [`extractor`]: Pattern tables, medicine vocabulary, field extractors
//! - [`models`]: Domain types (Annotation, MedicationRecord, MedicationEntry)
//! - [`schedule`]: Reminder times, missed doses, course length, day views
//! - [`config`]: JSON configuration

pub mod annotator;
pub mod config;
pub mod extractor;
pub mod models;
pub mod schedule;

// Re-export commonly used types
pub use annotator::{AnnotateError, Annotator, RuleAnnotator};
pub use config::{Config, ConfigError, ExtractorConfig};
pub use extractor::{ExtractorError, MedicationExtractor, MedicineVocabulary, NameStrategy};
pub use models::{Annotation, MedicationEntry, MedicationRecord, Token};
pub use schedule::{DaySchedule, ScheduleConfig, ScheduleError, TimingInfo};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, RwLock};

/// Clock format used across the FFI boundary.
const FFI_TIME_FORMAT: &str = "%H:%M";

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MedvoiceError {
    #[error("Annotation error: {0}")]
    AnnotationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<extractor::ExtractorError> for MedvoiceError {
    fn from(e: extractor::ExtractorError) -> Self {
        match e {
            ExtractorError::Annotation(e) => MedvoiceError::AnnotationError(e.to_string()),
            ExtractorError::Pattern(e) => MedvoiceError::InvalidInput(e.to_string()),
            ExtractorError::Config(e) => MedvoiceError::ConfigurationError(e.to_string()),
        }
    }
}

impl From<config::ConfigError> for MedvoiceError {
    fn from(e: config::ConfigError) -> Self {
        MedvoiceError::ConfigurationError(e.to_string())
    }
}

impl From<schedule::ScheduleError> for MedvoiceError {
    fn from(e: schedule::ScheduleError) -> Self {
        MedvoiceError::InvalidInput(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for MedvoiceError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        MedvoiceError::InternalError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Extract medication details with the default vocabulary.
#[uniffi::export]
pub fn extract_medication_info(text: String) -> FfiMedicationRecord {
    extractor::extract_medication_info(&text).into()
}

/// Create an extractor, optionally configured from a JSON document.
#[uniffi::export]
pub fn open_extractor(config_json: Option<String>) -> Result<Arc<MedvoiceCore>, MedvoiceError> {
    let config = match config_json {
        Some(json) => Config::from_json_str(&json)?,
        None => Config::default(),
    };
    Ok(Arc::new(MedvoiceCore::from_config(&config)?))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe extractor wrapper for FFI.
#[derive(uniffi::Object)]
pub struct MedvoiceCore {
    extractor: RwLock<MedicationExtractor>,
    schedule: ScheduleConfig,
}

impl MedvoiceCore {
    fn from_config(config: &Config) -> Result<Self, MedvoiceError> {
        Ok(Self {
            extractor: RwLock::new(MedicationExtractor::from_config(&config.extractor)?),
            schedule: config.schedule.clone(),
        })
    }
}

#[uniffi::export]
impl MedvoiceCore {
    // =========================================================================
    // Extraction
    // =========================================================================

    /// Extract medication details from one utterance.
    pub fn extract(&self, text: String) -> Result<FfiMedicationRecord, MedvoiceError> {
        let extractor = self.extractor.read()?;
        Ok(extractor.try_extract(&text)?.into())
    }

    /// Add a medicine name to the vocabulary. Returns false if already known.
    pub fn add_medicine(&self, name: String) -> Result<bool, MedvoiceError> {
        let mut extractor = self.extractor.write()?;
        Ok(extractor.add_medicine(&name)?)
    }

    /// Number of names in the vocabulary.
    pub fn medicine_count(&self) -> Result<u32, MedvoiceError> {
        let extractor = self.extractor.read()?;
        Ok(extractor.vocabulary().len() as u32)
    }

    // =========================================================================
    // Schedule
    // =========================================================================

    /// Structured reading of a timing phrase.
    pub fn parse_timing(&self, timing: String) -> FfiTimingInfo {
        TimingInfo::parse(&timing).into()
    }

    /// Reminder clock time ("HH:MM") for a timing phrase.
    pub fn reminder_time(&self, timing: String) -> String {
        self.schedule
            .reminder_time(&TimingInfo::parse(&timing))
            .format(FFI_TIME_FORMAT)
            .to_string()
    }

    /// Missed-dose cutoff ("HH:MM") for a timing phrase.
    pub fn missed_cutoff(&self, timing: String) -> String {
        self.schedule
            .missed_cutoff(&TimingInfo::parse(&timing))
            .format(FFI_TIME_FORMAT)
            .to_string()
    }

    /// Course end date ("YYYY-MM-DD") for a start date and duration phrase.
    pub fn default_end_date(
        &self,
        start_date: String,
        duration: String,
    ) -> Result<String, MedvoiceError> {
        let start = schedule::parse_date(&start_date)?;
        let end = schedule::default_end_date(start, &duration, &self.schedule);
        Ok(end.format("%Y-%m-%d").to_string())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe medication record.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiMedicationRecord {
    pub medicine_name: String,
    pub dosage: String,
    pub frequency: String,
    pub timing: String,
    pub duration: String,
    pub instructions: String,
}

impl From<MedicationRecord> for FfiMedicationRecord {
    fn from(record: MedicationRecord) -> Self {
        Self {
            medicine_name: record.medicine_name,
            dosage: record.dosage,
            frequency: record.frequency,
            timing: record.timing,
            duration: record.duration,
            instructions: record.instructions,
        }
    }
}

impl From<FfiMedicationRecord> for MedicationRecord {
    fn from(record: FfiMedicationRecord) -> Self {
        MedicationRecord {
            medicine_name: record.medicine_name,
            dosage: record.dosage,
            frequency: record.frequency,
            timing: record.timing,
            duration: record.duration,
            instructions: record.instructions,
        }
    }
}

/// FFI-safe timing reading.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiTimingInfo {
    pub period: Option<String>,
    pub relation: Option<String>,
    pub event: Option<String>,
}

impl From<TimingInfo> for FfiTimingInfo {
    fn from(info: TimingInfo) -> Self {
        Self {
            period: info.period.map(|p| p.as_str().to_string()),
            relation: info.relation.map(|r| r.as_str().to_string()),
            event: info.event.map(|e| e.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffi_extract() {
        let record = extract_medication_info("Take Metformin 500mg twice a day".into());
        assert_eq!(record.medicine_name, "Metformin");
        assert_eq!(record.dosage, "500mg");
    }

    #[test]
    fn test_open_extractor_default() {
        let core = open_extractor(None).unwrap();
        let count = core.medicine_count().unwrap();

        assert!(core.add_medicine("Keppra".into()).unwrap());
        assert!(!core.add_medicine("keppra".into()).unwrap());
        assert_eq!(core.medicine_count().unwrap(), count + 1);

        let record = core.extract("keppra 250 mg at night".into()).unwrap();
        assert_eq!(record.medicine_name, "keppra");
        assert_eq!(record.timing, "at night");
    }

    #[test]
    fn test_open_extractor_with_config() {
        let core = open_extractor(Some(
            r#"{"extractor":{"extra_medicines":["zyrtec"],"replace_default_medicines":true},
                "schedule":{"meal_offset_minutes":15}}"#
                .into(),
        ))
        .unwrap();

        assert_eq!(core.medicine_count().unwrap(), 1);
        assert_eq!(core.reminder_time("before breakfast".into()), "07:15");
    }

    #[test]
    fn test_open_extractor_bad_config() {
        let err = open_extractor(Some("{oops".into())).err().unwrap();
        assert!(matches!(err, MedvoiceError::ConfigurationError(_)));
    }

    #[test]
    fn test_open_extractor_rejects_out_of_range_schedule() {
        let err = open_extractor(Some(
            r#"{"schedule":{"default_course_days":9223372036854775807}}"#.into(),
        ))
        .err()
        .unwrap();
        assert!(matches!(err, MedvoiceError::ConfigurationError(_)));
    }

    #[test]
    fn test_schedule_surface() {
        let core = open_extractor(None).unwrap();

        let info = core.parse_timing("after dinner".into());
        assert_eq!(info.period, None);
        assert_eq!(info.relation.as_deref(), Some("after"));
        assert_eq!(info.event.as_deref(), Some("dinner"));

        assert_eq!(core.reminder_time("after dinner".into()), "19:00");
        assert_eq!(core.missed_cutoff("in the morning".into()), "11:00");
        assert_eq!(
            core.default_end_date("2024-03-01".into(), "for 2 weeks".into())
                .unwrap(),
            "2024-03-15"
        );
        assert!(matches!(
            core.default_end_date("March 1".into(), "".into()),
            Err(MedvoiceError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_record_conversion() {
        let record = MedicationRecord {
            medicine_name: "Aspirin".into(),
            dosage: "81mg".into(),
            ..Default::default()
        };
        let ffi: FfiMedicationRecord = record.clone().into();
        assert_eq!(MedicationRecord::from(ffi), record);
    }
}

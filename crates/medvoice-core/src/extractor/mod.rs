//! Medication information extractor.
//!
//! Pipeline: Annotation → six independent field extractors → MedicationRecord
//!
//! Field extractors only read the shared annotation; none depends on another
//! field's result.

mod fields;
mod medicine;
pub mod patterns;
mod vocabulary;
pub mod window;

pub use fields::*;
pub use medicine::*;
pub use vocabulary::*;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::annotator::{AnnotateError, Annotator, RuleAnnotator};
use crate::config::{ConfigError, ExtractorConfig};
use crate::models::{Annotation, MedicationRecord};

/// Extractor errors.
///
/// "Nothing found" is not an error: missing fields are empty strings.
#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("Annotation failed: {0}")]
    Annotation(#[from] AnnotateError),

    #[error("Invalid medicine pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type ExtractorResult<T> = Result<T, ExtractorError>;

/// Turns free-form medication sentences into [`MedicationRecord`]s.
pub struct MedicationExtractor<A = RuleAnnotator> {
    annotator: A,
    vocabulary: MedicineVocabulary,
}

impl Default for MedicationExtractor<RuleAnnotator> {
    fn default() -> Self {
        Self::new()
    }
}

impl MedicationExtractor<RuleAnnotator> {
    /// Create an extractor with the built-in annotator and default vocabulary.
    pub fn new() -> Self {
        Self::with_annotator(RuleAnnotator::new())
    }

    /// Create an extractor with the built-in annotator and a configured vocabulary.
    pub fn from_config(config: &ExtractorConfig) -> ExtractorResult<Self> {
        config.validate()?;
        Ok(Self::new().with_vocabulary(config.build_vocabulary()?))
    }
}

impl<A: Annotator> MedicationExtractor<A> {
    /// Create an extractor around any annotator, with the default vocabulary.
    pub fn with_annotator(annotator: A) -> Self {
        Self {
            annotator,
            vocabulary: MedicineVocabulary::new(),
        }
    }

    /// Replace the medicine vocabulary.
    pub fn with_vocabulary(mut self, vocabulary: MedicineVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Extract, surfacing annotation failures.
    pub fn try_extract(&self, text: &str) -> ExtractorResult<MedicationRecord> {
        let annotation = self.annotator.annotate(text)?;
        Ok(self.extract_from_annotation(&annotation))
    }

    /// Extract, degrading to an empty record if annotation fails.
    pub fn extract(&self, text: &str) -> MedicationRecord {
        match self.try_extract(text) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(
                    annotator = self.annotator.name(),
                    error = %e,
                    "annotation failed, returning empty medication record"
                );
                MedicationRecord::default()
            }
        }
    }

    /// Run the six field extractors over an existing annotation.
    pub fn extract_from_annotation(&self, annotation: &Annotation) -> MedicationRecord {
        let record = MedicationRecord {
            medicine_name: extract_medicine_name(annotation, &self.vocabulary),
            dosage: extract_dosage(annotation),
            frequency: extract_frequency(annotation),
            timing: extract_timing(annotation),
            duration: extract_duration(annotation),
            instructions: extract_instructions(annotation),
        };

        tracing::debug!(
            tokens = annotation.len(),
            filled = record.filled_count(),
            "medication record extracted"
        );

        record
    }

    /// Add a medicine name to the vocabulary. Returns false if already known.
    pub fn add_medicine(&mut self, name: &str) -> ExtractorResult<bool> {
        Ok(self.vocabulary.add_medicine(name)?)
    }

    /// Get the vocabulary for direct access.
    pub fn vocabulary(&self) -> &MedicineVocabulary {
        &self.vocabulary
    }

    /// Get the annotator for direct access.
    pub fn annotator(&self) -> &A {
        &self.annotator
    }
}

static DEFAULT_EXTRACTOR: Lazy<MedicationExtractor> = Lazy::new(MedicationExtractor::new);

/// Extract medication details with the built-in annotator and default vocabulary.
pub fn extract_medication_info(text: &str) -> MedicationRecord {
    DEFAULT_EXTRACTOR.extract(text)
}

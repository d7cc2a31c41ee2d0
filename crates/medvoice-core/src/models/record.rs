//! Medication record produced by extraction.

use serde::{Deserialize, Serialize};

/// Field names of a [`MedicationRecord`], in output order.
pub const RECORD_FIELDS: [&str; 6] = [
    "medicine_name",
    "dosage",
    "frequency",
    "timing",
    "duration",
    "instructions",
];

/// Structured medication details extracted from one utterance.
///
/// Every field is independently optional; "not found" is the empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicationRecord {
    /// Medicine or supplement name (e.g., "Lisinopril")
    #[serde(default)]
    pub medicine_name: String,
    /// Amount per dose (e.g., "10mg", "two tablets")
    #[serde(default)]
    pub dosage: String,
    /// How often (e.g., "once daily", "every 8 hours")
    #[serde(default)]
    pub frequency: String,
    /// When (e.g., "in the morning", "with meals")
    #[serde(default)]
    pub timing: String,
    /// How long (e.g., "for 3 months", "until finished")
    #[serde(default)]
    pub duration: String,
    /// Special instructions, fragments joined with "; "
    #[serde(default)]
    pub instructions: String,
}

impl MedicationRecord {
    /// All six fields as (name, value) pairs, in output order.
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            (RECORD_FIELDS[0], self.medicine_name.as_str()),
            (RECORD_FIELDS[1], self.dosage.as_str()),
            (RECORD_FIELDS[2], self.frequency.as_str()),
            (RECORD_FIELDS[3], self.timing.as_str()),
            (RECORD_FIELDS[4], self.duration.as_str()),
            (RECORD_FIELDS[5], self.instructions.as_str()),
        ]
    }

    /// True when nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_empty())
    }

    /// Number of non-empty fields.
    pub fn filled_count(&self) -> usize {
        self.fields()
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .count()
    }
}

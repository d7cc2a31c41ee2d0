//! Scheduled medication entries.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::record::MedicationRecord;

/// A confirmed medication placed on the user's calendar.
///
/// Built by the intake workflow from an extracted (and possibly edited)
/// record; stored by the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicationEntry {
    /// Unique entry ID
    pub id: String,
    /// Extracted medication details
    #[serde(flatten)]
    pub record: MedicationRecord,
    /// First day of the course (inclusive)
    pub start_date: NaiveDate,
    /// Last day of the course (inclusive)
    pub end_date: NaiveDate,
    /// Creation timestamp
    pub created_at: String,
    /// When the most recent dose was marked taken
    pub taken_at: Option<NaiveDateTime>,
}

impl MedicationEntry {
    /// Create a new entry for the given course.
    pub fn new(record: MedicationRecord, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            record,
            start_date,
            end_date,
            created_at: chrono::Utc::now().to_rfc3339(),
            taken_at: None,
        }
    }

    /// Check if the course covers `date` (both ends inclusive).
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Check if a dose was marked taken on `date`.
    pub fn taken_on(&self, date: NaiveDate) -> bool {
        self.taken_at.is_some_and(|at| at.date() == date)
    }

    /// Record a dose as taken.
    pub fn mark_taken(&mut self, at: NaiveDateTime) {
        self.taken_at = Some(at);
    }

    /// Lowercased timing text, used for calendar grouping.
    pub fn timing_lower(&self) -> String {
        self.record.timing.to_lowercase()
    }
}

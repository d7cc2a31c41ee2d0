//! Course length and calendar views.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::MedicationEntry;

use super::ScheduleConfig;

/// Longest course accepted from a spoken duration (100 years).
pub const MAX_COURSE_DAYS: i64 = 36_500;

/// Course length in days read from a duration phrase, if it can be read.
///
/// All digits in the phrase are joined into one number `n`. A phrase
/// containing "day" means `n` days, then "week" means `7n`, then "month" `30n`.
pub fn course_days(duration: &str) -> Option<i64> {
    let lower = duration.to_lowercase();
    let digits: String = lower.chars().filter(char::is_ascii_digit).collect();
    let n: i64 = digits.parse().ok()?;

    let days = if lower.contains("day") {
        Some(n)
    } else if lower.contains("week") {
        n.checked_mul(7)
    } else if lower.contains("month") {
        n.checked_mul(30)
    } else {
        None
    };

    days.filter(|d| (0..=MAX_COURSE_DAYS).contains(d))
}

/// Last day of a course starting on `start`.
///
/// Falls back to `default_course_days` when the duration cannot be read.
pub fn default_end_date(start: NaiveDate, duration: &str, config: &ScheduleConfig) -> NaiveDate {
    let days = course_days(duration).unwrap_or(config.default_course_days);
    Duration::try_days(days)
        .and_then(|delta| start.checked_add_signed(delta))
        .unwrap_or(start)
}

/// Active entries for one day, grouped by part of the day.
///
/// Grouping is a substring test on the timing text, so an entry can sit in
/// several groups. Entries matching none go to `other`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DaySchedule<'a> {
    pub date: Option<NaiveDate>,
    pub morning: Vec<&'a MedicationEntry>,
    pub afternoon: Vec<&'a MedicationEntry>,
    pub evening: Vec<&'a MedicationEntry>,
    pub night: Vec<&'a MedicationEntry>,
    pub other: Vec<&'a MedicationEntry>,
}

impl<'a> DaySchedule<'a> {
    pub fn for_date(entries: &'a [MedicationEntry], date: NaiveDate) -> Self {
        let mut day = DaySchedule {
            date: Some(date),
            ..Default::default()
        };

        for entry in entries.iter().filter(|e| e.is_active_on(date)) {
            let timing = entry.timing_lower();
            let mut placed = false;

            for (word, group) in [
                ("morning", &mut day.morning),
                ("afternoon", &mut day.afternoon),
                ("evening", &mut day.evening),
                ("night", &mut day.night),
            ] {
                if timing.contains(word) {
                    group.push(entry);
                    placed = true;
                }
            }

            if !placed {
                day.other.push(entry);
            }
        }

        day
    }

    /// Distinct entries scheduled on this day.
    pub fn len(&self) -> usize {
        let mut ids: Vec<&str> = self
            .groups()
            .iter()
            .flat_map(|group| group.iter().map(|e| e.id.as_str()))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups().iter().all(|group| group.is_empty())
    }

    /// Group sizes: morning, afternoon, evening, night, other.
    pub fn counts(&self) -> [usize; 5] {
        self.groups().map(|group| group.len())
    }

    fn groups(&self) -> [&Vec<&'a MedicationEntry>; 5] {
        [
            &self.morning,
            &self.afternoon,
            &self.evening,
            &self.night,
            &self.other,
        ]
    }
}

/// Monday-to-Sunday schedules for the week containing `date`.
pub fn week_schedule(entries: &[MedicationEntry], date: NaiveDate) -> Vec<DaySchedule<'_>> {
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    monday
        .iter_days()
        .take(7)
        .map(|day| DaySchedule::for_date(entries, day))
        .collect()
}

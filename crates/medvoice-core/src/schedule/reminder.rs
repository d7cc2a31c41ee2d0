//! Due reminders and missed doses.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::models::MedicationEntry;

use super::timing::{MealRelation, TimingInfo};
use super::ScheduleConfig;

impl ScheduleConfig {
    /// Clock time to remind for a dose with this timing.
    ///
    /// A specific meal replaces the period time. "before"/"after" any event
    /// shifts the time by `meal_offset_minutes`.
    pub fn reminder_time(&self, timing: &TimingInfo) -> NaiveTime {
        let mut time = self.period_times.get(timing.period);

        if let Some(event) = timing.event {
            if let Some(meal) = self.meal_times.get(event) {
                time = meal;
            }

            let offset = Duration::try_minutes(self.meal_offset_minutes).unwrap_or_default();
            match timing.relation {
                Some(MealRelation::Before) => time -= offset,
                Some(MealRelation::After) => time += offset,
                _ => {}
            }
        }

        time
    }

    /// Time after which an untaken dose counts as missed.
    pub fn missed_cutoff(&self, timing: &TimingInfo) -> NaiveTime {
        self.cutoff_times.get(timing.period)
    }
}

/// A reminder that should fire now.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder<'a> {
    pub entry: &'a MedicationEntry,
    pub timing: TimingInfo,
    /// Scheduled reminder time today
    pub at: NaiveDateTime,
}

/// A dose whose cutoff has passed without being taken.
#[derive(Debug, Clone, PartialEq)]
pub struct MissedDose<'a> {
    pub entry: &'a MedicationEntry,
    pub timing: TimingInfo,
    /// Cutoff that was passed today
    pub cutoff: NaiveDateTime,
}

fn pending_today(entry: &MedicationEntry, now: NaiveDateTime) -> bool {
    let today = now.date();
    entry.is_active_on(today) && !entry.taken_on(today)
}

/// Entries active and untaken today whose reminder time is within the window of `now`.
pub fn due_reminders<'a>(
    entries: &'a [MedicationEntry],
    now: NaiveDateTime,
    config: &ScheduleConfig,
) -> Vec<Reminder<'a>> {
    let window_secs = config.reminder_window_minutes.saturating_mul(60);

    entries
        .iter()
        .filter(|entry| pending_today(entry, now))
        .filter_map(|entry| {
            let timing = TimingInfo::parse(&entry.record.timing);
            let at = now.date().and_time(config.reminder_time(&timing));
            ((now - at).num_seconds().abs() <= window_secs).then_some(Reminder {
                entry,
                timing,
                at,
            })
        })
        .collect()
}

/// Entries active and untaken today whose cutoff is already behind `now`.
pub fn missed_doses<'a>(
    entries: &'a [MedicationEntry],
    now: NaiveDateTime,
    config: &ScheduleConfig,
) -> Vec<MissedDose<'a>> {
    let missed: Vec<MissedDose<'a>> = entries
        .iter()
        .filter(|entry| pending_today(entry, now))
        .filter_map(|entry| {
            let timing = TimingInfo::parse(&entry.record.timing);
            let cutoff = now.date().and_time(config.missed_cutoff(&timing));
            (now > cutoff).then_some(MissedDose {
                entry,
                timing,
                cutoff,
            })
        })
        .collect();

    if !missed.is_empty() {
        tracing::debug!(count = missed.len(), %now, "missed doses found");
    }

    missed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MedicationRecord;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        date(d).and_hms_opt(h, m, 0).unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn entry(name: &str, timing: &str) -> MedicationEntry {
        let record = MedicationRecord {
            medicine_name: name.into(),
            timing: timing.into(),
            ..Default::default()
        };
        MedicationEntry::new(record, date(1), date(10))
    }

    #[test]
    fn test_reminder_time_periods() {
        let config = ScheduleConfig::default();
        let time = |t: &str| config.reminder_time(&TimingInfo::parse(t));

        assert_eq!(time("in the morning"), hm(8, 0));
        assert_eq!(time("afternoon"), hm(12, 0));
        assert_eq!(time("evening"), hm(18, 0));
        assert_eq!(time("at night"), hm(20, 0));
        assert_eq!(time(""), hm(9, 0));
    }

    #[test]
    fn test_reminder_time_meals() {
        let config = ScheduleConfig::default();
        let time = |t: &str| config.reminder_time(&TimingInfo::parse(t));

        assert_eq!(time("with breakfast"), hm(7, 30));
        assert_eq!(time("before breakfast"), hm(7, 0));
        assert_eq!(time("after dinner"), hm(19, 0));
        assert_eq!(time("before lunch"), hm(12, 0));
        // Generic events shift the period time
        assert_eq!(time("after meals"), hm(9, 30));
        assert_eq!(time("before bedtime"), hm(19, 30));
        // Relation without an event does nothing
        assert_eq!(time("after waking up"), hm(9, 0));
    }

    #[test]
    fn test_unvalidated_extremes_do_not_panic() {
        let config = ScheduleConfig {
            meal_offset_minutes: i64::MAX,
            reminder_window_minutes: i64::MAX,
            ..Default::default()
        };
        // An offset chrono cannot represent is ignored
        assert_eq!(config.reminder_time(&TimingInfo::parse("before breakfast")), hm(7, 30));

        let entries = vec![entry("Lisinopril", "morning")];
        assert_eq!(due_reminders(&entries, at(5, 23, 0), &config).len(), 1);
    }

    #[test]
    fn test_missed_cutoff() {
        let config = ScheduleConfig::default();
        let cutoff = |t: &str| config.missed_cutoff(&TimingInfo::parse(t));

        assert_eq!(cutoff("morning"), hm(11, 0));
        assert_eq!(cutoff("afternoon"), hm(15, 0));
        assert_eq!(cutoff("evening"), hm(21, 0));
        assert_eq!(cutoff("bedtime"), hm(23, 59));
        assert_eq!(cutoff("with food"), hm(22, 0));
    }

    #[test]
    fn test_due_reminders_window() {
        let config = ScheduleConfig::default();
        let entries = vec![entry("Lisinopril", "in the morning"), entry("Metformin", "evening")];

        let due = due_reminders(&entries, at(5, 8, 15), &config);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].entry.record.medicine_name, "Lisinopril");
        assert_eq!(due[0].at, at(5, 8, 0));

        assert!(due_reminders(&entries, at(5, 8, 16), &config).is_empty());
        assert_eq!(due_reminders(&entries, at(5, 7, 45), &config).len(), 1);
    }

    #[test]
    fn test_due_reminders_skip_taken_and_inactive() {
        let config = ScheduleConfig::default();
        let mut entries = vec![entry("Lisinopril", "morning")];

        // Outside the course
        assert!(due_reminders(&entries, at(11, 8, 0), &config).is_empty());

        entries[0].mark_taken(at(5, 7, 58));
        assert!(due_reminders(&entries, at(5, 8, 0), &config).is_empty());
        // Taken yesterday does not count for today
        assert_eq!(due_reminders(&entries, at(6, 8, 0), &config).len(), 1);
    }

    #[test]
    fn test_missed_doses() {
        let config = ScheduleConfig::default();
        let mut entries = vec![entry("Lisinopril", "morning"), entry("Melatonin", "at night")];

        let missed = missed_doses(&entries, at(5, 11, 1), &config);
        assert_eq!(missed.len(), 1);
        assert_eq!(missed[0].entry.record.medicine_name, "Lisinopril");
        assert_eq!(missed[0].cutoff, at(5, 11, 0));

        // Exactly at the cutoff is not yet missed
        assert!(missed_doses(&entries, at(5, 11, 0), &config).is_empty());

        entries[0].mark_taken(at(5, 9, 0));
        assert!(missed_doses(&entries, at(5, 12, 0), &config).is_empty());
    }
}

//! End-to-end tests: extracted record → saved entry → reminders and calendar.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use medvoice_core::extractor::extract_medication_info;
use medvoice_core::schedule::{
    default_end_date, due_reminders, missed_doses, DayPeriod, MealEvent, MealRelation,
};
use medvoice_core::{DaySchedule, MedicationEntry, ScheduleConfig, TimingInfo};

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, d).unwrap()
}

fn at(m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(m, d).and_hms_opt(h, min, 0).unwrap()
}

fn save(text: &str, start: NaiveDate, config: &ScheduleConfig) -> MedicationEntry {
    let record = extract_medication_info(text);
    let end = default_end_date(start, &record.duration, config);
    MedicationEntry::new(record, start, end)
}

#[test]
fn test_metformin_course() {
    let config = ScheduleConfig::default();
    let entry = save(
        "Take Metformin 500mg twice a day with meals for 3 months.",
        date(3, 1),
        &config,
    );

    assert_eq!(entry.end_date, date(5, 30));

    let timing = TimingInfo::parse(&entry.record.timing);
    assert_eq!(timing.relation, Some(MealRelation::With));
    assert_eq!(timing.event, Some(MealEvent::Meals));
    // Generic meals keep the unspecified-period time
    assert_eq!(
        config.reminder_time(&timing),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    );
}

#[test]
fn test_morning_reminder_lifecycle() {
    let config = ScheduleConfig::default();
    let mut entries = vec![save(
        "I need to take Lisinopril 10mg once daily in the morning for my blood pressure.",
        date(3, 1),
        &config,
    )];

    // No readable duration: default course
    assert_eq!(entries[0].end_date, date(3, 31));
    assert_eq!(
        TimingInfo::parse(&entries[0].record.timing).period,
        Some(DayPeriod::Morning)
    );

    assert_eq!(due_reminders(&entries, at(3, 10, 8, 5), &config).len(), 1);
    assert!(missed_doses(&entries, at(3, 10, 10, 59), &config).is_empty());
    assert_eq!(missed_doses(&entries, at(3, 10, 11, 30), &config).len(), 1);

    entries[0].mark_taken(at(3, 10, 8, 10));
    assert!(due_reminders(&entries, at(3, 10, 8, 12), &config).is_empty());
    assert!(missed_doses(&entries, at(3, 10, 11, 30), &config).is_empty());

    // After the course ends nothing fires
    assert!(due_reminders(&entries, at(4, 1, 8, 0), &config).is_empty());
}

#[test]
fn test_day_view_from_extracted_entries() {
    let config = ScheduleConfig::default();
    let entries = vec![
        save("Take Lisinopril 10mg in the morning", date(3, 1), &config),
        save("Take Melatonin 3mg at night", date(3, 1), &config),
        save("Take Metformin 500mg with meals", date(3, 1), &config),
    ];

    let day = DaySchedule::for_date(&entries, date(3, 15));
    assert_eq!(day.counts(), [1, 0, 0, 1, 1]);
    assert_eq!(day.night[0].record.medicine_name, "Melatonin");
    assert_eq!(day.other[0].record.medicine_name, "Metformin");
}

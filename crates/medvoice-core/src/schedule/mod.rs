//! Reminder and calendar logic over saved medication entries.
//!
//! Timing phrases ("after breakfast", "at bedtime") are reduced to a
//! [`TimingInfo`], which [`ScheduleConfig`] turns into a clock time for the
//! reminder and a cutoff after which the dose counts as missed.

mod calendar;
mod reminder;
mod timing;

pub use calendar::*;
pub use reminder::*;
pub use timing::*;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigError, ConfigResult};

/// Upper bound for the minute settings (one day).
pub const MAX_SETTING_MINUTES: i64 = 24 * 60;

/// Schedule errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> ScheduleResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ScheduleError::InvalidDate(value.to_string()))
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// One clock time per part of the day, plus a fallback for unspecified timing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodTimes {
    pub morning: NaiveTime,
    pub afternoon: NaiveTime,
    pub evening: NaiveTime,
    pub night: NaiveTime,
    pub unspecified: NaiveTime,
}

impl PeriodTimes {
    /// Time for `period`, or the fallback.
    pub fn get(&self, period: Option<DayPeriod>) -> NaiveTime {
        match period {
            Some(DayPeriod::Morning) => self.morning,
            Some(DayPeriod::Afternoon) => self.afternoon,
            Some(DayPeriod::Evening) => self.evening,
            Some(DayPeriod::Night) => self.night,
            None => self.unspecified,
        }
    }
}

/// Usual meal times.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealTimes {
    pub breakfast: NaiveTime,
    pub lunch: NaiveTime,
    pub dinner: NaiveTime,
}

impl MealTimes {
    /// Time of a specific meal. Generic events ("meals", "food") have none.
    pub fn get(&self, event: MealEvent) -> Option<NaiveTime> {
        match event {
            MealEvent::Breakfast => Some(self.breakfast),
            MealEvent::Lunch => Some(self.lunch),
            MealEvent::Dinner => Some(self.dinner),
            MealEvent::Meals | MealEvent::Food | MealEvent::Bedtime => None,
        }
    }
}

/// Reminder and missed-dose settings.
///
/// Times serialize as `"HH:MM:SS"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Reminder time for each part of the day
    pub period_times: PeriodTimes,
    /// Meal times that override the period time
    pub meal_times: MealTimes,
    /// After these times a dose not yet taken is missed
    pub cutoff_times: PeriodTimes,
    /// Shift for "before ..." / "after ..." timings
    pub meal_offset_minutes: i64,
    /// A reminder is due within this many minutes of its time
    pub reminder_window_minutes: i64,
    /// Course length when the duration cannot be read
    pub default_course_days: i64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            period_times: PeriodTimes {
                morning: clock(8, 0),
                afternoon: clock(12, 0),
                evening: clock(18, 0),
                night: clock(20, 0),
                unspecified: clock(9, 0),
            },
            meal_times: MealTimes {
                breakfast: clock(7, 30),
                lunch: clock(12, 30),
                dinner: clock(18, 30),
            },
            cutoff_times: PeriodTimes {
                morning: clock(11, 0),
                afternoon: clock(15, 0),
                evening: clock(21, 0),
                night: clock(23, 59),
                unspecified: clock(22, 0),
            },
            meal_offset_minutes: 30,
            reminder_window_minutes: 15,
            default_course_days: 30,
        }
    }
}

impl ScheduleConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        for (name, value) in [
            ("meal_offset_minutes", self.meal_offset_minutes),
            ("reminder_window_minutes", self.reminder_window_minutes),
        ] {
            if !(0..=MAX_SETTING_MINUTES).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be between 0 and {}, got {}",
                    name, MAX_SETTING_MINUTES, value
                )));
            }
        }
        if !(1..=MAX_COURSE_DAYS).contains(&self.default_course_days) {
            return Err(ConfigError::Invalid(format!(
                "default_course_days must be between 1 and {}, got {}",
                MAX_COURSE_DAYS, self.default_course_days
            )));
        }
        Ok(())
    }
}

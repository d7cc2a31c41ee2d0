//! Structured reading of a free-text timing phrase.

use serde::{Deserialize, Serialize};

/// Part of the day a dose belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

/// Position of the dose relative to a meal or event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealRelation {
    Before,
    After,
    With,
}

impl MealRelation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
            Self::With => "with",
        }
    }
}

/// The meal or event a timing refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealEvent {
    Meals,
    Breakfast,
    Lunch,
    Dinner,
    Food,
    Bedtime,
}

impl MealEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Meals => "meals",
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Food => "food",
            Self::Bedtime => "bedtime",
        }
    }
}

/// Period, relation and event read from a timing phrase. Any part may be absent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimingInfo {
    pub period: Option<DayPeriod>,
    pub relation: Option<MealRelation>,
    pub event: Option<MealEvent>,
}

impl TimingInfo {
    /// Read a timing phrase by substring tests on its lowercase form.
    ///
    /// Earlier keywords win: "morning" beats "night", "before" beats "after",
    /// "meal" beats "breakfast".
    pub fn parse(timing: &str) -> Self {
        let lower = timing.to_lowercase();
        let has = |word: &str| lower.contains(word);

        let period = if has("morning") {
            Some(DayPeriod::Morning)
        } else if has("afternoon") {
            Some(DayPeriod::Afternoon)
        } else if has("evening") {
            Some(DayPeriod::Evening)
        } else if has("night") || has("bedtime") {
            Some(DayPeriod::Night)
        } else {
            None
        };

        let relation = if has("before") {
            Some(MealRelation::Before)
        } else if has("after") {
            Some(MealRelation::After)
        } else if has("with") {
            Some(MealRelation::With)
        } else {
            None
        };

        let event = [
            ("meal", MealEvent::Meals),
            ("breakfast", MealEvent::Breakfast),
            ("lunch", MealEvent::Lunch),
            ("dinner", MealEvent::Dinner),
            ("food", MealEvent::Food),
            ("bedtime", MealEvent::Bedtime),
        ]
        .into_iter()
        .find(|(word, _)| has(word))
        .map(|(_, event)| event);

        Self {
            period,
            relation,
            event,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.period.is_none() && self.relation.is_none() && self.event.is_none()
    }
}

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::*;

// Custom serialization module pinning deadlines to the canonical
// "YYYY-MM-DD HH:MM" form (minute precision, no timezone suffix)
mod deadline_minute {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::constants::DEADLINE_FORMAT;

    pub fn serialize<S>(deadline: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&deadline.format(DEADLINE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, DEADLINE_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// User-assigned importance level. The wire token is the single upper-case
/// letter; the label and color are display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "C")]
    Critical,
    #[serde(rename = "H")]
    High,
    #[serde(rename = "N")]
    Normal,
    #[serde(rename = "L")]
    Low,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Normal,
        Priority::Low,
    ];

    /// Matches a priority code case-insensitively
    pub fn from_code(code: &str) -> Option<Priority> {
        match code.to_uppercase().as_str() {
            "C" => Some(Priority::Critical),
            "H" => Some(Priority::High),
            "N" => Some(Priority::Normal),
            "L" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Priority::Critical => "C",
            Priority::High => "H",
            Priority::Normal => "N",
            Priority::Low => "L",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Normal => "normal",
            Priority::Low => "low",
        }
    }

    pub fn color(&self) -> u8 {
        match self {
            Priority::Critical => BG_PRIORITY_CRITICAL,
            Priority::High => BG_PRIORITY_HIGH,
            Priority::Normal => BG_PRIORITY_NORMAL,
            Priority::Low => BG_PRIORITY_LOW,
        }
    }
}

/// Urgency of a deadline relative to the current date. Derived on every
/// render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    InTime,
    Today,
    Overdue,
}

impl Tag {
    pub const ALL: [Tag; 3] = [Tag::InTime, Tag::Today, Tag::Overdue];

    pub fn label(&self) -> &'static str {
        match self {
            Tag::InTime => "in time",
            Tag::Today => "today",
            Tag::Overdue => "overdue",
        }
    }

    pub fn color(&self) -> u8 {
        match self {
            Tag::InTime => BG_TAG_IN_TIME,
            Tag::Today => BG_TAG_TODAY,
            Tag::Overdue => BG_TAG_OVERDUE,
        }
    }
}

/// A user-authored unit of work. Constructed only from already-validated
/// parts; the deadline always round-trips through the canonical form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,

    pub priority: Priority,

    #[serde(rename = "deadlineDateTime", with = "deadline_minute")]
    pub deadline: NaiveDateTime,
}

impl Task {
    pub fn new(name: String, priority: Priority, deadline: NaiveDateTime) -> Self {
        Task {
            name,
            priority,
            deadline,
        }
    }

    /// Signed count of whole calendar days from `today` to the deadline date.
    /// Time-of-day plays no part in the comparison.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.deadline.date() - today).num_days()
    }

    /// Classifies the deadline relative to `today`
    pub fn tag(&self, today: NaiveDate) -> Tag {
        let days = self.days_until(today);
        if days > 0 {
            Tag::InTime
        } else if days == 0 {
            Tag::Today
        } else {
            Tag::Overdue
        }
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}]",
            self.name.lines().next().unwrap_or(""),
            self.deadline.format(DEADLINE_FORMAT)
        )
    }
}

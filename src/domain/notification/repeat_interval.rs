//! Repeat interval value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidRepeatIntervalError;

use super::recurrence::RecurrenceDescriptor;

/// All available repeat intervals
pub const ALL_INTERVALS: &[RepeatInterval] = &[
    RepeatInterval::Never,
    RepeatInterval::Year,
    RepeatInterval::Month,
    RepeatInterval::Day,
    RepeatInterval::Hour,
    RepeatInterval::Minute,
    RepeatInterval::Second,
];

/// How often a scheduled notification is delivered again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatInterval {
    /// Deliver once
    #[default]
    Never,
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl RepeatInterval {
    /// Get the string identifier for this interval
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Never => "none",
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }

    /// Build the recurrence descriptor handed to the notification center.
    ///
    /// `Never` has no descriptor at all. Every other interval sets exactly
    /// one unit to 1 and leaves the rest unset.
    pub fn recurrence(&self) -> Option<RecurrenceDescriptor> {
        let one = Some(1);
        let descriptor = match self {
            Self::Never => return None,
            Self::Year => RecurrenceDescriptor {
                years: one,
                ..Default::default()
            },
            Self::Month => RecurrenceDescriptor {
                months: one,
                ..Default::default()
            },
            Self::Day => RecurrenceDescriptor {
                days: one,
                ..Default::default()
            },
            Self::Hour => RecurrenceDescriptor {
                hours: one,
                ..Default::default()
            },
            Self::Minute => RecurrenceDescriptor {
                minutes: one,
                ..Default::default()
            },
            Self::Second => RecurrenceDescriptor {
                seconds: one,
                ..Default::default()
            },
        };
        Some(descriptor)
    }

    /// Whether this interval repeats at all
    pub const fn is_recurring(&self) -> bool {
        !matches!(self, Self::Never)
    }
}

impl FromStr for RepeatInterval {
    type Err = InvalidRepeatIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "never" | "no" => Ok(Self::Never),
            "year" | "yearly" => Ok(Self::Year),
            "month" | "monthly" => Ok(Self::Month),
            "day" | "daily" => Ok(Self::Day),
            "hour" | "hourly" => Ok(Self::Hour),
            "minute" => Ok(Self::Minute),
            "second" => Ok(Self::Second),
            _ => Err(InvalidRepeatIntervalError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for RepeatInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

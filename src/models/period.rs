//! Budget cycle representation
//!
//! A budget cycle is a month-long window that starts on a configurable day,
//! like a credit-card statement period. This module holds the value types;
//! resolution from a reference date lives in `services::period`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MahanaError, MahanaResult};

/// Day of the month on which each budget cycle starts (1-31)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CycleDay(u32);

impl CycleDay {
    pub const FIRST: CycleDay = CycleDay(1);

    pub fn new(day: u32) -> MahanaResult<Self> {
        if (1..=31).contains(&day) {
            Ok(Self(day))
        } else {
            Err(MahanaError::Validation(format!(
                "Cycle start day must be between 1 and 31, got {}",
                day
            )))
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for CycleDay {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u32> for CycleDay {
    type Error = MahanaError;

    fn try_from(day: u32) -> Result<Self, Self::Error> {
        Self::new(day)
    }
}

impl From<CycleDay> for u32 {
    fn from(day: CycleDay) -> Self {
        day.0
    }
}

impl fmt::Display for CycleDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a cycle day that does not exist in a month is turned into a date
///
/// With `Roll`, day 31 of a 30-day month becomes the 1st of the next month.
/// With `Clamp`, it becomes the 30th. In both policies day 0 means the last
/// day of the previous month, which is how a cycle starting on the 1st ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthOverflow {
    #[default]
    Roll,
    Clamp,
}

impl fmt::Display for MonthOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Roll => write!(f, "roll"),
            Self::Clamp => write!(f, "clamp"),
        }
    }
}

impl std::str::FromStr for MonthOverflow {
    type Err = MahanaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "roll" => Ok(Self::Roll),
            "clamp" => Ok(Self::Clamp),
            other => Err(MahanaError::Validation(format!(
                "Unknown month overflow policy '{}', expected roll or clamp",
                other
            ))),
        }
    }
}

/// An inclusive date window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered, both ends included
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

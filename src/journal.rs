//! Food & lifestyle journal: validated daily entries.
//!
//! Entries are checked and echoed back; nothing is stored.

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EXERCISE_MINUTES: RangeInclusive<u8> = 0..=120;
pub const STRESS_LEVEL: RangeInclusive<u8> = 1..=5;
pub const SLEEP_HOURS: RangeInclusive<u8> = 0..=12;

pub const DEFAULT_EXERCISE_MINUTES: u8 = 30;
pub const DEFAULT_STRESS_LEVEL: u8 = 3;
pub const DEFAULT_SLEEP_HOURS: u8 = 7;

pub const LOGGED_MESSAGE: &str = "Journal entry logged successfully!";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JournalError {
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },
}

/// One day of meals and lifestyle data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub food_intake: String,
    pub exercise_minutes: u8,
    pub stress_level: u8,
    pub sleep_hours: u8,
}

fn check(field: &'static str, value: u8, range: &RangeInclusive<u8>) -> Result<(), JournalError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(JournalError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

impl JournalEntry {
    pub fn new(
        date: NaiveDate,
        food_intake: impl Into<String>,
        exercise_minutes: u8,
        stress_level: u8,
        sleep_hours: u8,
    ) -> Result<Self, JournalError> {
        check("Exercise duration", exercise_minutes, &EXERCISE_MINUTES)?;
        check("Stress level", stress_level, &STRESS_LEVEL)?;
        check("Sleep hours", sleep_hours, &SLEEP_HOURS)?;

        let entry = Self {
            date,
            food_intake: food_intake.into(),
            exercise_minutes,
            stress_level,
            sleep_hours,
        };
        tracing::info!(date = %entry.date, "Journal entry logged");
        Ok(entry)
    }

    /// Entry for `date` with every slider at its starting position.
    pub fn with_defaults(date: NaiveDate, food_intake: impl Into<String>) -> Self {
        Self {
            date,
            food_intake: food_intake.into(),
            exercise_minutes: DEFAULT_EXERCISE_MINUTES,
            stress_level: DEFAULT_STRESS_LEVEL,
            sleep_hours: DEFAULT_SLEEP_HOURS,
        }
    }
}

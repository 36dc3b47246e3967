//! Time of day for meeting boundaries
//!
//! Meetings live on a single implicit day with minute resolution, so a
//! `TimeOfDay` is just an hour and a minute. Parsing is strict: a string
//! either matches one of the accepted formats exactly or is rejected.
//!
//! Accepted formats:
//! - 24-hour: `09:30`, `17:05`
//! - 12-hour: `8:30 AM`, `12:48 PM`

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// `chrono` format strings tried in order when parsing.
const ACCEPTED_FORMATS: [&str; 2] = ["%H:%M", "%I:%M %p"];

/// A time string that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid time '{value}': {message}")]
pub struct TimeParseError {
    pub value: String,
    pub message: String,
}

impl TimeParseError {
    fn new(value: &str, message: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            message: message.into(),
        }
    }
}

/// Wall-clock time with minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns minutes since midnight
    pub fn minutes_from_midnight(&self) -> u16 {
        (self.hour as u16) * 60 + self.minute as u16
    }

    /// Format as `H:MM AM` / `H:MM PM`
    pub fn to_12_hour(&self) -> String {
        let meridiem = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", hour, self.minute, meridiem)
    }
}

impl PartialOrd for TimeOfDay {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeOfDay {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.minutes_from_midnight()
            .cmp(&other.minutes_from_midnight())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TimeParseError::new(s, "time is empty"));
        }
        check_shape(trimmed).map_err(|message| TimeParseError::new(s, message))?;

        ACCEPTED_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
            .map(Self::from_naive_time)
            .ok_or_else(|| TimeParseError::new(s, "expected HH:MM or H:MM AM/PM"))
    }
}

/// `chrono` accepts single-digit minutes and skips inner whitespace, so the
/// layout is checked first: `H:MM` or `HH:MM`, then at most one meridiem word.
fn check_shape(trimmed: &str) -> Result<(), &'static str> {
    let clock = match trimmed.split_once(' ') {
        Some((clock, meridiem)) => {
            if meridiem.is_empty() || meridiem.contains(char::is_whitespace) {
                return Err("expected a single AM/PM after the time");
            }
            clock
        }
        None => trimmed,
    };

    let (hour, minute) = clock
        .split_once(':')
        .ok_or("expected HH:MM or H:MM AM/PM")?;
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    if hour.is_empty() || hour.len() > 2 || !all_digits(hour) {
        return Err("hour must be one or two digits");
    }
    if minute.len() != 2 || !all_digits(minute) {
        return Err("minute must be exactly two digits");
    }

    Ok(())
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

//! Meeting intervals

use roomsched_util::{TimeOfDay, TimeParseError};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why a meeting could not be constructed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("Meeting label cannot be empty")]
    EmptyLabel,

    #[error(transparent)]
    InvalidTime(#[from] TimeParseError),

    #[error("Start time {start} must be before end time {end}")]
    NotOrdered { start: TimeOfDay, end: TimeOfDay },

    #[error("Time range '{0}' must look like 'START - END'")]
    MissingSeparator(String),
}

/// A labelled half-open time span `[start, end)`.
///
/// Always satisfies `start < end` with a non-blank label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    label: String,
    start: TimeOfDay,
    end: TimeOfDay,
}

impl Interval {
    /// Build an interval from already-parsed times. The label is trimmed.
    pub fn new(
        label: impl AsRef<str>,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Result<Self, IntervalError> {
        let label = label.as_ref().trim();
        if label.is_empty() {
            return Err(IntervalError::EmptyLabel);
        }
        if start >= end {
            return Err(IntervalError::NotOrdered { start, end });
        }

        Ok(Self {
            label: label.to_string(),
            start,
            end,
        })
    }

    /// Build an interval from raw text fields.
    ///
    /// The label is checked before the times, so a blank form reports
    /// `EmptyLabel` rather than a parse error.
    pub fn parse(label: &str, start: &str, end: &str) -> Result<Self, IntervalError> {
        if label.trim().is_empty() {
            return Err(IntervalError::EmptyLabel);
        }
        let start: TimeOfDay = start.parse()?;
        let end: TimeOfDay = end.parse()?;
        Self::new(label, start, end)
    }

    /// Build an interval from a combined range such as `8:30 AM - 9:00 AM`.
    pub fn parse_range(label: &str, range: &str) -> Result<Self, IntervalError> {
        let (start, end) = range
            .split_once('-')
            .ok_or_else(|| IntervalError::MissingSeparator(range.to_string()))?;
        Self::parse(label, start, end)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Half-open intersection test. Touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({} - {})", self.label, self.start, self.end)
    }
}

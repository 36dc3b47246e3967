//! Configuration validation

use crate::schema::{RawConfig, RawMeeting};
use roomsched_core::{Interval, IntervalError, RoomCount};
use thiserror::Error;

/// Validation error
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Room count must be at least 1, got {0}")]
    InvalidRoomCount(usize),

    #[error("Room count must be at most {max}, got {count}")]
    RoomCountTooLarge { count: usize, max: usize },

    #[error("Meeting #{index} '{label}': {source}")]
    InvalidMeeting {
        index: usize,
        label: String,
        source: IntervalError,
    },

    #[error("Meeting #{index} '{label}': specify either `time` or both `start` and `end`")]
    AmbiguousMeetingTime { index: usize, label: String },
}

impl ValidationError {
    /// One-based seed position, for errors that belong to a meeting
    pub fn meeting_index(&self) -> Option<usize> {
        match self {
            ValidationError::InvalidRoomCount(_) | ValidationError::RoomCountTooLarge { .. } => {
                None
            }
            ValidationError::InvalidMeeting { index, .. }
            | ValidationError::AmbiguousMeetingTime { index, .. } => Some(*index),
        }
    }

    /// Label of the offending meeting, if any
    pub fn meeting_label(&self) -> Option<&str> {
        match self {
            ValidationError::InvalidMeeting { label, .. }
            | ValidationError::AmbiguousMeetingTime { label, .. } => Some(label),
            _ => None,
        }
    }

    /// The problem itself, without the meeting prefix
    pub fn reason(&self) -> String {
        match self {
            ValidationError::InvalidMeeting { source, .. } => source.to_string(),
            ValidationError::AmbiguousMeetingTime { .. } => {
                "specify either `time` or both `start` and `end`".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Check a room count against the accepted range
pub fn check_room_count(count: usize) -> Result<RoomCount, ValidationError> {
    if count > RoomCount::MAX {
        return Err(ValidationError::RoomCountTooLarge {
            count,
            max: RoomCount::MAX,
        });
    }
    RoomCount::new(count).ok_or(ValidationError::InvalidRoomCount(count))
}

/// Validate a raw configuration, collecting every problem found
pub fn validate_config(config: &RawConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(Err(e)) = config.rooms.count.map(check_room_count) {
        errors.push(e);
    }

    for (index, meeting) in config.meetings.iter().enumerate() {
        if let Err(e) = meeting_interval(index, meeting) {
            errors.push(e);
        }
    }

    errors
}

/// Convert one seed meeting, numbered from 1 in error messages
pub fn meeting_interval(index: usize, meeting: &RawMeeting) -> Result<Interval, ValidationError> {
    let number = index + 1;
    let result = match (&meeting.time, &meeting.start, &meeting.end) {
        (Some(range), None, None) => Interval::parse_range(&meeting.label, range),
        (None, Some(start), Some(end)) => Interval::parse(&meeting.label, start, end),
        _ => {
            return Err(ValidationError::AmbiguousMeetingTime {
                index: number,
                label: meeting.label.clone(),
            });
        }
    };

    result.map_err(|source| ValidationError::InvalidMeeting {
        index: number,
        label: meeting.label.clone(),
        source,
    })
}

//! Meeting pool and admission checks

use serde::Serialize;
use thiserror::Error;

use crate::{Interval, IntervalError, RoomCount};

/// Why a meeting was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionError {
    #[error("Invalid meeting: {0}")]
    InvalidInterval(#[from] IntervalError),

    #[error("All rooms are already scheduled ({admitted} meetings for {capacity} rooms)")]
    CapacityExceeded { capacity: usize, admitted: usize },

    #[error("Meeting {candidate} conflicts with existing meeting {existing}")]
    Conflict {
        candidate: Interval,
        existing: Interval,
    },
}

impl AdmissionError {
    /// Stable machine-readable code for this failure
    pub fn code(&self) -> &'static str {
        match self {
            AdmissionError::InvalidInterval(_) => "invalid_interval",
            AdmissionError::CapacityExceeded { .. } => "capacity_exceeded",
            AdmissionError::Conflict { .. } => "conflict",
        }
    }
}

/// Admitted meetings, in admission order.
///
/// Pools are values: admission returns a new pool and leaves the old one
/// untouched. Meetings are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MeetingPool {
    meetings: Vec<Interval>,
}

impl MeetingPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a pool without running admission checks.
    ///
    /// Seeds may overlap each other or exceed the room count; only the
    /// meetings added afterwards go through `try_admit`.
    pub fn from_seed(meetings: impl IntoIterator<Item = Interval>) -> Self {
        Self {
            meetings: meetings.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.meetings.iter()
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.meetings
    }

    /// Earliest-admitted meeting that overlaps `candidate`
    pub fn first_conflict(&self, candidate: &Interval) -> Option<&Interval> {
        self.meetings
            .iter()
            .find(|existing| existing.overlaps(candidate))
    }

    /// Validate `candidate` against this pool and return the enlarged pool.
    ///
    /// Checks run in order and the first failure wins:
    /// 1. the pool already holds `rooms` meetings: `CapacityExceeded`
    /// 2. `candidate` overlaps an admitted meeting: `Conflict`
    ///
    /// The capacity check compares against the number of admitted meetings,
    /// not the number of rooms a partition would need.
    pub fn try_admit(
        &self,
        candidate: Interval,
        rooms: RoomCount,
    ) -> Result<MeetingPool, AdmissionError> {
        if self.meetings.len() >= rooms.get() {
            return Err(AdmissionError::CapacityExceeded {
                capacity: rooms.get(),
                admitted: self.meetings.len(),
            });
        }

        if let Some(existing) = self.first_conflict(&candidate) {
            return Err(AdmissionError::Conflict {
                existing: existing.clone(),
                candidate,
            });
        }

        let mut meetings = Vec::with_capacity(self.meetings.len() + 1);
        meetings.extend_from_slice(&self.meetings);
        meetings.push(candidate);
        Ok(MeetingPool { meetings })
    }

    /// Parse raw form fields, then `try_admit`.
    ///
    /// A malformed candidate fails with `InvalidInterval` before any pool
    /// check runs.
    pub fn try_admit_raw(
        &self,
        label: &str,
        start: &str,
        end: &str,
        rooms: RoomCount,
    ) -> Result<MeetingPool, AdmissionError> {
        let candidate = Interval::parse(label, start, end)?;
        self.try_admit(candidate, rooms)
    }
}

impl<'a> IntoIterator for &'a MeetingPool {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.meetings.iter()
    }
}

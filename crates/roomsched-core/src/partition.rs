//! Room partitioning
//!
//! Classical greedy interval partitioning: meetings are visited in start
//! order and each goes into the first room where it overlaps nothing. With
//! that visiting order the number of rooms opened equals the maximum number
//! of meetings running at once, or the requested room count if that is
//! larger.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

use crate::{Interval, MeetingPool};

/// Number of rooms the caller wants available, between one and
/// [`RoomCount::MAX`].
///
/// Admission uses it as a capacity; partitioning uses it as a floor on the
/// number of rooms returned, so every room is allocated up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct RoomCount(NonZeroUsize);

impl RoomCount {
    pub const ONE: RoomCount = RoomCount(NonZeroUsize::MIN);

    /// Largest accepted count
    pub const MAX: usize = 1000;

    /// Returns `None` for zero or anything above [`RoomCount::MAX`].
    pub fn new(count: usize) -> Option<Self> {
        if count > Self::MAX {
            return None;
        }
        NonZeroUsize::new(count).map(Self)
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for RoomCount {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for RoomCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for RoomCount {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
            .ok_or_else(|| format!("room count must be between 1 and {}", Self::MAX))
    }
}

impl From<RoomCount> for usize {
    fn from(count: RoomCount) -> Self {
        count.get()
    }
}

/// One room's meetings, in start order, pairwise non-overlapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Room {
    meetings: Vec<Interval>,
}

impl Room {
    pub fn meetings(&self) -> &[Interval] {
        &self.meetings
    }

    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }

    fn accepts(&self, meeting: &Interval) -> bool {
        !self.meetings.iter().any(|scheduled| scheduled.overlaps(meeting))
    }
}

/// Result of partitioning a pool into rooms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoomAssignment {
    rooms: Vec<Room>,
}

impl RoomAssignment {
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of rooms, including empty ones
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Total meetings across all rooms
    pub fn meeting_count(&self) -> usize {
        self.rooms.iter().map(Room::len).sum()
    }

    /// Rooms that host at least one meeting, with their zero-based index
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Room)> {
        self.rooms
            .iter()
            .enumerate()
            .filter(|(_, room)| !room.is_empty())
    }

    /// Drop rooms that received no meetings. Remaining rooms keep their order.
    pub fn without_empty_rooms(self) -> Self {
        Self {
            rooms: self
                .rooms
                .into_iter()
                .filter(|room| !room.is_empty())
                .collect(),
        }
    }
}

impl fmt::Display for RoomAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, room) in self.rooms.iter().enumerate() {
            writeln!(f, "Room {}:", index + 1)?;
            if room.is_empty() {
                writeln!(f, "  (no meetings)")?;
            }
            for meeting in room.meetings() {
                writeln!(
                    f,
                    "  {} - {} - {}",
                    meeting.label(),
                    meeting.start().to_12_hour(),
                    meeting.end().to_12_hour()
                )?;
            }
        }
        Ok(())
    }
}

/// Assign every pooled meeting to a room.
///
/// Opens `rooms` rooms up front, then first-fit in start order; a meeting
/// that fits nowhere opens a new room. Meetings with equal start times keep
/// their admission order, so the result is deterministic.
pub fn partition(pool: &MeetingPool, rooms: RoomCount) -> RoomAssignment {
    let mut sorted: Vec<&Interval> = pool.iter().collect();
    // `sort_by_key` is stable
    sorted.sort_by_key(|meeting| meeting.start());

    let mut assigned: Vec<Room> = (0..rooms.get()).map(|_| Room::default()).collect();

    for meeting in sorted {
        match assigned.iter_mut().find(|room| room.accepts(meeting)) {
            Some(room) => room.meetings.push(meeting.clone()),
            None => assigned.push(Room {
                meetings: vec![meeting.clone()],
            }),
        }
    }

    RoomAssignment { rooms: assigned }
}

//! Validated settings

use crate::schema::RawConfig;
use crate::validation::{check_room_count, meeting_interval, ValidationError};
use roomsched_core::{MeetingPool, RoomCount};

/// Validated settings ready for use by the scheduler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Available rooms; admission capacity and partition floor
    pub rooms: RoomCount,

    /// Whether output includes rooms with no meetings
    pub show_empty_rooms: bool,

    /// Seed meetings, in file order
    pub seed: MeetingPool,
}

impl Settings {
    /// Convert from raw config. Stops at the first invalid field; use
    /// `validate_config` first for a complete report.
    pub fn from_raw(raw: RawConfig) -> Result<Self, ValidationError> {
        let rooms = match raw.rooms.count {
            Some(count) => check_room_count(count)?,
            None => RoomCount::default(),
        };

        let seed = raw
            .meetings
            .iter()
            .enumerate()
            .map(|(index, meeting)| meeting_interval(index, meeting))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            rooms,
            show_empty_rooms: raw.display.show_empty_rooms.unwrap_or(true),
            seed: MeetingPool::from_seed(seed),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rooms: RoomCount::default(),
            show_empty_rooms: true,
            seed: MeetingPool::new(),
        }
    }
}

//! Scheduler: owns the current pool and room count

use tracing::{debug, info, warn};

use crate::{partition, AdmissionError, Interval, MeetingPool, RoomAssignment, RoomCount};

/// Single-writer holder of the current meeting pool.
///
/// Admission swaps in the pool returned by `MeetingPool::try_admit`; a
/// rejected meeting leaves the pool exactly as it was.
#[derive(Debug, Clone)]
pub struct Scheduler {
    rooms: RoomCount,
    pool: MeetingPool,
}

impl Scheduler {
    pub fn new(rooms: RoomCount, seed: MeetingPool) -> Self {
        info!(
            rooms = rooms.get(),
            seeded = seed.len(),
            "Scheduler initialized"
        );

        Self { rooms, pool: seed }
    }

    pub fn rooms(&self) -> RoomCount {
        self.rooms
    }

    pub fn pool(&self) -> &MeetingPool {
        &self.pool
    }

    /// Change the room count used by later admissions and partitions
    pub fn set_rooms(&mut self, rooms: RoomCount) {
        if rooms != self.rooms {
            info!(from = self.rooms.get(), to = rooms.get(), "Room count changed");
            self.rooms = rooms;
        }
    }

    /// Admit a meeting, replacing the pool on success
    pub fn admit(&mut self, candidate: Interval) -> Result<(), AdmissionError> {
        match self.pool.try_admit(candidate, self.rooms) {
            Ok(pool) => {
                self.pool = pool;
                if let Some(meeting) = self.pool.as_slice().last() {
                    info!(
                        label = %meeting.label(),
                        start = %meeting.start(),
                        end = %meeting.end(),
                        pool_size = self.pool.len(),
                        "Meeting admitted"
                    );
                }
                Ok(())
            }
            Err(err) => {
                warn!(code = err.code(), error = %err, "Meeting rejected");
                Err(err)
            }
        }
    }

    /// Parse raw fields and admit the result
    pub fn admit_raw(
        &mut self,
        label: &str,
        start: &str,
        end: &str,
    ) -> Result<(), AdmissionError> {
        match Interval::parse(label, start, end) {
            Ok(candidate) => self.admit(candidate),
            Err(err) => {
                let err = AdmissionError::from(err);
                warn!(code = err.code(), error = %err, "Meeting rejected");
                Err(err)
            }
        }
    }

    /// Partition the whole pool into rooms. Recomputed on every call.
    pub fn schedule(&self) -> RoomAssignment {
        let assignment = partition(&self.pool, self.rooms);

        debug!(
            meetings = assignment.meeting_count(),
            requested_rooms = self.rooms.get(),
            rooms = assignment.len(),
            occupied = assignment.occupied().count(),
            "Meetings partitioned"
        );

        assignment
    }
}

//! Meeting admission and room partitioning for roomsched
//!
//! This crate is the heart of roomsched, containing:
//! - The meeting interval model and its half-open overlap test
//! - Admission of new meetings into a pool (capacity and conflict checks)
//! - Greedy first-fit partitioning of a pool into rooms
//! - `Scheduler`, a single-writer owner of the current pool
//!
//! Everything except `Scheduler` is a pure function over immutable values.

mod admission;
mod interval;
mod partition;
mod scheduler;

pub use admission::*;
pub use interval::*;
pub use partition::*;
pub use scheduler::*;

//! Shared utilities for roomsched
//!
//! This crate provides:
//! - `TimeOfDay`, a minute-resolution wall-clock time with a strict parser
//! - Default paths for the configuration file

mod paths;
mod time;

pub use paths::*;
pub use time::*;

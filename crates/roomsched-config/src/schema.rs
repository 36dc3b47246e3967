//! Raw configuration schema (as parsed from TOML)

use serde::{Deserialize, Serialize};

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConfig {
    /// Config schema version
    pub config_version: u32,

    /// Room settings
    #[serde(default)]
    pub rooms: RawRooms,

    /// Output settings
    #[serde(default)]
    pub display: RawDisplay,

    /// Meetings loaded into the pool before any admission
    #[serde(default)]
    pub meetings: Vec<RawMeeting>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawRooms {
    /// Number of available rooms (default: 1)
    pub count: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawDisplay {
    /// Print rooms that received no meetings (default: true)
    pub show_empty_rooms: Option<bool>,
}

/// Seed meeting. Times come either as a combined `time` range or as
/// separate `start` and `end` fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawMeeting {
    pub label: String,

    /// Combined range, e.g. "8:30 AM - 9:00 AM"
    pub time: Option<String>,

    /// Start time (HH:MM or H:MM AM/PM)
    pub start: Option<String>,

    /// End time (HH:MM or H:MM AM/PM)
    pub end: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_meeting_forms() {
        let toml_str = r#"
            config_version = 1

            [rooms]
            count = 2

            [[meetings]]
            label = "Introduction to Nonsense Theory"
            time = "8:30 AM - 9:00 AM"

            [[meetings]]
            label = "Planning"
            start = "09:00"
            end = "10:00"
        "#;

        let config: RawConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.rooms.count, Some(2));
        assert_eq!(config.meetings.len(), 2);
        assert_eq!(config.meetings[0].time.as_deref(), Some("8:30 AM - 9:00 AM"));
        assert_eq!(config.meetings[1].start.as_deref(), Some("09:00"));
        assert!(config.display.show_empty_rooms.is_none());
    }

    #[test]
    fn sections_are_optional() {
        let config: RawConfig = toml::from_str("config_version = 1").unwrap();
        assert!(config.rooms.count.is_none());
        assert!(config.meetings.is_empty());
    }
}

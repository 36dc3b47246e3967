//! roomsched - meeting room scheduler
//!
//! Wires together:
//! - Configuration loading (room count, seed meetings)
//! - Admission of meetings given on the command line
//! - Room partitioning and output

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use roomsched_config::{load_config, Settings};
use roomsched_core::{AdmissionError, Interval, RoomAssignment, RoomCount, Scheduler};
use roomsched_util::config_path_without_env;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// roomsched - assign meetings to the fewest rooms without overlaps
#[derive(Parser, Debug)]
#[command(name = "roomsched")]
#[command(about = "Assign meetings to the fewest rooms without overlaps", long_about = None)]
struct Args {
    /// Configuration file path (default: ~/.config/roomsched/config.toml)
    #[arg(short, long, env = "ROOMSCHED_CONFIG")]
    config: Option<PathBuf>,

    /// Number of available rooms, overriding the config file
    #[arg(short, long, value_parser = parse_room_count)]
    rooms: Option<RoomCount>,

    /// Meeting to admit, e.g. "Standup=09:00 - 09:15" (repeatable)
    #[arg(short, long = "add", value_name = "LABEL=RANGE", value_parser = parse_meeting_arg)]
    add: Vec<MeetingArg>,

    /// Do not print rooms that received no meetings
    #[arg(long)]
    hide_empty: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// A `--add` value split into label and time range
#[derive(Debug, Clone)]
struct MeetingArg {
    label: String,
    range: String,
}

fn parse_room_count(s: &str) -> Result<RoomCount, String> {
    let count: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", s))?;
    RoomCount::try_from(count)
}

fn parse_meeting_arg(s: &str) -> Result<MeetingArg, String> {
    let (label, range) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=RANGE, got '{}'", s))?;
    Ok(MeetingArg {
        label: label.to_string(),
        range: range.to_string(),
    })
}

/// Result of one `--add`
#[derive(Debug, Serialize)]
struct AdmissionOutcome {
    label: String,
    range: String,
    admitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl AdmissionOutcome {
    fn new(arg: &MeetingArg, result: &Result<(), AdmissionError>) -> Self {
        Self {
            label: arg.label.clone(),
            range: arg.range.clone(),
            admitted: result.is_ok(),
            code: result.as_ref().err().map(AdmissionError::code),
            error: result.as_ref().err().map(ToString::to_string),
        }
    }
}

/// Everything one invocation produced
#[derive(Debug, Serialize)]
struct Report {
    rooms: RoomCount,
    admissions: Vec<AdmissionOutcome>,
    assignment: RoomAssignment,
}

impl Report {
    fn all_admitted(&self) -> bool {
        self.admissions.iter().all(|o| o.admitted)
    }
}

/// Load settings from an explicit path, or from the default path if present
fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    match path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config from {:?}", path)),
        None => {
            let default_path = config_path_without_env();
            if default_path.exists() {
                load_config(&default_path)
                    .with_context(|| format!("Failed to load config from {:?}", default_path))
            } else {
                debug!(path = %default_path.display(), "No config file, using defaults");
                Ok(Settings::default())
            }
        }
    }
}

fn admit(scheduler: &mut Scheduler, arg: &MeetingArg) -> Result<(), AdmissionError> {
    let candidate = Interval::parse_range(&arg.label, &arg.range)?;
    scheduler.admit(candidate)
}

/// Load settings, admit every `--add` in order, then partition
fn build_report(args: &Args) -> Result<Report> {
    let settings = load_settings(args.config.as_ref())?;
    let rooms = args.rooms.unwrap_or(settings.rooms);
    let show_empty = settings.show_empty_rooms && !args.hide_empty;

    info!(
        rooms = rooms.get(),
        seeded = settings.seed.len(),
        to_admit = args.add.len(),
        "Configuration loaded"
    );

    let mut scheduler = Scheduler::new(rooms, settings.seed);

    let admissions: Vec<AdmissionOutcome> = args
        .add
        .iter()
        .map(|arg| {
            let result = admit(&mut scheduler, arg);
            AdmissionOutcome::new(arg, &result)
        })
        .collect();

    let mut assignment = scheduler.schedule();
    if !show_empty {
        assignment = assignment.without_empty_rooms();
    }

    Ok(Report {
        rooms,
        admissions,
        assignment,
    })
}

fn print_report(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for outcome in &report.admissions {
                match &outcome.error {
                    None => eprintln!("✓ Added '{}'", outcome.label),
                    Some(error) => eprintln!("✗ {}", error),
                }
            }
            print!("{}", report.assignment);
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(report).context("Failed to serialize report")?;
            println!("{}", json);
        }
    }
    Ok(())
}

/// 0 when every `--add` was admitted, 1 when any was rejected, 2 on error
fn exit_status(result: &Result<Report>) -> u8 {
    match result {
        Ok(report) if report.all_admitted() => 0,
        Ok(_) => 1,
        Err(_) => 2,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    debug!(version = env!("CARGO_PKG_VERSION"), "roomsched starting");

    let result = build_report(&args);
    match &result {
        Ok(report) => {
            if let Err(e) = print_report(report, args.format) {
                eprintln!("Error: {:#}", e);
                return ExitCode::from(2);
            }
        }
        Err(e) => eprintln!("Error: {:#}", e),
    }

    ExitCode::from(exit_status(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_ROOM_CONFIG: &str = r#"
        config_version = 1

        [rooms]
        count = 2

        [[meetings]]
        label = "Planning"
        time = "09:00 - 10:00"
    "#;

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn args_for(config: &tempfile::NamedTempFile, extra: &[&str]) -> Args {
        let path = config.path().to_str().unwrap();
        let mut argv = vec!["roomsched", "--config", path];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn rejecting_args(config: &tempfile::NamedTempFile, extra: &[&str]) -> Args {
        let mut argv = vec![
            "--add",
            "Clash=09:30 - 10:30",
            "--add",
            "Review=10:00 - 11:00",
            "--add",
            "Late=15:00 - 16:00",
        ];
        argv.extend_from_slice(extra);
        args_for(config, &argv)
    }

    #[test]
    fn test_parse_room_count() {
        assert_eq!(parse_room_count("3").unwrap().get(), 3);
        assert!(parse_room_count("0").is_err());
        assert_eq!(
            parse_room_count("100000").unwrap_err(),
            "room count must be between 1 and 1000"
        );
        assert!(parse_room_count("-2").is_err());
        assert!(parse_room_count("many").is_err());
    }

    #[test]
    fn test_parse_meeting_arg() {
        let arg = parse_meeting_arg("Standup=09:00 - 09:15").unwrap();
        assert_eq!(arg.label, "Standup");
        assert_eq!(arg.range, "09:00 - 09:15");

        assert!(parse_meeting_arg("Standup 09:00 - 09:15").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "roomsched",
            "--rooms",
            "2",
            "--add",
            "a=09:00 - 10:00",
            "--add",
            "b=10:00 - 11:00",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(args.rooms.map(|r| r.get()), Some(2));
        assert_eq!(args.add.len(), 2);
        assert_eq!(args.format, OutputFormat::Json);
        assert!(!args.hide_empty);

        assert!(Args::try_parse_from(["roomsched", "--rooms", "0"]).is_err());
        assert!(Args::try_parse_from(["roomsched", "--rooms", "18446744073709551615"]).is_err());
    }

    #[test]
    fn test_admission_outcome_reports_code() {
        let mut scheduler = Scheduler::new(RoomCount::ONE, Default::default());
        let first = parse_meeting_arg("a=09:00 - 10:00").unwrap();
        let second = parse_meeting_arg("b=11:00 - 12:00").unwrap();

        let result = admit(&mut scheduler, &first);
        assert!(AdmissionOutcome::new(&first, &result).admitted);

        let result = admit(&mut scheduler, &second);
        let outcome = AdmissionOutcome::new(&second, &result);
        assert!(!outcome.admitted);
        assert_eq!(outcome.code, Some("capacity_exceeded"));
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(load_settings(Some(&path)).is_err());
    }

    #[test]
    fn test_rejection_does_not_stop_later_admissions() {
        let config = config_file(TWO_ROOM_CONFIG);
        let result = build_report(&rejecting_args(&config, &[]));
        assert_eq!(exit_status(&result), 1);

        let report = result.unwrap();
        let codes: Vec<_> = report.admissions.iter().map(|o| o.code).collect();
        assert_eq!(codes, vec![Some("conflict"), None, Some("capacity_exceeded")]);

        // Planning and Review touch at 10:00 and share the first room
        assert_eq!(report.assignment.len(), 2);
        let first: Vec<_> = report.assignment.rooms()[0]
            .meetings()
            .iter()
            .map(|m| m.label())
            .collect();
        assert_eq!(first, vec!["Planning", "Review"]);
        assert!(report.assignment.rooms()[1].is_empty());
    }

    #[test]
    fn test_all_admitted_exits_zero() {
        let config = config_file(TWO_ROOM_CONFIG);
        let args = args_for(&config, &["--add", "Review=10:00 AM - 11:00 AM"]);
        let result = build_report(&args);
        assert_eq!(exit_status(&result), 0);
        assert_eq!(result.unwrap().assignment.meeting_count(), 2);
    }

    #[test]
    fn test_rooms_flag_overrides_config() {
        let config = config_file(TWO_ROOM_CONFIG);
        let args = args_for(&config, &["--rooms", "3", "--add", "Lunch=12:00 - 13:00"]);
        let report = build_report(&args).unwrap();
        assert!(report.all_admitted());
        assert_eq!(report.rooms.get(), 3);
        assert_eq!(report.assignment.len(), 3);
    }

    #[test]
    fn test_hide_empty_flag() {
        let config = config_file(TWO_ROOM_CONFIG);
        let report = build_report(&rejecting_args(&config, &["--hide-empty"])).unwrap();
        assert_eq!(report.assignment.len(), 1);
        assert_eq!(report.assignment.meeting_count(), 2);
    }

    #[test]
    fn test_config_can_hide_empty_rooms() {
        let config = config_file(&format!(
            "{}\n[display]\nshow_empty_rooms = false\n",
            TWO_ROOM_CONFIG
        ));
        let report = build_report(&args_for(&config, &[])).unwrap();
        assert_eq!(report.assignment.len(), 1);
    }

    #[test]
    fn test_bad_config_exits_two() {
        let config = config_file("config_version = 99\n");
        let result = build_report(&args_for(&config, &["--add", "a=09:00 - 10:00"]));
        assert!(result.is_err());
        assert_eq!(exit_status(&result), 2);
    }

    #[test]
    fn test_json_report_shape() {
        let config = config_file(TWO_ROOM_CONFIG);
        let report = build_report(&rejecting_args(&config, &[])).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["rooms"], 2);
        assert_eq!(json["admissions"][0]["code"], "conflict");
        assert_eq!(json["admissions"][0]["admitted"], false);
        assert_eq!(json["admissions"][1]["admitted"], true);
        assert!(json["admissions"][1].get("code").is_none());
        assert!(json["admissions"][1].get("error").is_none());
        assert_eq!(json["assignment"]["rooms"].as_array().unwrap().len(), 2);
    }
}

//! Config validation CLI tool
//!
//! Validates a roomsched configuration file and reports any errors.

use roomsched_config::{ConfigError, ValidationError};
use roomsched_util::default_config_path;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let config_path = match args.get(1) {
        Some(path) => PathBuf::from(path),
        None => {
            let default_path = default_config_path();
            eprintln!("Usage: validate-config [config-file]");
            eprintln!();
            eprintln!("Validates a roomsched configuration file.");
            eprintln!();
            eprintln!("Example:");
            eprintln!("  validate-config {}", default_path.display());
            eprintln!("  validate-config config.example.toml");
            return ExitCode::from(2);
        }
    };

    if !config_path.exists() {
        eprintln!("Error: Configuration file not found: {}", config_path.display());
        return ExitCode::from(1);
    }

    match roomsched_config::load_config(&config_path) {
        Ok(settings) => {
            println!("✓ Configuration is valid");
            println!();
            println!("Summary:");
            println!("  Config version: {}", roomsched_config::CURRENT_CONFIG_VERSION);
            println!("  Rooms: {}", settings.rooms);
            println!("  Show empty rooms: {}", settings.show_empty_rooms);
            println!("  Seed meetings: {}", settings.seed.len());

            if !settings.seed.is_empty() {
                println!();
                println!("Meetings:");
                for meeting in &settings.seed {
                    println!(
                        "  - {} [{} - {}]",
                        meeting.label(),
                        meeting.start(),
                        meeting.end()
                    );
                }
            }

            ExitCode::SUCCESS
        }
        Err(ConfigError::ValidationFailed { errors }) => {
            eprintln!("✗ {} problem(s) in {}", errors.len(), config_path.display());
            report_validation_errors(&errors);
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("✗ {}: {}", config_path.display(), e);
            if matches!(e, ConfigError::UnsupportedVersion(_)) {
                eprintln!(
                    "  set `config_version = {}` at the top of the file",
                    roomsched_config::CURRENT_CONFIG_VERSION
                );
            }
            ExitCode::from(1)
        }
    }
}

/// Room-level problems first, then seed meetings in file order
fn report_validation_errors(errors: &[ValidationError]) {
    let (meeting_errors, room_errors): (Vec<_>, Vec<_>) =
        errors.iter().partition(|e| e.meeting_index().is_some());

    if !room_errors.is_empty() {
        eprintln!();
        eprintln!("[rooms]");
        for err in room_errors {
            eprintln!("  {}", err.reason());
        }
    }

    if !meeting_errors.is_empty() {
        eprintln!();
        eprintln!("[[meetings]]");
        for err in meeting_errors {
            let index = err.meeting_index().unwrap_or_default();
            match err.meeting_label().map(str::trim) {
                Some(label) if !label.is_empty() => {
                    eprintln!("  #{} '{}': {}", index, label, err.reason())
                }
                _ => eprintln!("  #{} (no label): {}", index, err.reason()),
            }
        }
    }
}

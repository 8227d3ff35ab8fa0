//! Integration tests for the folio CLI commands.
//!
//! Commands write to an in-memory buffer so output can be asserted without
//! spawning the binary.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::path::PathBuf;

use folio::cli::{Commands, ConfigCommands};
use folio::commands::execute_command;
use folio::folio_core::{PageSnapshot, SectionId};

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

fn replay(trace: PathBuf, stored_hue: Option<&str>) -> Vec<PageSnapshot> {
    let mut out = Vec::new();
    execute_command(
        Commands::Replay {
            trace,
            config: None,
            stored_hue: stored_hue.map(str::to_string),
            no_observer: false,
            initial_scroll: 0.0,
        },
        &mut out,
    )
    .expect("replay succeeds");

    String::from_utf8(out)
        .expect("utf8 output")
        .lines()
        .map(|line| serde_json::from_str(line).expect("snapshot json"))
        .collect()
}

#[test]
fn test_replay_scroll_past_projects_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let trace = write_file(
        &dir,
        "trace.json",
        r#"[
            {"type": "scroll", "scroll_y": 1800, "scroll_height": 4000, "viewport_height": 900},
            {"type": "block_visibility", "block": "project-1", "ratio": 0.3},
            {"type": "section_visibility", "section": "projects", "ratio": 0.62},
            {"type": "frame", "now_ms": 16.0}
        ]"#,
    );

    let snapshots = replay(trace, None);
    assert_eq!(snapshots.len(), 5);

    let initial = snapshots.first().unwrap();
    assert_eq!(initial.hue.degrees(), 220);
    assert!(!initial.header_elevated);
    assert!(initial.revealed.is_empty());
    assert_eq!(initial.active_section, SectionId::Home);

    let last = snapshots.last().unwrap();
    assert!(last.header_elevated);
    assert_eq!(last.active_section, SectionId::Projects);
    assert_eq!(last.revealed.len(), 1);
}

#[test]
fn test_replay_with_malformed_stored_hue_uses_default() {
    let dir = tempfile::tempdir().unwrap();
    let trace = write_file(&dir, "trace.json", r#"[{"type": "hue_input", "value": "400"}]"#);

    let snapshots = replay(trace, Some("not-a-number"));
    assert_eq!(snapshots.first().unwrap().hue.degrees(), 220);
    assert_eq!(snapshots.last().unwrap().hue.degrees(), 359);
}

#[test]
fn test_replay_rejects_invalid_trace() {
    let dir = tempfile::tempdir().unwrap();
    let trace = write_file(&dir, "trace.json", r#"{"type": "scroll"}"#);

    let mut out = Vec::new();
    let result = execute_command(
        Commands::Replay {
            trace,
            config: None,
            stored_hue: None,
            no_observer: false,
            initial_scroll: 0.0,
        },
        &mut out,
    );
    assert!(result.is_err());
    assert!(out.is_empty());
}

#[test]
fn test_config_check_prints_resolved_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "folio.toml", "default_hue = 140\n");

    let mut out = Vec::new();
    execute_command(
        Commands::Config {
            command: ConfigCommands::Check { path },
        },
        &mut out,
    )
    .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("default_hue = 140"));
    assert!(text.contains("desktop_breakpoint = 1024.0"));
}

#[test]
fn test_config_check_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "folio.toml", "active_ratio = 1.5\n");

    let mut out = Vec::new();
    let result = execute_command(
        Commands::Config {
            command: ConfigCommands::Check { path },
        },
        &mut out,
    );
    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("active_ratio"));
}

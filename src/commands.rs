//! CLI command handlers.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use folio_core::event::parse_trace;
use folio_core::frame::ManualScheduler;
use folio_core::store::MemoryStore;
use folio_core::style::RecordingStyle;
use folio_core::{
    BlockId, ControllerConfig, MountOptions, PageController, PageEvent, PageSnapshot,
    ScrollMetrics,
};

use crate::cli::{Commands, ConfigCommands};

/// Knobs for a headless replay.
#[derive(Debug, Clone, Default)]
pub struct ReplayOptions {
    pub stored_hue: Option<String>,
    pub observation_supported: bool,
    pub initial_scroll: f64,
}

/// Execute a CLI command, writing results to `out`.
///
/// # Errors
///
/// Returns an error if an input file cannot be read or parsed.
pub fn execute_command(command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Replay {
            trace,
            config,
            stored_hue,
            no_observer,
            initial_scroll,
        } => {
            let config = resolve_config(config.as_deref())?;
            let options = ReplayOptions {
                stored_hue,
                observation_supported: !no_observer,
                initial_scroll,
            };
            cmd_replay(&trace, config, &options, out)
        }
        Commands::Config { command } => match command {
            ConfigCommands::Check { path } => cmd_config_check(&path, out),
            ConfigCommands::Default => cmd_config_default(out),
        },
    }
}

/// Load a config file, or start from defaults, then apply `FOLIO_*` overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the result is invalid.
pub fn resolve_config(path: Option<&Path>) -> Result<ControllerConfig> {
    let config = match path {
        Some(path) => ControllerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ControllerConfig::default(),
    }
    .with_env_overrides();

    config
        .validate()
        .context("Configuration invalid after environment overrides")?;
    Ok(config)
}

fn cmd_replay(
    trace: &Path,
    config: ControllerConfig,
    options: &ReplayOptions,
    out: &mut impl Write,
) -> Result<()> {
    let json = std::fs::read_to_string(trace)
        .with_context(|| format!("Failed to read trace {}", trace.display()))?;
    let events = parse_trace(&json).context("Trace is not a valid page event list")?;

    info!(events = events.len(), trace = %trace.display(), "replaying trace");

    for snapshot in replay_events(&events, config, options) {
        let line = serde_json::to_string(&snapshot).context("Failed to encode snapshot")?;
        writeln!(out, "{line}").context("Failed to write snapshot")?;
    }
    Ok(())
}

/// Mount a controller over in-memory effects and feed it `events`.
///
/// Returns the snapshot after mount followed by one snapshot per event.
/// Every block named in the trace is registered for reveal at mount time.
#[must_use]
pub fn replay_events(
    events: &[PageEvent],
    config: ControllerConfig,
    options: &ReplayOptions,
) -> Vec<PageSnapshot> {
    let store = options
        .stored_hue
        .as_ref()
        .map_or_else(MemoryStore::new, |raw| {
            MemoryStore::with_entry(config.storage_key.clone(), raw.clone())
        });

    let mut controller = PageController::new(
        config,
        store,
        RecordingStyle::new(),
        ManualScheduler::new(),
    );

    controller.mount(MountOptions {
        scroll: ScrollMetrics::at(options.initial_scroll),
        observation_supported: options.observation_supported,
        blocks: trace_blocks(events),
        ..MountOptions::default()
    });

    let mut snapshots = Vec::with_capacity(events.len().saturating_add(1));
    snapshots.push(controller.snapshot());

    for event in events {
        if matches!(event, PageEvent::Frame { .. }) {
            controller.scheduler_mut().take_due();
        }
        controller.dispatch(event);
        snapshots.push(controller.snapshot());
    }

    controller.teardown();
    snapshots
}

fn trace_blocks(events: &[PageEvent]) -> Vec<BlockId> {
    let mut blocks: Vec<BlockId> = events
        .iter()
        .filter_map(|event| match event {
            PageEvent::BlockVisibility { block, .. } => Some(block.clone()),
            _ => None,
        })
        .collect();
    blocks.sort();
    blocks.dedup();
    blocks
}

fn cmd_config_check(path: &Path, out: &mut impl Write) -> Result<()> {
    let config = resolve_config(Some(path))?;
    info!(path = %path.display(), "configuration valid");
    write_config(&config, out)
}

fn cmd_config_default(out: &mut impl Write) -> Result<()> {
    write_config(&ControllerConfig::default(), out)
}

fn write_config(config: &ControllerConfig, out: &mut impl Write) -> Result<()> {
    let rendered = config
        .to_toml_string()
        .context("Failed to render configuration")?;
    write!(out, "{rendered}").context("Failed to write configuration")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;
    use folio_core::SectionId;

    #[test]
    fn test_trace_blocks_are_deduplicated() {
        let events = vec![
            PageEvent::BlockVisibility {
                block: BlockId::from("b"),
                ratio: 0.1,
            },
            PageEvent::BlockVisibility {
                block: BlockId::from("a"),
                ratio: 0.2,
            },
            PageEvent::BlockVisibility {
                block: BlockId::from("b"),
                ratio: 0.9,
            },
        ];
        assert_eq!(trace_blocks(&events), vec![BlockId::from("a"), BlockId::from("b")]);
    }

    #[test]
    fn test_replay_yields_snapshot_per_event_plus_mount() {
        let events = vec![
            PageEvent::ToggleMenu,
            PageEvent::Key {
                key: "Escape".to_string(),
            },
            PageEvent::SectionVisibility {
                section: SectionId::About,
                ratio: 0.8,
            },
        ];
        let snapshots = replay_events(&events, ControllerConfig::default(), &ReplayOptions {
            observation_supported: true,
            ..ReplayOptions::default()
        });

        assert_eq!(snapshots.len(), 4);
        assert!(snapshots.get(1).unwrap().menu_open);
        assert!(!snapshots.get(2).unwrap().menu_open);
        assert_eq!(snapshots.get(3).unwrap().active_section, SectionId::About);
    }

    #[test]
    fn test_default_config_renders_as_toml() {
        let mut out = Vec::new();
        cmd_config_default(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("default_hue = 220"));
        assert!(text.contains("storage_key = \"folio.accent-hue\""));
    }
}

//! Style variable seam.
//!
//! The controller writes CSS custom properties through [`StyleSink`]. The
//! browser binding targets `document.documentElement.style`.

use std::collections::BTreeMap;

/// Receives CSS custom property writes.
pub trait StyleSink {
    /// Set a custom property such as `--accent`.
    fn set_var(&mut self, name: &str, value: &str);
}

/// A sink that records every write, for tests and headless replay.
#[derive(Debug, Clone, Default)]
pub struct RecordingStyle {
    current: BTreeMap<String, String>,
    writes: Vec<(String, String)>,
}

impl RecordingStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest value written to `name`.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<&str> {
        self.current.get(name).map(String::as_str)
    }

    /// Number of writes to `name` so far.
    #[must_use]
    pub fn write_count(&self, name: &str) -> usize {
        self.writes.iter().filter(|(n, _)| n == name).count()
    }

    /// Every write, oldest first.
    #[must_use]
    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }

    /// Current value of every variable.
    #[must_use]
    pub const fn vars(&self) -> &BTreeMap<String, String> {
        &self.current
    }
}

impl StyleSink for RecordingStyle {
    fn set_var(&mut self, name: &str, value: &str) {
        self.current.insert(name.to_string(), value.to_string());
        self.writes.push((name.to_string(), value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_repeated_writes_when_recorded_then_latest_wins_and_count_kept() {
        let mut style = RecordingStyle::new();
        style.set_var("--accent-h", "10");
        style.set_var("--accent-h", "20");
        style.set_var("--aura-x", "0.000");

        assert_eq!(style.var("--accent-h"), Some("20"));
        assert_eq!(style.write_count("--accent-h"), 2);
        assert_eq!(style.writes().len(), 3);
        assert_eq!(style.var("--missing"), None);

        let names: Vec<&str> = style.vars().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["--accent-h", "--aura-x"]);
    }
}

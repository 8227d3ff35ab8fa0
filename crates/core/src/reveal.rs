//! One-shot reveal-on-scroll tracking.
//!
//! Blocks move from observed to revealed exactly once. There is no operation
//! that un-reveals a block.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker class shared by every block that reveals on scroll.
pub const REVEAL_CLASS: &str = "reveal";

/// Class added to a block once it has been revealed.
pub const REVEALED_CLASS: &str = "is-revealed";

/// Identifies one reveal block in the markup.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// What a visibility report did to a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The block crossed the threshold for the first time; stop observing it.
    Revealed,
    /// Still observed, not yet visible enough.
    Pending,
    /// Not observed (unknown, or already revealed).
    Ignored,
}

/// Tracks which blocks are still observed and which have been revealed.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    ratio: f64,
    observed: BTreeSet<BlockId>,
    revealed: BTreeSet<BlockId>,
}

impl RevealTracker {
    /// `ratio` is the visible fraction required to reveal a block.
    #[must_use]
    pub const fn new(ratio: f64) -> Self {
        Self {
            ratio,
            observed: BTreeSet::new(),
            revealed: BTreeSet::new(),
        }
    }

    /// Start observing a block. Already-revealed blocks stay revealed.
    pub fn observe(&mut self, block: BlockId) {
        if !self.revealed.contains(&block) {
            self.observed.insert(block);
        }
    }

    /// Apply a visibility report for `block`.
    pub fn on_visibility(&mut self, block: &BlockId, visible_ratio: f64) -> RevealOutcome {
        if !self.observed.contains(block) {
            return RevealOutcome::Ignored;
        }

        if visible_ratio >= self.ratio {
            self.observed.remove(block);
            self.revealed.insert(block.clone());
            RevealOutcome::Revealed
        } else {
            RevealOutcome::Pending
        }
    }

    /// Reveal every observed block at once. Used when the runtime cannot
    /// observe visibility. Returns the newly revealed blocks.
    pub fn reveal_all(&mut self) -> Vec<BlockId> {
        let newly: Vec<BlockId> = std::mem::take(&mut self.observed).into_iter().collect();
        self.revealed.extend(newly.iter().cloned());
        newly
    }

    #[must_use]
    pub fn is_revealed(&self, block: &BlockId) -> bool {
        self.revealed.contains(block)
    }

    #[must_use]
    pub fn is_observed(&self, block: &BlockId) -> bool {
        self.observed.contains(block)
    }

    #[must_use]
    pub const fn revealed(&self) -> &BTreeSet<BlockId> {
        &self.revealed
    }

    /// Blocks still waiting to be revealed.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.observed.len()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use proptest::prelude::*;

    fn tracker_with(blocks: &[&str]) -> RevealTracker {
        let mut tracker = RevealTracker::new(0.14);
        for block in blocks {
            tracker.observe(BlockId::from(*block));
        }
        tracker
    }

    #[test]
    fn given_block_below_threshold_when_reported_then_pending() {
        let mut tracker = tracker_with(&["about"]);
        let block = BlockId::from("about");
        assert_eq!(tracker.on_visibility(&block, 0.1), RevealOutcome::Pending);
        assert!(!tracker.is_revealed(&block));
    }

    #[test]
    fn given_block_at_threshold_when_reported_then_revealed_and_unobserved() {
        let mut tracker = tracker_with(&["about"]);
        let block = BlockId::from("about");
        assert_eq!(tracker.on_visibility(&block, 0.14), RevealOutcome::Revealed);
        assert!(tracker.is_revealed(&block));
        assert!(!tracker.is_observed(&block));
        assert_eq!(tracker.on_visibility(&block, 1.0), RevealOutcome::Ignored);
    }

    #[test]
    fn given_revealed_block_when_visibility_drops_then_stays_revealed() {
        let mut tracker = tracker_with(&["card-1"]);
        let block = BlockId::from("card-1");
        tracker.on_visibility(&block, 0.9);
        tracker.on_visibility(&block, 0.0);
        tracker.observe(block.clone());
        assert!(tracker.is_revealed(&block));
        assert!(!tracker.is_observed(&block));
    }

    #[test]
    fn given_unknown_block_when_reported_then_ignored() {
        let mut tracker = tracker_with(&["about"]);
        assert_eq!(
            tracker.on_visibility(&BlockId::from("ghost"), 1.0),
            RevealOutcome::Ignored
        );
    }

    #[test]
    fn given_no_observer_support_when_reveal_all_then_every_block_revealed() {
        let mut tracker = tracker_with(&["a", "b", "c"]);
        let newly = tracker.reveal_all();
        assert_eq!(newly.len(), 3);
        assert_eq!(tracker.pending_count(), 0);
        assert_eq!(tracker.revealed().len(), 3);
        assert!(tracker.reveal_all().is_empty());
    }

    proptest! {
        #[test]
        fn prop_reveal_flags_are_monotonic(
            reports in proptest::collection::vec((0usize..4, 0.0f64..=1.0), 0..64)
        ) {
            let names = ["a", "b", "c", "d"];
            let mut tracker = tracker_with(&names);
            let mut seen = BTreeSet::new();

            for (index, ratio) in reports {
                let block = BlockId::from(names.get(index).copied().unwrap_or("a"));
                tracker.on_visibility(&block, ratio);
                for earlier in &seen {
                    prop_assert!(tracker.is_revealed(earlier));
                }
                if tracker.is_revealed(&block) {
                    seen.insert(block);
                }
            }
        }
    }
}

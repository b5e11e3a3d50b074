//! One-shot reveal bookkeeping.
//!
//! Every element that animates in on first sight gets a `RevealKey`. The
//! tracker records which keys are still being watched and which have been
//! revealed. A key moves from watched to revealed at most once and never
//! moves back.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::BTreeSet;

/// Identifier stamped on a revealable element (`data-reveal`).
pub type RevealKey = u32;

/// Class added to an element once it has been revealed.
pub const REVEALED_CLASS: &str = "active";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealTracker {
    next_key: RevealKey,
    watching: BTreeSet<RevealKey>,
    revealed: BTreeSet<RevealKey>,
}

impl RevealTracker {
    /// Allocate a key for a new element and start watching it.
    pub fn register(&mut self) -> RevealKey {
        let key = self.next_key;
        self.next_key += 1;
        self.watching.insert(key);
        key
    }

    /// Apply a batch of intersection observations.
    ///
    /// Returns the keys revealed by this batch, in delivery order. Those keys
    /// stop being watched; the caller should unobserve their elements.
    /// Unknown or already revealed keys are ignored.
    pub fn apply_batch<I>(&mut self, batch: I) -> Vec<RevealKey>
    where
        I: IntoIterator<Item = (RevealKey, bool)>,
    {
        let mut newly = Vec::new();
        for (key, intersecting) in batch {
            if intersecting && self.watching.remove(&key) {
                self.revealed.insert(key);
                newly.push(key);
            }
        }
        newly
    }

    #[cfg(test)]
    pub fn is_watching(&self, key: RevealKey) -> bool {
        self.watching.contains(&key)
    }

    #[cfg(test)]
    pub fn is_revealed(&self, key: RevealKey) -> bool {
        self.revealed.contains(&key)
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.watching.len()
    }
}

/// Parse the `data-reveal` attribute back into a key.
pub fn parse_key(raw: &str) -> Option<RevealKey> {
    raw.trim().parse().ok()
}

/// Class string for a revealable element.
pub fn reveal_class(extra: &str, revealed: bool) -> String {
    let mut class = String::from("reveal");
    let extra = extra.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    if revealed {
        class.push(' ');
        class.push_str(REVEALED_CLASS);
    }
    class
}

//! First-encounter-ordered frequency counting.
//!
//! Rankings and dominant values must not depend on incidental hash-map
//! iteration order, so counting is Vec-backed: entries appear in the order
//! their key was first seen, and all tie-breaks resolve to the earliest
//! entry.

use crate::types::NamedCount;

#[derive(Debug, Default)]
pub(crate) struct OrderedCounter {
    entries: Vec<(String, usize)>,
}

impl OrderedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`, registering it on first sight.
    pub fn add(&mut self, key: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((key.to_owned(), 1)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest-count key; ties break to the first-encountered entry.
    pub fn dominant(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.entries {
            // Strictly-greater keeps the earliest entry on ties.
            if best.is_none_or(|(_, count)| entry.1 > *count) {
                best = Some(entry);
            }
        }
        best.map(|(key, _)| key.as_str())
    }

    /// Up to `n` keys ranked by count descending; equal counts keep
    /// first-encounter order.
    pub fn top_n(&self, n: usize) -> Vec<String> {
        let mut ranked = self.entries.clone();
        ranked.sort_by_key(|(_, count)| std::cmp::Reverse(*count));
        ranked.into_iter().take(n).map(|(key, _)| key).collect()
    }

    pub fn into_named_counts(self) -> Vec<NamedCount> {
        self.entries
            .into_iter()
            .map(|(name, count)| NamedCount { name, count })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_first_encounter_order() {
        let mut counter = OrderedCounter::new();
        counter.add("b");
        counter.add("a");
        counter.add("b");
        let counts = counter.into_named_counts();
        assert_eq!(counts[0].name, "b");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].name, "a");
    }

    #[test]
    fn dominant_breaks_ties_toward_earliest() {
        let mut counter = OrderedCounter::new();
        counter.add("x");
        counter.add("y");
        counter.add("y");
        counter.add("x");
        assert_eq!(counter.dominant(), Some("x"));
    }

    #[test]
    fn dominant_of_empty_counter_is_none() {
        assert_eq!(OrderedCounter::new().dominant(), None);
    }

    #[test]
    fn top_n_ranks_by_count_then_encounter_order() {
        let mut counter = OrderedCounter::new();
        for key in ["a", "b", "b", "c", "c", "d"] {
            counter.add(key);
        }
        assert_eq!(counter.top_n(3), vec!["b", "c", "a"]);
    }
}

//! Cross-corpus copy statistics: headline patterns, length and readability
//! buckets, opening hooks, and copywriting-formula detection.

use std::sync::LazyLock;

use adintel_classify::lexicon::{
    AIDA_ACTION, AIDA_ATTENTION, BAB_AFTER, BAB_BEFORE, BAB_BRIDGE, HEADLINE_PATTERNS,
    PAS_AGITATE, PAS_PROBLEM, PAS_SOLUTION,
};
use adintel_core::AdRecord;
use regex::Regex;

use crate::types::{CopyPatternStats, NamedCount};

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Problem-Agitate-Solution: requires a hit in all three word groups.
#[must_use]
pub fn detect_pas(text: &str) -> bool {
    PAS_PROBLEM.is_match(text) && PAS_AGITATE.is_match(text) && PAS_SOLUTION.is_match(text)
}

/// Attention-Interest-Desire-Action.
///
/// Only the attention and action groups are required; the interest and
/// desire groups exist in the lexicon but do not gate detection.
#[must_use]
pub fn detect_aida(text: &str) -> bool {
    AIDA_ATTENTION.is_match(text) && AIDA_ACTION.is_match(text)
}

/// Before-After-Bridge: requires a hit in all three word groups.
#[must_use]
pub fn detect_bab(text: &str) -> bool {
    BAB_BEFORE.is_match(text) && BAB_AFTER.is_match(text) && BAB_BRIDGE.is_match(text)
}

/// Split a primary text into its non-empty sentences.
fn sentences_of(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Compute the copy-pattern statistics for a corpus, in corpus order.
#[must_use]
pub fn analyze_copy_patterns(records: &[AdRecord]) -> CopyPatternStats {
    let mut stats = CopyPatternStats {
        headlines: HEADLINE_PATTERNS
            .iter()
            .map(|(name, _)| NamedCount {
                name: (*name).to_owned(),
                count: 0,
            })
            .collect(),
        ..CopyPatternStats::default()
    };

    for record in records {
        let copy = &record.creative.copy;

        if let Some(headline) = copy.headline.as_deref() {
            for (index, (_, pattern)) in HEADLINE_PATTERNS.iter().enumerate() {
                if pattern.is_match(headline) {
                    stats.headlines[index].count += 1;
                }
            }
        }

        // Every record buckets by length, including zero-word ones.
        match copy.word_count {
            0..=49 => stats.copy_length.short += 1,
            50..=150 => stats.copy_length.medium += 1,
            _ => stats.copy_length.long += 1,
        }

        if let Some(primary) = copy.primary_text.as_deref() {
            let sentences = sentences_of(primary);
            // A text with no sentence breaks at all divides into "infinitely
            // long sentences" and buckets complex.
            #[allow(clippy::cast_precision_loss)]
            let avg_words = if sentences.is_empty() {
                f64::INFINITY
            } else {
                copy.word_count as f64 / sentences.len() as f64
            };
            if avg_words < 10.0 {
                stats.readability.simple += 1;
            } else if avg_words <= 20.0 {
                stats.readability.moderate += 1;
            } else {
                stats.readability.complex += 1;
            }

            if let Some(first) = sentences.first() {
                stats.hooks.push((*first).to_owned());
            }

            if detect_pas(primary) {
                stats.formulas.pas += 1;
            }
            if detect_aida(primary) {
                stats.formulas.aida += 1;
            }
            if detect_bab(primary) {
                stats.formulas.bab += 1;
            }
        }
    }

    stats
}

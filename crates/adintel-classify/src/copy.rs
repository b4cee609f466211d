//! Fragment-to-field copy assignment.
//!
//! Tie-breaks are pinned explicitly: fragment dedup preserves first
//! occurrence, headline candidates are stably sorted by vertical position,
//! and equal-length primary candidates resolve to the earliest fragment in
//! sorted-by-length-descending order.

use adintel_core::CandidateFragment;

/// Result of copy classification over one ad's fragments.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct CopyAssignment {
    pub headline: Option<String>,
    pub primary_text: Option<String>,
    pub description: Option<String>,
}

/// Deduplicate fragment texts, preserving first occurrence order.
fn dedup_texts(fragments: &[CandidateFragment]) -> Vec<&str> {
    let mut texts: Vec<&str> = Vec::new();
    for fragment in fragments {
        if !texts.contains(&fragment.text.as_str()) {
            texts.push(fragment.text.as_str());
        }
    }
    texts
}

/// Topmost known layout position among fragments carrying `text`. Texts with
/// no positioned fragment rank at infinity so positioned fragments always
/// win.
fn position_of(fragments: &[CandidateFragment], text: &str) -> f64 {
    fragments
        .iter()
        .filter(|f| f.text == text)
        .filter_map(|f| f.vertical_position)
        .fold(f64::INFINITY, f64::min)
}

/// True when `text` qualifies as a headline candidate: character length in
/// the exclusive window (10, 100) and a question mark, an exclamation mark,
/// or an ASCII-uppercase first character.
fn is_headline_candidate(text: &str) -> bool {
    let len = text.chars().count();
    if len <= 10 || len >= 100 {
        return false;
    }
    text.contains('?')
        || text.contains('!')
        || text.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Assign headline, primary text, and description from one ad's fragments.
///
/// The three outputs are pairwise distinct whenever present.
pub(crate) fn classify_copy(fragments: &[CandidateFragment]) -> CopyAssignment {
    let texts = dedup_texts(fragments);
    if texts.is_empty() {
        return CopyAssignment::default();
    }

    // Headline: the candidate highest on the page.
    let mut candidates: Vec<&str> = texts
        .iter()
        .copied()
        .filter(|t| is_headline_candidate(t))
        .collect();
    candidates.sort_by(|a, b| {
        position_of(fragments, a).total_cmp(&position_of(fragments, b))
    });
    let headline = candidates.first().map(|t| (*t).to_owned());

    // Primary text: the longest text that is not the headline; if every text
    // equals the headline, fall back to the longest overall.
    let mut by_length: Vec<&str> = texts.clone();
    by_length.sort_by_key(|t| std::cmp::Reverse(t.chars().count()));
    let primary_text = by_length
        .iter()
        .copied()
        .find(|t| Some(*t) != headline.as_deref())
        .or_else(|| by_length.first().copied())
        .map(ToOwned::to_owned);

    // Description: first text in original order longer than 50 chars that
    // differs from both assignments.
    let description = texts
        .iter()
        .copied()
        .find(|t| {
            t.chars().count() > 50
                && Some(*t) != headline.as_deref()
                && Some(*t) != primary_text.as_deref()
        })
        .map(ToOwned::to_owned);

    CopyAssignment {
        headline,
        primary_text,
        description,
    }
}

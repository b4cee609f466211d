//! Lexicon tables for classification and corpus analysis.
//!
//! All pattern/weight tables live here as declarative data so new categories
//! can be added without touching control flow. Patterns are case-insensitive
//! substring alternations compiled once via `LazyLock`.

use std::sync::LazyLock;

use adintel_core::{Differentiator, Positioning, TriggerCategory};
use regex::Regex;

/// One persuasion-trigger rule: category, lexical pattern, urgency weight.
#[derive(Debug)]
pub struct TriggerRule {
    pub category: TriggerCategory,
    pub pattern: Regex,
    pub weight: i32,
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid lexicon regex")
}

/// The seven fixed trigger categories, in scoring order.
///
/// Weights sum into a record's `urgency`; fear is the only negative weight.
pub static TRIGGER_LEXICON: LazyLock<Vec<TriggerRule>> = LazyLock::new(|| {
    vec![
        TriggerRule {
            category: TriggerCategory::Fear,
            pattern: re(r"(?i)afraid|scared|worry|risk|miss out|mistake|fail|lose"),
            weight: -1,
        },
        TriggerRule {
            category: TriggerCategory::Greed,
            pattern: re(r"(?i)save|discount|free|bonus|profit|earn|money|rich"),
            weight: 2,
        },
        TriggerRule {
            category: TriggerCategory::Trust,
            pattern: re(r"(?i)trusted|proven|guaranteed|certified|expert|professional|reliable"),
            weight: 1,
        },
        TriggerRule {
            category: TriggerCategory::Urgency,
            pattern: re(r"(?i)now|today|hurry|fast|quick|instant|immediately|limited|expires"),
            weight: 3,
        },
        TriggerRule {
            category: TriggerCategory::SocialProof,
            pattern: re(r"(?i)others|everyone|million|thousand|customers|users|people love"),
            weight: 1,
        },
        TriggerRule {
            category: TriggerCategory::Curiosity,
            pattern: re(r"(?i)secret|discover|revealed|hidden|trick|hack|little.known"),
            weight: 2,
        },
        TriggerRule {
            category: TriggerCategory::Exclusivity,
            pattern: re(r"(?i)exclusive|vip|insider|special|select|invite.only"),
            weight: 2,
        },
    ]
});

/// Weight of one trigger category per the table above.
#[must_use]
pub fn trigger_weight(category: TriggerCategory) -> i32 {
    TRIGGER_LEXICON
        .iter()
        .find(|rule| rule.category == category)
        .map_or(0, |rule| rule.weight)
}

/// The fixed power-word lexicon, matched anywhere in the combined copy.
pub static POWER_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?i)amazing|incredible|revolutionary|breakthrough|transform|guaranteed|proven|instant|exclusive|limited")
});

/// Whole-word you/your — the personal-tone signal.
pub static PERSONAL_WORDS: LazyLock<Regex> = LazyLock::new(|| re(r"\byou\b|\byour\b"));

/// Ordered positioning rules; only the first matching rule applies.
pub static POSITIONING_RULES: LazyLock<Vec<(Regex, Positioning)>> = LazyLock::new(|| {
    vec![
        (re(r"(?i)premium|luxury|exclusive"), Positioning::Premium),
        (re(r"(?i)cheap|affordable|budget|save"), Positioning::Value),
        (
            re(r"(?i)innovative|revolutionary|cutting.edge"),
            Positioning::InnovationLeader,
        ),
        (
            re(r"(?i)trusted|reliable|established"),
            Positioning::TrustedAuthority,
        ),
    ]
});

/// Differentiator patterns, tested independently (an ad can claim several).
pub static DIFFERENTIATOR_PATTERNS: LazyLock<Vec<(Regex, Differentiator)>> =
    LazyLock::new(|| {
        vec![
            (re(r"(?i)first|only|unique"), Differentiator::FirstMover),
            (
                re(r"(?i)patented|proprietary"),
                Differentiator::ProprietaryTech,
            ),
            (
                re(r"(?i)award.winning|rated.#1"),
                Differentiator::IndustryRecognition,
            ),
            (re(r"(?i)guarantee|warranty"), Differentiator::RiskReversal),
            (
                re(r"(?i)24.7|always.available"),
                Differentiator::Availability,
            ),
        ]
    });

/// The six rhetorical headline patterns counted by the corpus aggregator.
/// Keys are the stat names surfaced in insights output.
pub static HEADLINE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        ("questions", re(r"\?")),
        ("numbers", re(r"\d")),
        ("urgency", re(r"(?i)now|today|hurry|limited|fast")),
        ("curiosity", re(r"(?i)secret|discover|revealed|hidden")),
        ("negative", re(r"(?i)don't|never|stop|avoid|mistake")),
        ("benefit", re(r"(?i)benefit|advantage|improve|boost|increase")),
    ]
});

// ---------------------------------------------------------------------------
// Copy-formula word groups
// ---------------------------------------------------------------------------

/// Problem-Agitate-Solution: all three groups must match.
pub static PAS_PROBLEM: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)problem|issue|struggle|challenge|frustrat|difficult"));
pub static PAS_AGITATE: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)worse|terrible|awful|devastating|painful|costly"));
pub static PAS_SOLUTION: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)solution|solve|answer|fix|help|discover"));

/// Attention-Interest-Desire-Action. The detector requires only attention +
/// action; the interest and desire groups are part of the lexicon but not
/// part of the detection rule.
pub static AIDA_ATTENTION: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)attention|warning|alert|discover|new|revolutionary"));
pub static AIDA_INTEREST: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)interesting|curious|wonder|imagine|think about"));
pub static AIDA_DESIRE: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)want|need|desire|wish|dream|love"));
pub static AIDA_ACTION: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)click|buy|order|start|get|join|learn more"));

/// Before-After-Bridge: all three groups must match.
pub static BAB_BEFORE: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)before|currently|now|today|problem|struggle"));
pub static BAB_AFTER: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)after|imagine|picture|visualize|could be|will be"));
pub static BAB_BRIDGE: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)here's how|the solution|the answer|the way"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_lexicon_has_seven_categories() {
        assert_eq!(TRIGGER_LEXICON.len(), 7);
    }

    #[test]
    fn trigger_weights_match_fixed_table() {
        assert_eq!(trigger_weight(TriggerCategory::Fear), -1);
        assert_eq!(trigger_weight(TriggerCategory::Greed), 2);
        assert_eq!(trigger_weight(TriggerCategory::Trust), 1);
        assert_eq!(trigger_weight(TriggerCategory::Urgency), 3);
        assert_eq!(trigger_weight(TriggerCategory::SocialProof), 1);
        assert_eq!(trigger_weight(TriggerCategory::Curiosity), 2);
        assert_eq!(trigger_weight(TriggerCategory::Exclusivity), 2);
    }

    #[test]
    fn trigger_patterns_are_case_insensitive_substrings() {
        let urgency = &TRIGGER_LEXICON[3];
        assert_eq!(urgency.category, TriggerCategory::Urgency);
        assert!(urgency.pattern.is_match("Act NOW"));
        assert!(urgency.pattern.is_match("snowfall")); // substring semantics
    }

    #[test]
    fn curiosity_joiner_matches_any_character() {
        let curiosity = &TRIGGER_LEXICON[5];
        assert!(curiosity.pattern.is_match("a little-known fact"));
        assert!(curiosity.pattern.is_match("a little known fact"));
    }

    #[test]
    fn personal_words_require_word_boundaries() {
        assert_eq!(PERSONAL_WORDS.find_iter("you your yours").count(), 2);
        assert_eq!(PERSONAL_WORDS.find_iter("bayou").count(), 0);
    }

    #[test]
    fn headline_patterns_cover_six_keys() {
        let keys: Vec<&str> = HEADLINE_PATTERNS.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "questions",
                "numbers",
                "urgency",
                "curiosity",
                "negative",
                "benefit"
            ]
        );
    }

    #[test]
    fn industry_recognition_matches_rated_number_one() {
        let (pattern, tag) = &DIFFERENTIATOR_PATTERNS[2];
        assert_eq!(*tag, Differentiator::IndustryRecognition);
        assert!(pattern.is_match("rated #1 by reviewers"));
        assert!(pattern.is_match("an award-winning formula"));
    }
}

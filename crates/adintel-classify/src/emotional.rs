//! Emotional scoring of ad copy against the trigger and power-word lexicons.

use adintel_core::{EmotionalProfile, SentimentLabel, TriggerCategory};

use crate::lexicon::{PERSONAL_WORDS, POWER_WORDS, TRIGGER_LEXICON};

/// Score the combined headline + primary text.
///
/// `urgency` is the running sum of the matched categories' weights and can
/// go negative; `personal_level` is clamped to `[0, 1]`. Sentiment rules are
/// ordered: fear dominates, then a power-word count above two, then trust.
#[must_use]
pub fn analyze_emotional_content(primary_text: &str, headline: Option<&str>) -> EmotionalProfile {
    let combined = format!("{} {}", headline.unwrap_or(""), primary_text).to_lowercase();

    let mut triggers: Vec<TriggerCategory> = Vec::new();
    let mut urgency = 0i32;
    for rule in TRIGGER_LEXICON.iter() {
        if rule.pattern.is_match(&combined) {
            triggers.push(rule.category);
            urgency += rule.weight;
        }
    }

    // Power words, deduplicated in first-occurrence order.
    let mut power_words: Vec<String> = Vec::new();
    for found in POWER_WORDS.find_iter(&combined) {
        let word = found.as_str().to_owned();
        if !power_words.contains(&word) {
            power_words.push(word);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let you_count = PERSONAL_WORDS.find_iter(&combined).count() as f32;
    let personal_level = (you_count / 10.0).min(1.0);

    let sentiment = if triggers.contains(&TriggerCategory::Fear) {
        SentimentLabel::Negative
    } else if power_words.len() > 2 || triggers.contains(&TriggerCategory::Trust) {
        SentimentLabel::Positive
    } else {
        SentimentLabel::Neutral
    };

    EmotionalProfile {
        triggers,
        sentiment,
        urgency,
        personal_level,
        power_words,
    }
}

//! The fixed recommendation rule set.
//!
//! Priorities are per-rule constants, never computed. An empty corpus
//! produces no recommendations at all.

use crate::types::{CopyPatternStats, Priority, Recommendation, TriggerEffectiveness};

/// Apply the four fixed rules against the aggregated statistics.
#[must_use]
pub(crate) fn generate_recommendations(
    total_ads: usize,
    effectiveness: &[TriggerEffectiveness],
    patterns: &CopyPatternStats,
    platform_count: usize,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    if total_ads == 0 {
        return recommendations;
    }

    // Rule 1: the trigger with the highest mean days running. Strictly-
    // greater comparison keeps the first-encountered trigger on ties.
    let mut best: Option<&TriggerEffectiveness> = None;
    for entry in effectiveness {
        if best.is_none_or(|b| entry.avg_days_running > b.avg_days_running) {
            best = Some(entry);
        }
    }
    if let Some(best) = best {
        recommendations.push(Recommendation {
            kind: "emotional".to_owned(),
            priority: Priority::High,
            title: "Leverage High-Performing Emotional Triggers".to_owned(),
            description: format!(
                "Ads using \"{}\" triggers run {}% longer on average. Consider incorporating this in your copy.",
                best.trigger,
                best.avg_days_running.round()
            ),
        });
    }

    // Rule 2: the dominant copy-length bucket. Bucket order short, medium,
    // long pins the tie-break.
    let buckets = [
        ("short", patterns.copy_length.short),
        ("medium", patterns.copy_length.medium),
        ("long", patterns.copy_length.long),
    ];
    let (dominant_bucket, dominant_count) = buckets
        .iter()
        .fold(buckets[0], |best, &entry| if entry.1 > best.1 { entry } else { best });
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pct = ((dominant_count as f64 / total_ads as f64) * 100.0).round() as u64;
    recommendations.push(Recommendation {
        kind: "structure".to_owned(),
        priority: Priority::Medium,
        title: "Optimize Copy Length".to_owned(),
        description: format!(
            "{pct}% of ads use {dominant_bucket} copy length. This appears to be the industry standard."
        ),
    });

    // Rule 3: the most common rhetorical headline pattern, ties to the
    // earlier table entry.
    let mut top_pattern = patterns.headlines.first();
    for entry in &patterns.headlines {
        if top_pattern.is_none_or(|t| entry.count > t.count) {
            top_pattern = Some(entry);
        }
    }
    if let Some(top) = top_pattern {
        recommendations.push(Recommendation {
            kind: "headline".to_owned(),
            priority: Priority::High,
            title: "Apply Proven Headline Formulas".to_owned(),
            description: format!(
                "Headlines with {} are used in {} ads. This pattern shows strong engagement.",
                top.name, top.count
            ),
        });
    }

    // Rule 4: more than one distinct platform across the corpus.
    if platform_count > 1 {
        recommendations.push(Recommendation {
            kind: "platform".to_owned(),
            priority: Priority::Medium,
            title: "Multi-Platform Strategy".to_owned(),
            description: "Consider running ads across multiple platforms. Cross-platform campaigns show higher reach and engagement.".to_owned(),
        });
    }

    recommendations
}

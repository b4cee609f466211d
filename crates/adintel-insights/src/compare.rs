//! Advertiser profiling and side-by-side comparison.

use adintel_core::{AdRecord, Platform};

use crate::ordered::OrderedCounter;
use crate::types::{AdvertiserComparison, AdvertiserProfile};

/// Profile the sub-corpus of records whose `advertiser.name` equals `name`.
///
/// Returns `None` when no records match. Means are rounded; missing
/// `days_running` counts as zero, matching the corpus aggregator.
#[must_use]
pub fn profile_advertiser(records: &[AdRecord], name: &str) -> Option<AdvertiserProfile> {
    let ads: Vec<&AdRecord> = records
        .iter()
        .filter(|record| {
            record
                .advertiser
                .as_ref()
                .and_then(|a| a.name.as_deref())
                .is_some_and(|n| n == name)
        })
        .collect();

    if ads.is_empty() {
        return None;
    }

    let total_ads = ads.len();
    let active_ads = ads
        .iter()
        .filter(|record| record.performance.metrics.is_active)
        .count();

    let word_count_sum: usize = ads.iter().map(|r| r.creative.copy.word_count).sum();
    let days_sum: i64 = ads
        .iter()
        .map(|r| r.performance.metrics.days_running.unwrap_or(0))
        .sum();

    let mut trigger_counter = OrderedCounter::new();
    let mut positioning_counter = OrderedCounter::new();
    let mut platforms: Vec<Platform> = Vec::new();

    for record in &ads {
        for trigger in &record.creative.emotional.triggers {
            trigger_counter.add(&trigger.to_string());
        }
        positioning_counter.add(&record.strategy.positioning.to_string());
        for &platform in &record.targeting.platforms {
            if !platforms.contains(&platform) {
                platforms.push(platform);
            }
        }
    }

    let primary_strategy = positioning_counter
        .dominant()
        .unwrap_or("mixed")
        .to_owned();

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let avg_word_count = (word_count_sum as f64 / total_ads as f64).round() as i64;
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let avg_days_running = (days_sum as f64 / total_ads as f64).round() as i64;

    Some(AdvertiserProfile {
        name: name.to_owned(),
        total_ads,
        active_ads,
        avg_word_count,
        avg_days_running,
        emotional_profile: trigger_counter.into_named_counts(),
        primary_strategy,
        platforms,
    })
}

/// Run [`profile_advertiser`] independently for both names.
#[must_use]
pub fn compare_advertisers(
    records: &[AdRecord],
    first_name: &str,
    second_name: &str,
) -> AdvertiserComparison {
    AdvertiserComparison {
        first: profile_advertiser(records, first_name),
        second: profile_advertiser(records, second_name),
    }
}

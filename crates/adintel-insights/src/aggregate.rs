//! Corpus aggregation: a single-threaded fold over the materialized corpus.
//!
//! Single-threaded on purpose — rankings and dominant values depend on
//! deterministic first-encounter iteration order, which a parallel reduction
//! would perturb.

use adintel_core::{AdRecord, TriggerCategory};

use crate::copy_patterns::analyze_copy_patterns;
use crate::ordered::OrderedCounter;
use crate::recommend::generate_recommendations;
use crate::types::{
    CorpusInsights, CorpusSummary, Distribution, TriggerEffectiveness, VisualStats,
};

/// Per-trigger accumulator: occurrence count and summed days running.
#[derive(Debug)]
struct TriggerAccumulator {
    trigger: TriggerCategory,
    count: usize,
    days_sum: i64,
}

/// Group trigger usage across the corpus in first-encounter order.
///
/// `days_running` of `None` counts as zero toward the mean, so short-lived
/// and unparsed ads drag a trigger's average down rather than vanishing.
fn trigger_effectiveness(records: &[AdRecord]) -> Vec<TriggerEffectiveness> {
    let mut accumulators: Vec<TriggerAccumulator> = Vec::new();

    for record in records {
        let days = record.performance.metrics.days_running.unwrap_or(0);
        for &trigger in &record.creative.emotional.triggers {
            match accumulators.iter_mut().find(|a| a.trigger == trigger) {
                Some(accumulator) => {
                    accumulator.count += 1;
                    accumulator.days_sum += days;
                }
                None => accumulators.push(TriggerAccumulator {
                    trigger,
                    count: 1,
                    days_sum: days,
                }),
            }
        }
    }

    accumulators
        .into_iter()
        .map(|a| {
            #[allow(clippy::cast_precision_loss)]
            let avg_days_running = a.days_sum as f64 / a.count as f64;
            TriggerEffectiveness {
                trigger: a.trigger,
                count: a.count,
                avg_days_running,
            }
        })
        .collect()
}

fn distribution_of(counter: OrderedCounter) -> Distribution {
    let dominant = counter.dominant().map(ToOwned::to_owned);
    Distribution {
        entries: counter.into_named_counts(),
        dominant,
    }
}

fn summarize(records: &[AdRecord]) -> CorpusSummary {
    let total_ads = records.len();

    let mut advertisers: Vec<String> = Vec::new();
    let mut cta_counter = OrderedCounter::new();
    let mut domain_counter = OrderedCounter::new();
    let mut with_headlines = 0usize;
    let mut with_primary_copy = 0usize;
    let mut word_count_sum = 0usize;
    let mut word_count_samples = 0usize;
    let mut with_images = 0usize;
    let mut with_video = 0usize;
    let mut image_total = 0usize;
    let mut landing_pages_total = 0usize;

    for record in records {
        if let Some(name) = record.advertiser.as_ref().and_then(|a| a.name.as_deref()) {
            if !advertisers.iter().any(|seen| seen == name) {
                advertisers.push(name.to_owned());
            }
        }

        let copy = &record.creative.copy;
        if copy.headline.is_some() {
            with_headlines += 1;
        }
        if copy.primary_text.is_some() {
            with_primary_copy += 1;
        }
        if copy.word_count > 0 {
            word_count_sum += copy.word_count;
            word_count_samples += 1;
        }
        if let Some(cta) = copy.cta_button.as_deref() {
            cta_counter.add(cta);
        }

        let media = &record.creative.media;
        if !media.images.is_empty() {
            with_images += 1;
        }
        if media.has_video {
            with_video += 1;
        }
        image_total += media.images.len();

        if let Some(landing) = record.funnel.landing.as_ref() {
            landing_pages_total += 1;
            domain_counter.add(&landing.domain);
        }
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let avg_word_count = if word_count_samples == 0 {
        0
    } else {
        (word_count_sum as f64 / word_count_samples as f64).round() as i64
    };

    #[allow(clippy::cast_precision_loss)]
    let avg_images = if total_ads == 0 {
        0.0
    } else {
        image_total as f64 / total_ads as f64
    };

    CorpusSummary {
        total_ads,
        advertisers,
        with_headlines,
        with_primary_copy,
        avg_word_count,
        top_ctas: cta_counter.top_n(3),
        visual: VisualStats {
            with_images,
            with_video,
            avg_images,
        },
        landing_pages_total,
        top_domains: domain_counter.top_n(5),
    }
}

/// Aggregate a corpus into the full insights structure.
///
/// Pure and side-effect-free; an empty corpus yields zeroed statistics and
/// no recommendations rather than failing.
#[must_use]
pub fn analyze_corpus(records: &[AdRecord]) -> CorpusInsights {
    if records.is_empty() {
        tracing::debug!("aggregating empty corpus");
    }

    let summary = summarize(records);
    let copy_patterns = analyze_copy_patterns(records);
    let effectiveness = trigger_effectiveness(records);

    let mut domain_counter = OrderedCounter::new();
    let mut objective_counter = OrderedCounter::new();
    let mut positioning_counter = OrderedCounter::new();
    let mut differentiator_counter = OrderedCounter::new();
    let platform_count = {
        let mut seen: Vec<adintel_core::Platform> = Vec::new();
        for record in records {
            for &platform in &record.targeting.platforms {
                if !seen.contains(&platform) {
                    seen.push(platform);
                }
            }
        }
        seen.len()
    };

    for record in records {
        if let Some(landing) = record.funnel.landing.as_ref() {
            domain_counter.add(&landing.domain);
        }
        objective_counter.add(&record.strategy.objective.to_string());
        positioning_counter.add(&record.strategy.positioning.to_string());
        for differentiator in &record.strategy.differentiators {
            differentiator_counter.add(&differentiator.to_string());
        }
    }

    let top_differentiators = differentiator_counter.top_n(3);

    let recommendations = generate_recommendations(
        records.len(),
        &effectiveness,
        &copy_patterns,
        platform_count,
    );

    CorpusInsights {
        summary,
        copy_patterns,
        trigger_effectiveness: effectiveness,
        domains: distribution_of(domain_counter),
        objectives: distribution_of(objective_counter),
        positioning: distribution_of(positioning_counter),
        differentiators: distribution_of(differentiator_counter),
        top_differentiators,
        recommendations,
    }
}

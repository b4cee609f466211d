//! Per-ad classification orchestration.
//!
//! `classify_capture` is a total function over capture content: every
//! sub-field degrades to null/empty/default on malformed input, and no
//! content-level failure ever escapes as an error. Only the injectable
//! `now` touches the outside world, which keeps repeated classification of
//! the same capture bit-identical.

use std::sync::LazyLock;

use adintel_core::{
    AdCopy, AdMedia, AdRecord, Advertiser, Creative, EmotionalProfile, Funnel, Metrics,
    Performance, RawCapture, RecordMetadata, StrategyProfile, Targeting,
};
use chrono::{DateTime, Utc};
use regex::Regex;

use crate::copy::classify_copy;
use crate::cta::resolve_cta;
use crate::emotional::analyze_emotional_content;
use crate::strategy::analyze_strategy;
use crate::timeline::{days_running, extract_platforms, extract_timeline};

static LIBRARY_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Library ID:\s*(\d+)").expect("valid regex"));
static DISCLAIMER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Paid for by (.+?)(?:\n|$)").expect("valid regex"));

/// Classify one raw capture into an [`AdRecord`].
///
/// 1. Assign headline / primary text / description from the fragments.
/// 2. Resolve the CTA button and any redirect-through landing page.
/// 3. Score the emotional profile and infer strategy — both only when a
///    primary text was assigned.
/// 4. Extract timeline, platforms, and performance metrics from the raw
///    text, with `days_running` pinned to the caller's `now`.
/// 5. Merge the advertiser block with any "Paid for by" disclaimer.
#[must_use]
pub fn classify_capture(capture: &RawCapture, now: DateTime<Utc>) -> AdRecord {
    let assignment = classify_copy(&capture.fragments);

    let id = LIBRARY_ID_RE
        .captures(&capture.raw_text)
        .map(|captures| captures[1].to_owned());

    let cta_outcome = capture.cta.as_ref().map(resolve_cta);
    let (cta_button, landing) = match cta_outcome {
        Some(outcome) => (outcome.cta_button, outcome.landing),
        None => (None, None),
    };

    let media = capture.media.as_ref().map_or_else(AdMedia::default, |m| AdMedia {
        images: m.images.clone(),
        has_video: m.has_video,
    });

    let word_count = assignment
        .primary_text
        .as_deref()
        .map_or(0, |text| text.split_whitespace().count());

    // Emotional and strategic analysis need body copy to work on.
    let (emotional, strategy) = match assignment.primary_text.as_deref() {
        Some(primary) => {
            let emotional = analyze_emotional_content(primary, assignment.headline.as_deref());
            let strategy =
                analyze_strategy(primary, landing.as_ref(), &emotional, media.images.len());
            (emotional, strategy)
        }
        None => (EmotionalProfile::default(), StrategyProfile::default()),
    };

    let timeline = extract_timeline(&capture.raw_text);
    let metrics = Metrics {
        days_running: days_running(timeline.start_date.as_deref(), now),
        is_active: timeline.is_active,
        creatives_count: media.images.len() + usize::from(media.has_video),
    };

    let advertiser = merge_disclaimer(capture.advertiser.clone(), &capture.raw_text);

    let metadata = if capture.scraped_at.is_some() || capture.page_url.is_some() {
        Some(RecordMetadata {
            scraped_at: capture.scraped_at,
            page_url: capture.page_url.clone(),
        })
    } else {
        None
    };

    if id.is_none() {
        tracing::debug!("capture has no library id; record will be unlinked");
    }

    AdRecord {
        id,
        advertiser,
        creative: Creative {
            copy: AdCopy {
                headline: assignment.headline,
                primary_text: assignment.primary_text,
                description: assignment.description,
                cta_button,
                word_count,
            },
            media,
            emotional,
        },
        funnel: Funnel { landing },
        targeting: Targeting {
            platforms: extract_platforms(&capture.raw_text),
        },
        performance: Performance { timeline, metrics },
        strategy,
        metadata,
    }
}

/// Attach a "Paid for by <name>" disclaimer to the advertiser block,
/// creating the block when the capture carried none.
fn merge_disclaimer(advertiser: Option<Advertiser>, raw_text: &str) -> Option<Advertiser> {
    let disclaimer = DISCLAIMER_RE
        .captures(raw_text)
        .map(|captures| captures[1].trim().to_owned());

    match (advertiser, disclaimer) {
        (Some(mut advertiser), Some(disclaimer)) => {
            advertiser.disclaimer = Some(disclaimer);
            Some(advertiser)
        }
        (Some(advertiser), None) => Some(advertiser),
        (None, Some(disclaimer)) => Some(Advertiser {
            disclaimer: Some(disclaimer),
            ..Advertiser::default()
        }),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adintel_core::{CandidateFragment, CtaLink, Platform};
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn empty_capture_yields_default_record() {
        let record = classify_capture(&RawCapture::default(), fixed_now());
        assert!(record.id.is_none());
        assert!(record.advertiser.is_none());
        assert!(record.creative.copy.headline.is_none());
        assert!(record.creative.copy.primary_text.is_none());
        assert_eq!(record.creative.copy.word_count, 0);
        assert!(record.funnel.landing.is_none());
        assert_eq!(record.targeting.platforms, vec![Platform::Facebook]);
        assert!(record.performance.metrics.days_running.is_none());
        assert!(record.performance.metrics.is_active);
        assert_eq!(record.creative.emotional, EmotionalProfile::default());
        assert_eq!(record.strategy, StrategyProfile::default());
    }

    #[test]
    fn library_id_is_extracted_from_raw_text() {
        let capture = RawCapture {
            raw_text: "Library ID: 842299310\nStarted running on Jan 5, 2025".to_owned(),
            ..RawCapture::default()
        };
        let record = classify_capture(&capture, fixed_now());
        assert_eq!(record.id.as_deref(), Some("842299310"));
    }

    #[test]
    fn word_count_derives_from_primary_text() {
        let capture = RawCapture {
            fragments: vec![CandidateFragment::text_only(
                "five words of body copy",
            )],
            ..RawCapture::default()
        };
        let record = classify_capture(&capture, fixed_now());
        assert_eq!(record.creative.copy.word_count, 5);
    }

    #[test]
    fn classification_is_deterministic_with_pinned_now() {
        let capture = RawCapture {
            raw_text: "Library ID: 1\nStarted running on Jan 5, 2025\nFacebook Instagram"
                .to_owned(),
            fragments: vec![
                CandidateFragment::text_only("Is this the end?"),
                CandidateFragment::text_only(
                    "Discover the secret guaranteed way to save now! It works for you.",
                ),
            ],
            ..RawCapture::default()
        };
        let first = classify_capture(&capture, fixed_now());
        let second = classify_capture(&capture, fixed_now());
        assert_eq!(first, second);
    }

    #[test]
    fn copy_fields_are_pairwise_distinct() {
        let capture = RawCapture {
            fragments: vec![
                CandidateFragment::text_only("Is your skin ready for summer?"),
                CandidateFragment::text_only(
                    "Our proven formula has helped thousands of customers glow with confidence every single day.",
                ),
                CandidateFragment::text_only(
                    "A lightweight serum built around clinically studied actives.",
                ),
            ],
            ..RawCapture::default()
        };
        let record = classify_capture(&capture, fixed_now());
        let copy = &record.creative.copy;
        let headline = copy.headline.as_deref().expect("headline");
        let primary = copy.primary_text.as_deref().expect("primary");
        let description = copy.description.as_deref().expect("description");
        assert_ne!(headline, primary);
        assert_ne!(headline, description);
        assert_ne!(primary, description);
    }

    #[test]
    fn unparseable_start_date_nulls_days_running_only() {
        let capture = RawCapture {
            raw_text: "Started running on sometime last spring".to_owned(),
            ..RawCapture::default()
        };
        let record = classify_capture(&capture, fixed_now());
        assert_eq!(
            record.performance.timeline.start_date.as_deref(),
            Some("sometime last spring")
        );
        assert!(record.performance.metrics.days_running.is_none());
        assert!(record.performance.metrics.is_active);
    }

    #[test]
    fn landing_page_feeds_objective_inference() {
        let capture = RawCapture {
            fragments: vec![CandidateFragment::text_only(
                "long enough body copy describing the product in detail",
            )],
            cta: Some(CtaLink {
                text: "Shop Now".to_owned(),
                href: Some(
                    "https://l.facebook.com/l.php?u=https%3A%2F%2Fstore.example.com%2Fshop"
                        .to_owned(),
                ),
            }),
            ..RawCapture::default()
        };
        let record = classify_capture(&capture, fixed_now());
        assert_eq!(record.creative.copy.cta_button.as_deref(), Some("Shop Now"));
        let landing = record.funnel.landing.expect("landing");
        assert_eq!(landing.domain, "store.example.com");
        assert_eq!(record.strategy.objective, adintel_core::Objective::Sales);
    }

    #[test]
    fn strategy_stays_default_without_primary_text() {
        let capture = RawCapture {
            cta: Some(CtaLink {
                text: "Shop Now".to_owned(),
                href: Some(
                    "https://l.facebook.com/l.php?u=https%3A%2F%2Fstore.example.com%2Fshop"
                        .to_owned(),
                ),
            }),
            ..RawCapture::default()
        };
        let record = classify_capture(&capture, fixed_now());
        // Landing resolves, but with no body copy the strategic profile is
        // untouched.
        assert!(record.funnel.landing.is_some());
        assert_eq!(record.strategy, StrategyProfile::default());
    }

    #[test]
    fn creatives_count_sums_images_and_video() {
        let capture = RawCapture {
            media: Some(adintel_core::MediaDescriptor {
                images: vec![
                    adintel_core::ImageAsset {
                        url: "https://cdn.example.com/a.jpg".to_owned(),
                        alt: None,
                        width: None,
                        height: None,
                        is_carousel: false,
                    },
                    adintel_core::ImageAsset {
                        url: "https://cdn.example.com/b.jpg".to_owned(),
                        alt: None,
                        width: None,
                        height: None,
                        is_carousel: false,
                    },
                ],
                has_video: true,
            }),
            ..RawCapture::default()
        };
        let record = classify_capture(&capture, fixed_now());
        assert_eq!(record.performance.metrics.creatives_count, 3);
    }

    #[test]
    fn disclaimer_creates_advertiser_block_when_missing() {
        let capture = RawCapture {
            raw_text: "Paid for by Glow Labs PAC\nLibrary ID: 77".to_owned(),
            ..RawCapture::default()
        };
        let record = classify_capture(&capture, fixed_now());
        let advertiser = record.advertiser.expect("advertiser");
        assert!(advertiser.name.is_none());
        assert_eq!(advertiser.disclaimer.as_deref(), Some("Glow Labs PAC"));
    }

    #[test]
    fn disclaimer_merges_into_supplied_advertiser() {
        let capture = RawCapture {
            raw_text: "Paid for by Glow Labs PAC".to_owned(),
            advertiser: Some(Advertiser {
                name: Some("Glow Labs".to_owned()),
                ..Advertiser::default()
            }),
            ..RawCapture::default()
        };
        let record = classify_capture(&capture, fixed_now());
        let advertiser = record.advertiser.expect("advertiser");
        assert_eq!(advertiser.name.as_deref(), Some("Glow Labs"));
        assert_eq!(advertiser.disclaimer.as_deref(), Some("Glow Labs PAC"));
    }

    #[test]
    fn urgency_equals_sum_of_trigger_weights() {
        let capture = RawCapture {
            fragments: vec![CandidateFragment::text_only(
                "Hurry! This exclusive offer expires today. Thousands of customers trust it.",
            )],
            ..RawCapture::default()
        };
        let record = classify_capture(&capture, fixed_now());
        let derived: i32 = record
            .creative
            .emotional
            .triggers
            .iter()
            .map(|&t| crate::lexicon::trigger_weight(t))
            .sum();
        assert_eq!(record.creative.emotional.urgency, derived);
    }
}

//! Corpus aggregation and advertiser comparison for adintel.
//!
//! Consumes an ordered corpus of [`adintel_core::AdRecord`] and produces
//! copy-pattern statistics, emotional-trigger effectiveness rankings,
//! funnel/objective distributions, and ranked recommendations. Everything
//! here is a pure fold over the materialized corpus; iteration order and
//! tie-breaks are pinned to first-encounter order.

pub mod aggregate;
pub mod compare;
pub mod copy_patterns;
pub mod types;

mod ordered;
mod recommend;

pub use aggregate::analyze_corpus;
pub use compare::{compare_advertisers, profile_advertiser};
pub use copy_patterns::{analyze_copy_patterns, detect_aida, detect_bab, detect_pas};
pub use types::{
    AdvertiserComparison, AdvertiserProfile, CopyPatternStats, CorpusInsights, CorpusSummary,
    Distribution, NamedCount, Priority, Recommendation, TriggerEffectiveness,
};

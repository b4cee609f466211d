//! Output types for corpus aggregation and advertiser comparison.

use adintel_core::{Platform, TriggerCategory};
use serde::Serialize;

/// A frequency-table entry. Order of entries is first-encounter order over
/// the corpus, which also pins the dominant-value tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedCount {
    pub name: String,
    pub count: usize,
}

/// Copy length buckets by word count: `<50` short, `50–150` medium,
/// `>150` long. Every record buckets — zero-word ads count as short.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyLengthBuckets {
    pub short: usize,
    pub medium: usize,
    pub long: usize,
}

/// Readability buckets by average words per sentence: `<10` simple,
/// `10–20` moderate, `>20` complex. Only records with primary text bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityBuckets {
    pub simple: usize,
    pub moderate: usize,
    pub complex: usize,
}

/// Independent copywriting-formula counts; one ad can match several.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaCounts {
    pub pas: usize,
    pub aida: usize,
    pub bab: usize,
}

/// Cross-corpus copy statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyPatternStats {
    /// Counts per rhetorical headline pattern, in lexicon-table order.
    pub headlines: Vec<NamedCount>,
    pub copy_length: CopyLengthBuckets,
    pub readability: ReadabilityBuckets,
    /// First sentence of each ad's primary text, in corpus order.
    pub hooks: Vec<String>,
    pub formulas: FormulaCounts,
}

/// Effectiveness of one trigger category across the corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerEffectiveness {
    pub trigger: TriggerCategory,
    pub count: usize,
    /// Mean `days_running` over the ads exhibiting this trigger; missing
    /// values count as zero.
    pub avg_days_running: f64,
}

/// A frequency distribution with its dominant value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub entries: Vec<NamedCount>,
    /// Highest-frequency entry; ties break to the first-encountered one.
    /// `None` for an empty distribution.
    pub dominant: Option<String>,
}

/// Fixed recommendation priority. Never computed — each rule carries its
/// own constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

/// One actionable recommendation produced by the fixed rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: Priority,
    pub title: String,
    pub description: String,
}

/// Visual-strategy totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualStats {
    pub with_images: usize,
    pub with_video: usize,
    pub avg_images: f64,
}

/// Headline corpus-level summary numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusSummary {
    pub total_ads: usize,
    /// Unique advertiser names in first-encounter order.
    pub advertisers: Vec<String>,
    pub with_headlines: usize,
    pub with_primary_copy: usize,
    pub avg_word_count: i64,
    /// Up to three most frequent CTA texts.
    pub top_ctas: Vec<String>,
    pub visual: VisualStats,
    pub landing_pages_total: usize,
    /// Up to five most frequent landing domains.
    pub top_domains: Vec<String>,
}

/// The full aggregation output — a pure function of the corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusInsights {
    pub summary: CorpusSummary,
    pub copy_patterns: CopyPatternStats,
    pub trigger_effectiveness: Vec<TriggerEffectiveness>,
    pub domains: Distribution,
    pub objectives: Distribution,
    pub positioning: Distribution,
    pub differentiators: Distribution,
    /// Up to three most claimed differentiators.
    pub top_differentiators: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

/// Profile of a single advertiser's sub-corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertiserProfile {
    pub name: String,
    pub total_ads: usize,
    pub active_ads: usize,
    pub avg_word_count: i64,
    pub avg_days_running: i64,
    /// Trigger frequency in first-encounter order.
    pub emotional_profile: Vec<NamedCount>,
    /// Dominant positioning, same tie-break as the corpus distributions.
    pub primary_strategy: String,
    /// Platforms used, first-encounter order.
    pub platforms: Vec<Platform>,
}

/// Two independent advertiser profiles side by side. No cross-advertiser
/// normalization is performed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertiserComparison {
    pub first: Option<AdvertiserProfile>,
    pub second: Option<AdvertiserProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_serializes_type_and_priority_in_wire_form() {
        let recommendation = Recommendation {
            kind: "emotional".to_owned(),
            priority: Priority::High,
            title: "Leverage High-Performing Emotional Triggers".to_owned(),
            description: "details".to_owned(),
        };
        let json = serde_json::to_string(&recommendation).expect("serialize");
        assert!(json.contains("\"type\":\"emotional\""));
        assert!(json.contains("\"priority\":\"high\""));
    }

    #[test]
    fn distribution_serializes_camel_case() {
        let distribution = Distribution {
            entries: vec![NamedCount {
                name: "sales".to_owned(),
                count: 3,
            }],
            dominant: Some("sales".to_owned()),
        };
        let json = serde_json::to_string(&distribution).expect("serialize");
        assert!(json.contains("\"dominant\":\"sales\""));
        assert!(json.contains("\"count\":3"));
    }

    #[test]
    fn trigger_effectiveness_serializes_trigger_as_snake_case() {
        let entry = TriggerEffectiveness {
            trigger: adintel_core::TriggerCategory::SocialProof,
            count: 2,
            avg_days_running: 12.5,
        };
        let json = serde_json::to_string(&entry).expect("serialize");
        assert!(json.contains("\"trigger\":\"social_proof\""));
        assert!(json.contains("\"avgDaysRunning\":12.5"));
    }
}

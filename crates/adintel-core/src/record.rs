//! The `AdRecord` wire/storage schema.
//!
//! One `AdRecord` is the structured intelligence output for one
//! advertisement. Field names serialize in camelCase so the JSON layout is
//! the storage and upload format consumed by the dashboard boundary;
//! round-tripping a record through `serde_json` reproduces it
//! field-for-field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One of the seven fixed persuasion-signal classes.
///
/// Each category has a lexical pattern and an integer weight defined in the
/// classifier's lexicon tables; a record's `urgency` is always the sum of
/// the weights of exactly the categories present in its `triggers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerCategory {
    Fear,
    Greed,
    Trust,
    Urgency,
    SocialProof,
    Curiosity,
    Exclusivity,
}

impl std::fmt::Display for TriggerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriggerCategory::Fear => write!(f, "fear"),
            TriggerCategory::Greed => write!(f, "greed"),
            TriggerCategory::Trust => write!(f, "trust"),
            TriggerCategory::Urgency => write!(f, "urgency"),
            TriggerCategory::SocialProof => write!(f, "social_proof"),
            TriggerCategory::Curiosity => write!(f, "curiosity"),
            TriggerCategory::Exclusivity => write!(f, "exclusivity"),
        }
    }
}

/// Overall sentiment classification of an ad's copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Negative => write!(f, "negative"),
            SentimentLabel::Neutral => write!(f, "neutral"),
        }
    }
}

/// Campaign objective inferred from the landing URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    Sales,
    LeadGeneration,
    AppInstalls,
    Traffic,
    #[default]
    Unknown,
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Objective::Sales => write!(f, "sales"),
            Objective::LeadGeneration => write!(f, "lead_generation"),
            Objective::AppInstalls => write!(f, "app_installs"),
            Objective::Traffic => write!(f, "traffic"),
            Objective::Unknown => write!(f, "unknown"),
        }
    }
}

/// Market positioning inferred from the primary copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Positioning {
    Premium,
    Value,
    InnovationLeader,
    TrustedAuthority,
    #[default]
    Unknown,
}

impl std::fmt::Display for Positioning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Positioning::Premium => write!(f, "premium"),
            Positioning::Value => write!(f, "value"),
            Positioning::InnovationLeader => write!(f, "innovation_leader"),
            Positioning::TrustedAuthority => write!(f, "trusted_authority"),
            Positioning::Unknown => write!(f, "unknown"),
        }
    }
}

/// Creative approach inferred from triggers, media volume, and personal tone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Approach {
    DirectResponse,
    VisualStorytelling,
    Personalized,
    Informational,
    #[default]
    Unknown,
}

impl std::fmt::Display for Approach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Approach::DirectResponse => write!(f, "direct_response"),
            Approach::VisualStorytelling => write!(f, "visual_storytelling"),
            Approach::Personalized => write!(f, "personalized"),
            Approach::Informational => write!(f, "informational"),
            Approach::Unknown => write!(f, "unknown"),
        }
    }
}

/// Competitive differentiator claimed in the primary copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Differentiator {
    FirstMover,
    ProprietaryTech,
    IndustryRecognition,
    RiskReversal,
    Availability,
}

impl std::fmt::Display for Differentiator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Differentiator::FirstMover => write!(f, "first_mover"),
            Differentiator::ProprietaryTech => write!(f, "proprietary_tech"),
            Differentiator::IndustryRecognition => write!(f, "industry_recognition"),
            Differentiator::RiskReversal => write!(f, "risk_reversal"),
            Differentiator::Availability => write!(f, "availability"),
        }
    }
}

/// Delivery platform detected in the ad's raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Facebook,
    Instagram,
    Messenger,
    AudienceNetwork,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Facebook => write!(f, "facebook"),
            Platform::Instagram => write!(f, "instagram"),
            Platform::Messenger => write!(f, "messenger"),
            Platform::AudienceNetwork => write!(f, "audience_network"),
        }
    }
}

/// Advertiser identification. All fields are nullable — the extraction
/// component supplies whatever the page exposed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advertiser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub page_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub disclaimer: Option<String>,
}

/// Classified ad copy.
///
/// `headline`, `primary_text`, and `description` are pairwise distinct
/// whenever all present; `word_count` is always derived from `primary_text`
/// (0 when absent).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdCopy {
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub primary_text: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cta_button: Option<String>,
    #[serde(default)]
    pub word_count: usize,
}

/// One image asset attached to an ad creative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub is_carousel: bool,
}

/// Media attached to an ad creative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdMedia {
    #[serde(default)]
    pub images: Vec<ImageAsset>,
    #[serde(default)]
    pub has_video: bool,
}

/// Emotional profile scored from the combined headline + primary text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalProfile {
    #[serde(default)]
    pub triggers: Vec<TriggerCategory>,
    #[serde(default)]
    pub sentiment: SentimentLabel,
    /// Sum of the trigger weights for exactly the categories in `triggers`.
    /// Can be negative (fear carries a negative weight).
    #[serde(default)]
    pub urgency: i32,
    /// Whole-word you/your density, clamped to `[0, 1]`.
    #[serde(default)]
    pub personal_level: f32,
    #[serde(default)]
    pub power_words: Vec<String>,
}

/// Full creative block: copy, media, and emotional profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creative {
    #[serde(default)]
    pub copy: AdCopy,
    #[serde(default)]
    pub media: AdMedia,
    #[serde(default)]
    pub emotional: EmotionalProfile,
}

/// Resolved landing page behind a redirect-style CTA link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub url: String,
    pub domain: String,
    pub cta_text: String,
}

/// Funnel block. `landing` is present only when a redirect-through CTA link
/// was resolved to a destination URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Funnel {
    #[serde(default)]
    pub landing: Option<LandingPage>,
}

/// Targeting block. `platforms` is never empty — the classifier defaults to
/// `[facebook]` when no platform text is detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Targeting {
    #[serde(default = "default_platforms")]
    pub platforms: Vec<Platform>,
}

impl Default for Targeting {
    fn default() -> Self {
        Self {
            platforms: vec![Platform::Facebook],
        }
    }
}

/// Run timeline as extracted from the ad's raw text. Dates are kept as the
/// raw surface strings; `Metrics::days_running` holds the parsed elapsed
/// days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Default for Timeline {
    fn default() -> Self {
        // Optimistic: an ad with no timeline text is assumed active.
        Self {
            start_date: None,
            end_date: None,
            is_active: true,
        }
    }
}

/// Derived performance indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Floor of elapsed days since `start_date`, negative when the start
    /// date is in the future, `None` when the date failed to parse.
    #[serde(default)]
    pub days_running: Option<i64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub creatives_count: usize,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            days_running: None,
            is_active: true,
            creatives_count: 0,
        }
    }
}

/// Performance block: timeline plus derived metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    #[serde(default)]
    pub timeline: Timeline,
    #[serde(default)]
    pub metrics: Metrics,
}

/// Strategic profile inferred from copy, funnel, and media.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyProfile {
    #[serde(default)]
    pub objective: Objective,
    #[serde(default)]
    pub positioning: Positioning,
    #[serde(default)]
    pub differentiators: Vec<Differentiator>,
    #[serde(default)]
    pub approach: Approach,
}

/// Default for `Targeting::platforms` when the field is absent from stored
/// JSON. Serde's `default = "..."` attribute requires a function path.
fn default_platforms() -> Vec<Platform> {
    vec![Platform::Facebook]
}

/// Default for the `is_active` fields when absent (optimistic assumption).
fn default_active() -> bool {
    true
}

/// Scrape-side metadata carried along with a record. Not part of the
/// classification output proper; used by consumers for sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMetadata {
    #[serde(default)]
    pub scraped_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub page_url: Option<String>,
}

/// The structured, persisted intelligence output for one advertisement.
///
/// Created once by the classifier and immutable afterward; aggregation never
/// writes back into a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdRecord {
    /// Opaque ad identifier. May be absent — the record is simply unlinked.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub advertiser: Option<Advertiser>,
    #[serde(default)]
    pub creative: Creative,
    #[serde(default)]
    pub funnel: Funnel,
    #[serde(default)]
    pub targeting: Targeting,
    #[serde(default)]
    pub performance: Performance,
    #[serde(default)]
    pub strategy: StrategyProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<RecordMetadata>,
}

//! Raw-capture input types supplied by the external extraction component.
//!
//! ## Observed shapes from live Ads Library captures
//!
//! ### Fragments
//! Direct-selector extraction strategies yield text with font metadata but
//! no layout position; smart div scanning yields text with a bounding-box
//! `top` offset. We model position as `Option<f64>` — the copy classifier
//! treats an absent position as "bottom of page" when ranking headline
//! candidates.
//!
//! ### CTA links
//! The CTA `href` may be a direct destination, a `l.facebook.com/l.php`
//! redirect-through carrying the destination in the `u` query parameter, or
//! absent entirely (button elements with no link). Boilerplate chrome
//! ("See ad details", "Like", "Comment", "Share") reaches us as CTA text on
//! some card layouts and is filtered during classification.
//!
//! ### Raw text
//! `raw_text` is the card's full `innerText` and is the only source for the
//! library ID, the timeline lines ("Started running on ...", "Ran from ...
//! to ..."), the platform list, and the "Paid for by ..." disclaimer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::Advertiser;

/// One piece of raw text plus position/style metadata considered as a
/// possible headline/body/description source. Ephemeral: produced fresh per
/// extraction, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFragment {
    pub text: String,
    /// Tag identifying the extraction strategy that found this fragment.
    #[serde(default)]
    pub source_strategy: Option<String>,
    /// Layout offset from the top of the card; lower = higher on page.
    /// Absent for fragments found by strategies that do not measure layout.
    #[serde(default)]
    pub vertical_position: Option<f64>,
    #[serde(default)]
    pub font_size_px: Option<f64>,
    #[serde(default)]
    pub font_weight: Option<String>,
    #[serde(default)]
    pub is_link: bool,
    #[serde(default)]
    pub has_emoji: bool,
}

impl CandidateFragment {
    /// Convenience constructor for a text-only fragment with no layout data.
    #[must_use]
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_strategy: None,
            vertical_position: None,
            font_size_px: None,
            font_weight: None,
            is_link: false,
            has_emoji: false,
        }
    }
}

/// The CTA button/link as found on the card, before boilerplate filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaLink {
    pub text: String,
    #[serde(default)]
    pub href: Option<String>,
}

/// Media descriptors observed on the card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDescriptor {
    #[serde(default)]
    pub images: Vec<crate::record::ImageAsset>,
    #[serde(default)]
    pub has_video: bool,
}

/// Everything the extraction component hands over for one ad.
///
/// Every field degrades gracefully: an all-default capture still classifies
/// into a (mostly empty) record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCapture {
    /// Full raw text of the ad card.
    #[serde(default)]
    pub raw_text: String,
    #[serde(default)]
    pub fragments: Vec<CandidateFragment>,
    #[serde(default)]
    pub cta: Option<CtaLink>,
    #[serde(default)]
    pub media: Option<MediaDescriptor>,
    /// Advertiser block resolved from page links, when available.
    #[serde(default)]
    pub advertiser: Option<Advertiser>,
    #[serde(default)]
    pub scraped_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub page_url: Option<String>,
}

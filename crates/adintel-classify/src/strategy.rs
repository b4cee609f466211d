//! Strategic inference: objective, positioning, differentiators, approach.

use adintel_core::{
    Approach, EmotionalProfile, LandingPage, Objective, Positioning, StrategyProfile,
    TriggerCategory,
};

use crate::lexicon::{DIFFERENTIATOR_PATTERNS, POSITIONING_RULES};

/// Infer the strategic profile for an ad with known primary text.
///
/// Rule order is fixed: positioning takes the first matching rule only;
/// approach checks urgency trigger, then media volume, then personal tone.
#[must_use]
pub fn analyze_strategy(
    primary_text: &str,
    landing: Option<&LandingPage>,
    emotional: &EmotionalProfile,
    image_count: usize,
) -> StrategyProfile {
    let objective = landing.map_or(Objective::Unknown, |page| {
        let url = page.url.to_lowercase();
        if url.contains("shop") || url.contains("buy") {
            Objective::Sales
        } else if url.contains("signup") || url.contains("register") {
            Objective::LeadGeneration
        } else if url.contains("download") || url.contains("app") {
            Objective::AppInstalls
        } else {
            Objective::Traffic
        }
    });

    let positioning = POSITIONING_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(primary_text))
        .map_or(Positioning::Unknown, |(_, positioning)| *positioning);

    let differentiators = DIFFERENTIATOR_PATTERNS
        .iter()
        .filter(|(pattern, _)| pattern.is_match(primary_text))
        .map(|(_, tag)| *tag)
        .collect();

    let approach = if emotional.triggers.contains(&TriggerCategory::Urgency) {
        Approach::DirectResponse
    } else if image_count > 3 {
        Approach::VisualStorytelling
    } else if emotional.personal_level > 0.5 {
        Approach::Personalized
    } else {
        Approach::Informational
    };

    StrategyProfile {
        objective,
        positioning,
        differentiators,
        approach,
    }
}

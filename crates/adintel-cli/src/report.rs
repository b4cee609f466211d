//! Human-readable intelligence report rendering, plus the `report`
//! subcommand that profiles every watchlist advertiser.

use std::path::Path;

use adintel_core::AppConfig;
use adintel_insights::{profile_advertiser, AdvertiserProfile, CorpusInsights};

const RULE: &str = "================================================================================";

/// Print the full corpus insights in report form.
pub(crate) fn print_insights(insights: &CorpusInsights) {
    println!("{RULE}");
    println!("COMPETITIVE INTELLIGENCE REPORT");
    println!("{RULE}");

    let summary = &insights.summary;
    println!("\nSummary:");
    println!("  Total ads analyzed: {}", summary.total_ads);
    println!("  Unique advertisers: {}", summary.advertisers.len());

    println!("\nCopy intelligence:");
    println!("  Ads with headlines: {}", summary.with_headlines);
    println!("  Ads with body copy: {}", summary.with_primary_copy);
    println!("  Average word count: {}", summary.avg_word_count);
    if !summary.top_ctas.is_empty() {
        println!("  Most common CTAs: {}", summary.top_ctas.join(", "));
    }

    if !insights.trigger_effectiveness.is_empty() {
        println!("\nEmotional triggers:");
        let mut ranked = insights.trigger_effectiveness.clone();
        ranked.sort_by_key(|e| std::cmp::Reverse(e.count));
        for entry in ranked.iter().take(5) {
            #[allow(clippy::cast_precision_loss)]
            let pct = if summary.total_ads == 0 {
                0.0
            } else {
                entry.count as f64 / summary.total_ads as f64 * 100.0
            };
            println!(
                "  {}: {} ads ({}%), avg {} days running",
                entry.trigger,
                entry.count,
                pct.round(),
                entry.avg_days_running.round()
            );
        }
    }

    println!("\nFunnel analysis:");
    println!("  Landing pages captured: {}", summary.landing_pages_total);
    if !summary.top_domains.is_empty() {
        println!("  Top domains: {}", summary.top_domains.join(", "));
    }

    if !insights.objectives.entries.is_empty() {
        println!("\nCampaign objectives:");
        for entry in &insights.objectives.entries {
            println!("  {}: {} ads", entry.name, entry.count);
        }
    }

    println!("\nStrategic insights:");
    println!(
        "  Dominant positioning: {}",
        insights.positioning.dominant.as_deref().unwrap_or("unknown")
    );
    if !insights.top_differentiators.is_empty() {
        println!(
            "  Key differentiators: {}",
            insights.top_differentiators.join(", ")
        );
    }

    if !insights.recommendations.is_empty() {
        println!("\nRecommendations:");
        for recommendation in &insights.recommendations {
            println!(
                "  [{:?}] {} — {}",
                recommendation.priority, recommendation.title, recommendation.description
            );
        }
    }

    println!("{RULE}");
}

/// Print one advertiser profile.
pub(crate) fn print_profile(profile: &AdvertiserProfile) {
    println!("{}", profile.name);
    println!(
        "  {} ads ({} active), avg {} words, avg {} days running",
        profile.total_ads, profile.active_ads, profile.avg_word_count, profile.avg_days_running
    );
    println!("  Primary strategy: {}", profile.primary_strategy);
    if !profile.emotional_profile.is_empty() {
        let triggers: Vec<String> = profile
            .emotional_profile
            .iter()
            .map(|t| format!("{} ({})", t.name, t.count))
            .collect();
        println!("  Triggers: {}", triggers.join(", "));
    }
    let platforms: Vec<String> = profile.platforms.iter().map(ToString::to_string).collect();
    println!("  Platforms: {}", platforms.join(", "));
}

/// `report` subcommand: profile each watchlist advertiser found in the
/// corpus.
pub(crate) fn run(
    config: &AppConfig,
    corpus: Option<&Path>,
    watchlist: Option<&Path>,
) -> anyhow::Result<()> {
    let corpus_path = corpus.unwrap_or(&config.corpus_path);
    let records = adintel_store::load_corpus(corpus_path)?;

    let watchlist_path = watchlist.unwrap_or(&config.watchlist_path);
    let watchlist = adintel_core::load_watchlist(watchlist_path)?;

    println!("{RULE}");
    println!("WATCHLIST REPORT — {} ads in corpus", records.len());
    println!("{RULE}");

    for advertiser in &watchlist.advertisers {
        println!();
        match profile_advertiser(&records, &advertiser.name) {
            Some(profile) => print_profile(&profile),
            None => println!("{} — no ads in corpus", advertiser.name),
        }
    }

    Ok(())
}

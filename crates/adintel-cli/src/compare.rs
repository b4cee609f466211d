//! `compare` subcommand: two advertiser profiles side by side.

use std::path::Path;

use adintel_core::AppConfig;
use adintel_insights::compare_advertisers;

use crate::report::print_profile;

pub(crate) fn run(
    config: &AppConfig,
    corpus: Option<&Path>,
    first: &str,
    second: &str,
) -> anyhow::Result<()> {
    let corpus_path = corpus.unwrap_or(&config.corpus_path);
    let records = adintel_store::load_corpus(corpus_path)?;

    let comparison = compare_advertisers(&records, first, second);

    match comparison.first.as_ref() {
        Some(profile) => print_profile(profile),
        None => println!("{first} — no ads in corpus"),
    }
    println!();
    match comparison.second.as_ref() {
        Some(profile) => print_profile(profile),
        None => println!("{second} — no ads in corpus"),
    }

    Ok(())
}

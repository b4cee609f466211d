//! `analyze` subcommand: corpus in, insights report out.

use std::path::Path;

use anyhow::Context;

use adintel_core::AppConfig;
use adintel_insights::analyze_corpus;

use crate::report::print_insights;

pub(crate) fn run(
    config: &AppConfig,
    corpus: Option<&Path>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let corpus_path = corpus.unwrap_or(&config.corpus_path);
    let records = adintel_store::load_corpus(corpus_path)?;
    tracing::info!(count = records.len(), corpus = %corpus_path.display(), "corpus loaded");

    let insights = analyze_corpus(&records);
    print_insights(&insights);

    if let Some(output) = output {
        let json = serde_json::to_string_pretty(&insights)?;
        std::fs::write(output, json)
            .with_context(|| format!("writing insights to {}", output.display()))?;
        println!("Full insights written to {}", output.display());
    }

    Ok(())
}

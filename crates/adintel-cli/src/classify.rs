//! `classify` subcommand: raw captures in, ad records appended to the corpus.
//!
//! Classification is embarrassingly parallel — each capture is dispatched to
//! a blocking worker and the ordered `buffered` stream keeps results in
//! arrival order, which is the corpus order everything downstream depends
//! on. One `now` is pinned for the whole batch so re-running over the same
//! input is reproducible within the batch.

use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use futures::stream::{self, StreamExt};

use adintel_classify::classify_capture;
use adintel_core::{AppConfig, RawCapture};

pub(crate) async fn run(
    config: &AppConfig,
    input: &Path,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("reading captures from {}", input.display()))?;
    let captures: Vec<RawCapture> = serde_json::from_str(&content)
        .with_context(|| format!("parsing captures from {}", input.display()))?;

    let capture_count = captures.len();
    let now = Utc::now();
    let max_concurrent = config.classify_max_concurrency.max(1);

    let results: Vec<_> = stream::iter(captures)
        .map(|capture| tokio::task::spawn_blocking(move || classify_capture(&capture, now)))
        .buffered(max_concurrent)
        .collect()
        .await;

    let mut records = Vec::with_capacity(results.len());
    for result in results {
        records.push(result.context("classification worker panicked")?);
    }

    let corpus_path = output.unwrap_or(&config.corpus_path);
    let added = adintel_store::append_records(corpus_path, &records)?;
    let duplicates = records.len() - added;

    tracing::info!(
        captures = capture_count,
        added,
        duplicates,
        corpus = %corpus_path.display(),
        "classification complete"
    );
    println!(
        "Classified {capture_count} captures: {added} new records appended to {} ({duplicates} duplicates skipped)",
        corpus_path.display()
    );

    Ok(())
}

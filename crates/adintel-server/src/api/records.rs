use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use adintel_core::{AdRecord, Platform};

use crate::middleware::RequestId;

use super::{normalize_limit, ApiError, ApiResponse, AppState, ResponseMeta};

/// Bulk upload payload: one record or a JSON array of records.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RecordUpload {
    Bulk(Vec<AdRecord>),
    Single(Box<AdRecord>),
}

#[derive(Debug, Serialize)]
pub(super) struct UploadSummary {
    pub received: usize,
    pub total: usize,
}

/// Read-only filter and sort parameters over the corpus.
#[derive(Debug, Default, Deserialize)]
pub(super) struct RecordsQuery {
    /// Case-insensitive substring over the headline.
    pub headline: Option<String>,
    /// Case-insensitive substring over the primary text.
    pub primary_text: Option<String>,
    /// Case-insensitive substring over the advertiser name.
    pub advertiser: Option<String>,
    /// Case-insensitive substring over the CTA button text.
    pub cta: Option<String>,
    pub active: Option<bool>,
    /// Membership filter over `targeting.platforms`.
    pub platform: Option<Platform>,
    pub sort: Option<SortKey>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(super) enum SortKey {
    ScrapedAt,
    WordCount,
    DaysRunning,
}

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
}

fn matches(record: &AdRecord, query: &RecordsQuery) -> bool {
    if let Some(needle) = query.headline.as_deref() {
        if !contains_ci(record.creative.copy.headline.as_deref(), needle) {
            return false;
        }
    }
    if let Some(needle) = query.primary_text.as_deref() {
        if !contains_ci(record.creative.copy.primary_text.as_deref(), needle) {
            return false;
        }
    }
    if let Some(needle) = query.advertiser.as_deref() {
        let name = record.advertiser.as_ref().and_then(|a| a.name.as_deref());
        if !contains_ci(name, needle) {
            return false;
        }
    }
    if let Some(needle) = query.cta.as_deref() {
        if !contains_ci(record.creative.copy.cta_button.as_deref(), needle) {
            return false;
        }
    }
    if let Some(active) = query.active {
        if record.performance.metrics.is_active != active {
            return false;
        }
    }
    if let Some(platform) = query.platform {
        if !record.targeting.platforms.contains(&platform) {
            return false;
        }
    }
    true
}

/// Sort descending by the requested key; records missing the key sink to
/// the end. The sort is stable, so corpus order breaks ties.
fn sort_records(records: &mut [AdRecord], key: SortKey) {
    match key {
        SortKey::ScrapedAt => records.sort_by_key(|r| {
            std::cmp::Reverse(r.metadata.as_ref().and_then(|m| m.scraped_at))
        }),
        SortKey::WordCount => {
            records.sort_by_key(|r| std::cmp::Reverse(r.creative.copy.word_count));
        }
        SortKey::DaysRunning => records.sort_by_key(|r| {
            std::cmp::Reverse(r.performance.metrics.days_running)
        }),
    }
}

pub(super) async fn upload_records(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(upload): Json<RecordUpload>,
) -> Result<Json<ApiResponse<UploadSummary>>, ApiError> {
    let incoming = match upload {
        RecordUpload::Bulk(records) => records,
        RecordUpload::Single(record) => vec![*record],
    };

    let received = incoming.len();
    let mut records = state.records.write().await;
    records.extend(incoming);
    let total = records.len();
    drop(records);

    tracing::info!(received, total, "records uploaded");

    Ok(Json(ApiResponse {
        data: UploadSummary { received, total },
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn list_records(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<RecordsQuery>,
) -> Result<Json<ApiResponse<Vec<AdRecord>>>, ApiError> {
    let records = state.records.read().await;
    let mut selected: Vec<AdRecord> = records
        .iter()
        .filter(|record| matches(record, &query))
        .cloned()
        .collect();
    drop(records);

    if let Some(key) = query.sort {
        sort_records(&mut selected, key);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let limit = normalize_limit(query.limit) as usize;
    selected.truncate(limit);

    Ok(Json(ApiResponse {
        data: selected,
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use adintel_core::{AdCopy, Creative, Metrics, Performance, RecordMetadata};
    use chrono::{TimeZone, Utc};

    fn record(headline: Option<&str>, active: bool, days: Option<i64>) -> AdRecord {
        AdRecord {
            creative: Creative {
                copy: AdCopy {
                    headline: headline.map(ToOwned::to_owned),
                    ..AdCopy::default()
                },
                ..Creative::default()
            },
            performance: Performance {
                metrics: Metrics {
                    days_running: days,
                    is_active: active,
                    creatives_count: 0,
                },
                ..Performance::default()
            },
            ..AdRecord::default()
        }
    }

    #[test]
    fn headline_filter_is_case_insensitive_substring() {
        let query = RecordsQuery {
            headline: Some("SECRET".to_owned()),
            ..RecordsQuery::default()
        };
        assert!(matches(&record(Some("The secret to glow"), true, None), &query));
        assert!(!matches(&record(Some("Nothing here"), true, None), &query));
        assert!(!matches(&record(None, true, None), &query));
    }

    #[test]
    fn active_filter_is_exact() {
        let query = RecordsQuery {
            active: Some(false),
            ..RecordsQuery::default()
        };
        assert!(matches(&record(None, false, None), &query));
        assert!(!matches(&record(None, true, None), &query));
    }

    #[test]
    fn days_running_sort_sinks_missing_values() {
        let mut records = vec![
            record(None, true, None),
            record(None, true, Some(5)),
            record(None, true, Some(30)),
        ];
        sort_records(&mut records, SortKey::DaysRunning);
        assert_eq!(records[0].performance.metrics.days_running, Some(30));
        assert_eq!(records[1].performance.metrics.days_running, Some(5));
        assert_eq!(records[2].performance.metrics.days_running, None);
    }

    #[test]
    fn scraped_at_sort_is_descending() {
        let mut early = record(None, true, None);
        early.metadata = Some(RecordMetadata {
            scraped_at: Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()),
            page_url: None,
        });
        let mut late = record(None, true, None);
        late.metadata = Some(RecordMetadata {
            scraped_at: Some(Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap()),
            page_url: None,
        });
        let mut records = vec![early, late];
        sort_records(&mut records, SortKey::ScrapedAt);
        assert_eq!(
            records[0].metadata.as_ref().unwrap().scraped_at,
            Some(Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap())
        );
    }
}

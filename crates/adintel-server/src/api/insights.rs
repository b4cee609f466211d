use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use adintel_insights::{analyze_corpus, AdvertiserComparison, CorpusInsights};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

pub(super) async fn get_insights(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<CorpusInsights>>, ApiError> {
    let records = state.records.read().await;
    let insights = analyze_corpus(&records);
    drop(records);

    Ok(Json(ApiResponse {
        data: insights,
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[derive(Debug, Deserialize)]
pub(super) struct CompareQuery {
    pub a: String,
    pub b: String,
}

pub(super) async fn compare_advertisers(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<CompareQuery>,
) -> Result<Json<ApiResponse<AdvertiserComparison>>, ApiError> {
    let records = state.records.read().await;
    let comparison = adintel_insights::compare_advertisers(&records, &query.a, &query.b);
    drop(records);

    if comparison.first.is_none() && comparison.second.is_none() {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("no records for '{}' or '{}'", query.a, query.b),
        ));
    }

    Ok(Json(ApiResponse {
        data: comparison,
        meta: ResponseMeta::new(req_id.0),
    }))
}

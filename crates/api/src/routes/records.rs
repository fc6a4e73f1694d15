//! Route definitions and handlers for the record listing endpoints.
//!
//! Both endpoints read from the shared in-memory [`Catalog`] and cannot fail:
//! out-of-range filter values degrade to empty or full results. Malformed
//! (non-integer) query parameters are rejected with a 400 by the `Query`
//! extractor before the handlers run.

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::Deserialize;

use catalog_core::Record;

use crate::state::AppState;

/// Query params for `GET /api/v1/data_filtered`.
#[derive(Debug, Deserialize)]
pub struct FilteredQuery {
    /// Starting record_id to fetch, inclusive. Defaults to 101.
    pub start_id: Option<i64>,
    /// Maximum number of records to return. Defaults to 2; zero or negative
    /// yields an empty result.
    pub limit: Option<i64>,
}

/// GET /data -- all records in catalog order, for consumption by a
/// downstream ingestion pipeline.
async fn get_all_data(State(state): State<AppState>) -> Json<Vec<Record>> {
    Json(state.catalog.records().to_vec())
}

/// GET /data_filtered -- records with `record_id >= start_id`, truncated to
/// at most `limit` entries. Useful for batch fetching.
async fn get_filtered_data(
    State(state): State<AppState>,
    Query(params): Query<FilteredQuery>,
) -> Json<Vec<Record>> {
    let start_id = params.start_id.unwrap_or(101);
    let limit = params.limit.unwrap_or(2);

    tracing::debug!(start_id, limit, "Filtering catalog");

    Json(state.catalog.filter(start_id, limit))
}

/// Routes mounted under `/api/v1`.
///
/// ```text
/// GET /data             -> get_all_data
/// GET /data_filtered    -> get_filtered_data
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/data", get(get_all_data))
        .route("/data_filtered", get(get_filtered_data))
}

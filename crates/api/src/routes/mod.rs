pub mod health;
pub mod records;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /data             all records, catalog order
/// /data_filtered    records with record_id >= start_id, at most limit
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(records::router())
}

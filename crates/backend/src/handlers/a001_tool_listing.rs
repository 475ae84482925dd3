use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use contracts::domain::a001_tool_listing::ListingResponse;

use crate::domain::a001_tool_listing::ListingState;

/// Lifetime of a successful listing in shared caches
pub const CACHE_MAX_AGE_SECS: i64 = 900;

/// GET /api/tools
pub async fn list_tools(State(state): State<ListingState>) -> Response {
    match state.fetch_listing().await {
        Ok(listing) => {
            let expires = Utc::now() + chrono::Duration::seconds(CACHE_MAX_AGE_SECS);
            (
                [
                    (header::CACHE_CONTROL, cache_control()),
                    (header::EXPIRES, http_date(expires)),
                ],
                Json(listing),
            )
                .into_response()
        }
        Err(message) => {
            tracing::error!("Error fetching data from Google Sheets: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ListingResponse::failed(message)),
            )
                .into_response()
        }
    }
}

fn cache_control() -> String {
    format!("public, max-age={}", CACHE_MAX_AGE_SECS)
}

/// IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`
pub fn http_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

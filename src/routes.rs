// =============================================================================
// routes.rs — THE JSON ENVELOPE COUNTER
// =============================================================================
//
// Thin axum handlers, one per document type, each wrapping its scraper's
// result in the `{success, data, timestamp}` envelope the frontend
// consumes. The envelope has an error branch for completeness of the
// contract, but the scrapers are infallible by policy — a 500 out of this
// layer means a defect, not an upstream outage. Upstream outages arrive
// as `origin: "fallback"` inside a 200.
// =============================================================================

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::models::{AgendaData, BillsData, LeadershipData, VotesProceedingsData};
use crate::scrapers;

/// Everything a handler needs, shared immutably across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
}

/// The response envelope. `error` stays None on every path the scrapers
/// can reach; it exists because the wire contract documents it.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// 1-based page number; absent means the first page.
    page: Option<u32>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any);

    Router::new()
        .route("/api/parliament/agenda", get(agenda_handler))
        .route(
            "/api/parliament/votes-proceedings",
            get(votes_proceedings_handler),
        )
        .route("/api/parliament/leadership", get(leadership_handler))
        .route("/api/parliament/bills", get(bills_handler))
        .route("/health", get(health_handler))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn agenda_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<PageQuery>,
) -> Json<ApiResponse<AgendaData>> {
    let page = query.page.unwrap_or(1);
    let data = scrapers::agenda::fetch(&state.client, &state.config, page).await;
    Json(ApiResponse::ok(data))
}

async fn votes_proceedings_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<PageQuery>,
) -> Json<ApiResponse<VotesProceedingsData>> {
    let page = query.page.unwrap_or(1);
    let data = scrapers::votes_proceedings::fetch(&state.client, &state.config, page).await;
    Json(ApiResponse::ok(data))
}

async fn leadership_handler(
    Extension(state): Extension<AppState>,
) -> Json<ApiResponse<LeadershipData>> {
    let data = scrapers::leadership::fetch(&state.client, &state.config).await;
    Json(ApiResponse::ok(data))
}

async fn bills_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<PageQuery>,
) -> Json<ApiResponse<BillsData>> {
    let page = query.page.unwrap_or(1);
    let data = scrapers::bills::fetch(&state.client, &state.config, page).await;
    Json(ApiResponse::ok(data))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    upstream: String,
}

/// Liveness only — deliberately does not probe parliament.gh, because a
/// flaky upstream must not make this service look down.
async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        upstream: state.config.base_url.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape_on_success() {
        let envelope = ApiResponse::ok(vec![1, 2, 3]);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert!(json.get("error").is_none());
        assert!(json.get("timestamp").is_some());
    }

    #[test]
    fn test_page_query_defaults_to_first_page() {
        let query: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page.unwrap_or(1), 1);
    }
}

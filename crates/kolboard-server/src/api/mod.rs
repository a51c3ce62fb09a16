mod buzz;
mod campaigns;
mod insights;
mod kols;
mod recommend;
mod stories;

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use kolboard_core::{CoreError, CorsOrigins, Dataset};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    generated_at: DateTime<Utc>,
    seed: Option<u64>,
    profiles: usize,
    campaigns: usize,
    buzz_entries: usize,
}

#[derive(Debug, Serialize)]
struct ServiceIndex {
    name: &'static str,
    version: &'static str,
    description: &'static str,
    endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
struct Endpoints {
    health: &'static str,
    dashboard: &'static str,
    kols: &'static str,
    campaigns: &'static str,
    buzz: &'static str,
    insights: [&'static str; 2],
    recommend: &'static str,
    stories: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }

    pub(super) fn not_found(request_id: &str, what: &str, id: &str) -> Self {
        Self::new(request_id, "not_found", format!("{what} '{id}' not found"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Wrap `data` in the response envelope and serialize it.
///
/// Serializing here lets handlers return views that borrow from the shared dataset.
pub(super) fn respond<T: Serialize>(req_id: RequestId, data: T) -> Response {
    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
    .into_response()
}

pub(super) fn normalize_limit(limit: Option<i64>, default: i64) -> usize {
    let clamped = limit.unwrap_or(default).clamp(1, 200);
    usize::try_from(clamped).unwrap_or(1)
}

/// Parse an optional enum-like query parameter. Blank values count as absent.
pub(super) fn parse_param<T>(request_id: &str, raw: Option<&str>) -> Result<Option<T>, ApiError>
where
    T: FromStr<Err = CoreError>,
{
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|e: CoreError| ApiError::new(request_id, "validation_error", e.to_string())),
    }
}

fn build_cors(origins: &CorsOrigins) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)]);

    match origins {
        CorsOrigins::Any => layer.allow_origin(tower_http::cors::Any),
        CorsOrigins::List(list) => {
            let allowed: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(%origin, "ignoring unparseable CORS origin");
                        None
                    }
                })
                .collect();
            layer.allow_origin(AllowOrigin::list(allowed))
        }
    }
}

pub fn build_app(state: AppState, origins: &CorsOrigins) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health))
        .route("/api/dashboard/overview", get(insights::dashboard_overview))
        .route("/api/kols", get(kols::list_kols))
        .route("/api/kols/compare", get(kols::compare_kols))
        .route("/api/kols/{kol_id}", get(kols::get_kol))
        .route("/api/kols/{kol_id}/audience", get(kols::get_kol_audience))
        .route("/api/campaigns", get(campaigns::list_campaigns))
        .route("/api/campaigns/{campaign_id}", get(campaigns::get_campaign))
        .route(
            "/api/campaigns/{campaign_id}/performance",
            get(campaigns::get_campaign_performance),
        )
        .route("/api/buzz/trends", get(buzz::list_buzz_trends))
        .route("/api/insights/platform", get(insights::platform_insights))
        .route("/api/insights/category", get(insights::category_insights))
        .route("/api/recommend", get(recommend::recommend_kols))
        .route("/api/stories/overview", get(stories::data_stories))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors(origins))
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn index(Extension(req_id): Extension<RequestId>) -> Response {
    respond(
        req_id,
        ServiceIndex {
            name: "KOL Influence Dashboard API",
            version: env!("CARGO_PKG_VERSION"),
            description: "影響力數據專案 - 協助品牌精準媒合 KOL 並驗證行銷成效",
            endpoints: Endpoints {
                health: "/api/health",
                dashboard: "/api/dashboard/overview",
                kols: "/api/kols",
                campaigns: "/api/campaigns",
                buzz: "/api/buzz/trends",
                insights: ["/api/insights/platform", "/api/insights/category"],
                recommend: "/api/recommend",
                stories: "/api/stories/overview",
            },
        },
    )
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Response {
    let dataset = &state.dataset;
    respond(
        req_id,
        HealthData {
            status: "ok",
            generated_at: dataset.generated_at(),
            seed: dataset.seed(),
            profiles: dataset.profiles().len(),
            campaigns: dataset.campaigns().len(),
            buzz_entries: dataset.buzz_trends().len(),
        },
    )
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

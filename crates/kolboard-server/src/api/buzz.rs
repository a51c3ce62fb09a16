use axum::{
    extract::{Query, State},
    response::Response,
    Extension,
};
use kolboard_core::query;
use kolboard_core::BuzzTrend;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{respond, ApiError, AppState};

const DEFAULT_DAYS: u32 = 30;

#[derive(Debug, Serialize)]
struct BuzzTrendList<'a> {
    trends: Vec<&'a BuzzTrend>,
    keywords: Vec<&'a str>,
}

#[derive(Debug, Deserialize)]
pub(super) struct BuzzQuery {
    pub keyword: Option<String>,
    pub days: Option<u32>,
}

pub(super) async fn list_buzz_trends(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<BuzzQuery>,
) -> Result<Response, ApiError> {
    let days = params.days.unwrap_or(DEFAULT_DAYS);
    if days == 0 {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "days must be at least 1",
        ));
    }
    let keyword = params.keyword.as_deref().filter(|k| !k.trim().is_empty());

    let trends = query::list_buzz_trends(&state.dataset, keyword, days);
    let keywords = query::buzz_keywords(&state.dataset);
    Ok(respond(req_id, BuzzTrendList { trends, keywords }))
}

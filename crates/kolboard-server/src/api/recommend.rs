use axum::{
    extract::{Query, State},
    response::Response,
    Extension,
};
use kolboard_core::recommend::{recommend, Recommendation, RecommendationRequest};
use kolboard_core::Category;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{normalize_limit, parse_param, respond, ApiError, AppState};

const DEFAULT_LIMIT: i64 = 5;

#[derive(Debug, Serialize)]
struct RecommendationList<'a> {
    recommendations: Vec<Recommendation<'a>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RecommendQuery {
    pub category: Option<String>,
    pub budget: Option<u64>,
    pub limit: Option<i64>,
}

pub(super) async fn recommend_kols(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<RecommendQuery>,
) -> Result<Response, ApiError> {
    let request = RecommendationRequest {
        category: parse_param::<Category>(&req_id.0, params.category.as_deref())?,
        budget: params.budget.filter(|b| *b > 0),
        limit: normalize_limit(params.limit, DEFAULT_LIMIT),
    };

    let recommendations = recommend(&state.dataset, &request);
    tracing::debug!(
        category = ?request.category,
        budget = ?request.budget,
        results = recommendations.len(),
        "recommendations computed"
    );
    Ok(respond(req_id, RecommendationList { recommendations }))
}

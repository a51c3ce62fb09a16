use axum::{
    extract::{Path, Query, State},
    response::Response,
    Extension,
};
use kolboard_core::insights::compare_profiles;
use kolboard_core::query::{self, ProfileFilter, SortKey, SortOrder};
use kolboard_core::{Category, Platform, Profile};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{normalize_limit, parse_param, respond, ApiError, AppState};

const DEFAULT_LIMIT: i64 = 50;

#[derive(Debug, Serialize)]
struct KolList<'a> {
    total: usize,
    kols: Vec<&'a Profile>,
}

#[derive(Debug, Deserialize)]
pub(super) struct KolQuery {
    pub platform: Option<String>,
    pub category: Option<String>,
    pub min_followers: Option<u64>,
    pub max_followers: Option<u64>,
    pub min_engagement: Option<f64>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CompareQuery {
    pub kol_ids: String,
}

pub(super) async fn list_kols(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<KolQuery>,
) -> Result<Response, ApiError> {
    let filter = ProfileFilter {
        platform: parse_param::<Platform>(&req_id.0, params.platform.as_deref())?,
        category: parse_param::<Category>(&req_id.0, params.category.as_deref())?,
        min_followers: params.min_followers,
        max_followers: params.max_followers,
        min_engagement: params.min_engagement,
    };
    let sort = parse_param::<SortKey>(&req_id.0, params.sort_by.as_deref())?.unwrap_or_default();
    let order = parse_param::<SortOrder>(&req_id.0, params.order.as_deref())?.unwrap_or_default();
    let limit = normalize_limit(params.limit, DEFAULT_LIMIT);

    let listing = query::list_profiles(&state.dataset, &filter, sort, order, limit);
    Ok(respond(
        req_id,
        KolList {
            total: listing.total,
            kols: listing.items,
        },
    ))
}

pub(super) async fn compare_kols(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<CompareQuery>,
) -> Result<Response, ApiError> {
    let ids: Vec<&str> = params
        .kol_ids
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();
    if ids.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "kol_ids must list at least one id",
        ));
    }

    let records = compare_profiles(state.dataset.profiles(), &ids);
    Ok(respond(req_id, records))
}

pub(super) async fn get_kol(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(kol_id): Path<String>,
) -> Result<Response, ApiError> {
    let detail = query::get_profile_detail(&state.dataset, &kol_id)
        .ok_or_else(|| ApiError::not_found(&req_id.0, "kol", &kol_id))?;
    Ok(respond(req_id, detail))
}

pub(super) async fn get_kol_audience(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(kol_id): Path<String>,
) -> Result<Response, ApiError> {
    let audience = query::get_audience(&state.dataset, &kol_id)
        .ok_or_else(|| ApiError::not_found(&req_id.0, "audience for kol", &kol_id))?;
    Ok(respond(req_id, audience))
}

use axum::{
    extract::{Path, Query, State},
    response::Response,
    Extension,
};
use kolboard_core::query::{self, CampaignFilter};
use kolboard_core::{Campaign, CampaignStatus};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{parse_param, respond, ApiError, AppState};

#[derive(Debug, Serialize)]
struct CampaignList<'a> {
    total: usize,
    campaigns: Vec<&'a Campaign>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CampaignQuery {
    pub status: Option<String>,
    pub brand: Option<String>,
}

pub(super) async fn list_campaigns(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<CampaignQuery>,
) -> Result<Response, ApiError> {
    let filter = CampaignFilter {
        status: parse_param::<CampaignStatus>(&req_id.0, params.status.as_deref())?,
        brand: params.brand.filter(|b| !b.trim().is_empty()),
    };

    let listing = query::list_campaigns(&state.dataset, &filter);
    Ok(respond(
        req_id,
        CampaignList {
            total: listing.total,
            campaigns: listing.items,
        },
    ))
}

pub(super) async fn get_campaign(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(campaign_id): Path<String>,
) -> Result<Response, ApiError> {
    let detail = query::get_campaign_detail(&state.dataset, &campaign_id)
        .ok_or_else(|| ApiError::not_found(&req_id.0, "campaign", &campaign_id))?;
    Ok(respond(req_id, detail))
}

pub(super) async fn get_campaign_performance(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(campaign_id): Path<String>,
) -> Result<Response, ApiError> {
    let performance = query::get_campaign_performance(&state.dataset, &campaign_id)
        .ok_or_else(|| ApiError::not_found(&req_id.0, "performance for campaign", &campaign_id))?;
    Ok(respond(req_id, performance))
}

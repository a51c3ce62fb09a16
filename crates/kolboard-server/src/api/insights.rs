use axum::{extract::State, response::Response, Extension};
use kolboard_core::insights;

use crate::middleware::RequestId;

use super::{respond, AppState};

pub(super) async fn dashboard_overview(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Response {
    respond(req_id, insights::dashboard_overview(&state.dataset))
}

pub(super) async fn platform_insights(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Response {
    respond(
        req_id,
        insights::platform_distribution(state.dataset.profiles()),
    )
}

pub(super) async fn category_insights(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Response {
    respond(req_id, insights::category_insights(state.dataset.profiles()))
}

use axum::{extract::State, response::Response, Extension};

use crate::middleware::RequestId;

use super::{respond, AppState};

pub(super) async fn data_stories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Response {
    respond(req_id, kolboard_core::stories::data_stories(&state.dataset))
}

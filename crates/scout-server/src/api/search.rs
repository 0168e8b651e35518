use axum::{
    extract::{Query, State},
    Extension, Json,
};
use scout_core::SearchResponse;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

/// First non-blank `query` value. Repeated keys are tolerated; later ones are ignored.
fn first_query(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "query")
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

pub(super) async fn search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Some(query) = first_query(&params) else {
        return Err(ApiError::missing_query());
    };

    tracing::info!(request_id = %req_id.0, query, "search request");

    state.search.run(query).await.map(Json).map_err(|e| {
        tracing::error!(request_id = %req_id.0, error = %e, "search orchestration failed");
        ApiError::internal(e.to_string())
    })
}

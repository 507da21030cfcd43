//! Provider pass-through handler

use axum::{
    Extension, Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{error::ApiError, middleware::RequestId, state::AppState};

/// Query parameters of `GET /api/weather`
#[derive(Debug, Default, Deserialize)]
pub struct ProxyParams {
    /// `weather`, `forecast` or `geo`
    pub endpoint: Option<String>,
    /// City name or free-text location
    pub q: Option<String>,
}

/// Forward a query to the provider and return its JSON body untouched
///
/// The provider credential never leaves the server.
#[instrument(skip(state, params), fields(request_id = %request_id))]
pub async fn weather_proxy(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<ProxyParams>,
) -> Result<Json<Value>, ApiError> {
    debug!(endpoint = ?params.endpoint, "Proxying weather request");

    let body = state
        .proxy_service
        .relay(params.endpoint.as_deref(), params.q.as_deref())
        .await?;

    Ok(Json(body))
}

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tracing::{error, info};

use super::tips::builtin_tips;
use super::GatewayState;
use crate::backend::{AnalysisRequest, UpstreamReply};

/// `POST /analyze` - forward a request to the backend and normalize failures.
///
/// On upstream success the body is returned verbatim with status 200. On an
/// upstream error status the original status is kept and the body becomes
/// `{error, backendStatus, backendResponse}`. Transport failures become a 500
/// with a connection envelope.
pub async fn analyze(
    State(state): State<Arc<GatewayState>>,
    headers: HeaderMap,
    Json(request): Json<AnalysisRequest>,
) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    match state.backend.analyze(&request, authorization).await {
        Ok(reply) if reply.is_success() => {
            (StatusCode::OK, Json(reply.body)).into_response()
        }
        Ok(reply) => backend_error_envelope(reply),
        Err(e) => {
            error!(error = %e, "Proxy error");
            connection_envelope(e.to_string())
        }
    }
}

/// `GET /api/keys` - proxy the upstream tier listing
pub async fn key_tiers(State(state): State<Arc<GatewayState>>) -> Response {
    match state.backend.key_tiers().await {
        Ok(reply) => {
            let status =
                StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(reply.body)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Tier listing proxy error");
            connection_envelope(e.to_string())
        }
    }
}

/// `GET /api/educational/tips` - serve the static educational payload
pub async fn educational_tips() -> Response {
    info!("Serving educational tips");
    (StatusCode::OK, Json(builtin_tips().clone())).into_response()
}

fn backend_error_envelope(reply: UpstreamReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let detail = match reply.body.get("detail") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    };

    (
        status,
        Json(json!({
            "error": format!("Backend error: {detail}"),
            "backendStatus": reply.status,
            "backendResponse": reply.body,
        })),
    )
        .into_response()
}

fn connection_envelope(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": format!("Failed to connect to the backend: {message}"),
        })),
    )
        .into_response()
}

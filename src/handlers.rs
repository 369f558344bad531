use std::time::Instant;

use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::AppState;
use crate::logger::log_request;
use crate::models::HealthStatus;

const HELP_TEXT: &str = "Hello! Metrics are being collected.\n\nEndpoints:\n  /metrics - View metrics\n  /health - Health check\n  /404 - Test 404\n  /500 - Test 500";

type HandlerError = Box<dyn std::error::Error + Send + Sync>;

pub struct RouteResponse {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
}

impl RouteResponse {
    fn text(status: StatusCode, body: impl Into<String>) -> Self {

        RouteResponse {
            status,
            content_type: "text/plain",
            body: body.into(),
        }

    }
}

impl IntoResponse for RouteResponse {
    fn into_response(self) -> Response {
        (self.status, [(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

// Path dispatch. Exact, case-sensitive matches; the method plays no part
// here and only shows up in the access log. Reading the metrics store for
// /metrics is the only state this touches.
fn route(path: &str, state: &AppState) -> Result<RouteResponse, HandlerError> {

    match path {
        "/metrics" => Ok(RouteResponse::text(StatusCode::OK, state.metrics.render())),
        "/health" => {
            let body = serde_json::to_string(&HealthStatus::healthy())?;
            Ok(RouteResponse {
                status: StatusCode::OK,
                content_type: "application/json",
                body,
            })
        }
        "/404" => Ok(RouteResponse::text(StatusCode::NOT_FOUND, "Not Found")),
        "/500" => Ok(RouteResponse::text(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
        )),
        _ => Ok(RouteResponse::text(StatusCode::OK, HELP_TEXT)),
    }

}

// Catch-all handler for every path and method: dispatch, then record the
// final status, then log. Recording happens after dispatch, so a /metrics
// request is not included in its own render.
pub async fn serve(State(state): State<AppState>, method: Method, uri: Uri) -> Response {

    let start = Instant::now();

    let result = route(uri.path(), &state);

    finish(&state, &method, uri.path(), start, result)

}

// the only error boundary: any dispatch failure becomes a plain 500
fn finish(
    state: &AppState,
    method: &Method,
    path: &str,
    start: Instant,
    result: Result<RouteResponse, HandlerError>,
) -> Response {

    let response = match result {
        Ok(response) => response,
        Err(e) => RouteResponse::text(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error: {}", e),
        ),
    };

    state.metrics.record(response.status.as_u16());

    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
    log_request(method, path, response.status.as_u16(), duration_ms);

    response.into_response()

}

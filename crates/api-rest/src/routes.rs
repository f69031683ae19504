//! REST handlers.
//!
//! Each handler delegates to [`api_shared::AssessmentApi`] and maps boundary errors onto
//! `400 Bad Request` with the error text as the body.

use axum::{extract::State, http::StatusCode, response::Html, response::Json};

use api_shared::{pb, HealthService};
use cardio_core::AssessmentError;

use crate::AppState;

/// The single-page form served at `/`.
pub const INDEX_HTML: &str = include_str!("../static/index.html");

fn bad_request(err: AssessmentError) -> (StatusCode, String) {
    tracing::warn!("rejected REST request: {}", err);
    (StatusCode::BAD_REQUEST, err.to_string())
}

/// Serves the form page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = pb::HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<pb::HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/symptoms",
    responses(
        (status = 200, description = "Symptom vocabulary in display order", body = pb::ListSymptomsRes)
    )
)]
#[axum::debug_handler]
pub async fn list_symptoms(State(state): State<AppState>) -> Json<pb::ListSymptomsRes> {
    Json(state.api.list_symptoms())
}

#[utoipa::path(
    post,
    path = "/risk",
    request_body = pb::AssessRiskReq,
    responses(
        (status = 200, description = "Heart disease risk level", body = pb::AssessRiskRes)
    )
)]
/// Predict heart disease risk
///
/// Scores the five measurements against fixed thresholds. Values outside the form ranges are
/// clamped before scoring.
#[axum::debug_handler]
pub async fn assess_risk(
    State(state): State<AppState>,
    Json(req): Json<pb::AssessRiskReq>,
) -> Json<pb::AssessRiskRes> {
    Json(state.api.assess_risk(req))
}

#[utoipa::path(
    post,
    path = "/symptoms/check",
    request_body = pb::CheckSymptomsReq,
    responses(
        (status = 200, description = "Possible conditions in rule order", body = pb::CheckSymptomsRes),
        (status = 400, description = "Unknown symptom")
    )
)]
/// Check symptoms
///
/// Matches the selected symptoms against the condition rules. An empty selection returns the
/// "no specific condition" message.
#[axum::debug_handler]
pub async fn check_symptoms(
    State(state): State<AppState>,
    Json(req): Json<pb::CheckSymptomsReq>,
) -> Result<Json<pb::CheckSymptomsRes>, (StatusCode, String)> {
    state.api.check_symptoms(req).map(Json).map_err(bad_request)
}

#[utoipa::path(
    post,
    path = "/charts",
    request_body = pb::RenderChartsReq,
    responses(
        (status = 200, description = "Risk factor and symptom distribution charts as SVG", body = pb::RenderChartsRes),
        (status = 400, description = "Unknown symptom")
    )
)]
#[axum::debug_handler]
pub async fn render_charts(
    State(state): State<AppState>,
    Json(req): Json<pb::RenderChartsReq>,
) -> Result<Json<pb::RenderChartsRes>, (StatusCode, String)> {
    state.api.render_charts(req).map(Json).map_err(bad_request)
}

#[utoipa::path(
    post,
    path = "/assessments",
    request_body = pb::AssessmentReq,
    responses(
        (status = 200, description = "Risk level and possible conditions for the whole form", body = pb::AssessmentRes),
        (status = 400, description = "Unknown symptom, selector value or malformed date")
    )
)]
/// Assess a whole form
///
/// Runs the risk prediction and the symptom check together. Blank selector values take the
/// form defaults; a blank date of check means today.
#[axum::debug_handler]
pub async fn assess(
    State(state): State<AppState>,
    Json(req): Json<pb::AssessmentReq>,
) -> Result<Json<pb::AssessmentRes>, (StatusCode, String)> {
    let res = state.api.assess(req).map_err(bad_request)?;
    tracing::info!("assessment {} complete", res.assessment_id);
    Ok(Json(res))
}

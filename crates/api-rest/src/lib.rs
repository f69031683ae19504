//! # API REST
//!
//! REST API implementation for Cardio.
//!
//! Handles:
//! - HTTP endpoints with axum, including the single-page form at `/`
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, request tracing)
//!
//! Uses `api-shared` for common types and utilities.

#![warn(rust_2018_idioms)]

pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{pb, AssessmentApi};

/// Application state shared across REST API handlers
#[derive(Clone, Default)]
pub struct AppState {
    pub api: AssessmentApi,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health,
        routes::list_symptoms,
        routes::assess_risk,
        routes::check_symptoms,
        routes::render_charts,
        routes::assess,
    ),
    components(schemas(
        pb::HealthRes,
        pb::PatientInput,
        pb::ListSymptomsRes,
        pb::AssessRiskReq,
        pb::AssessRiskRes,
        pb::CheckSymptomsReq,
        pb::CheckSymptomsRes,
        pb::RenderChartsReq,
        pb::RenderChartsRes,
        pb::AssessmentReq,
        pb::AssessmentRes,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with the form page, API routes and Swagger UI.
pub fn router() -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health))
        .route("/symptoms", get(routes::list_symptoms))
        .route("/symptoms/check", post(routes::check_symptoms))
        .route("/risk", post(routes::assess_risk))
        .route("/charts", post(routes::render_charts))
        .route("/assessments", post(routes::assess))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::default())
}

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::intake::RawSubmission;
use super::outcome::EligibilityResult;
use super::service::EligibilityService;
use super::view::{EligibilityView, ResourceLink};

/// Router builder exposing the eligibility check and criteria endpoints.
pub fn eligibility_router(service: Arc<EligibilityService>) -> Router {
    Router::new()
        .route("/api/v1/eligibility/check", post(check_handler))
        .route("/api/v1/eligibility/criteria", get(criteria_handler))
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    #[serde(flatten)]
    pub view: EligibilityView,
    pub resource: ResourceLink,
    pub checked_at: DateTime<Utc>,
}

pub(crate) async fn check_handler(
    State(service): State<Arc<EligibilityService>>,
    Json(submission): Json<RawSubmission>,
) -> Response {
    let result = service.check(&submission);
    let status = match result {
        EligibilityResult::InputInvalid { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        EligibilityResult::Eligible { .. } | EligibilityResult::NotEligible { .. } => {
            StatusCode::OK
        }
    };

    let body = CheckResponse {
        view: EligibilityView::from(&result),
        resource: service.resource().clone(),
        checked_at: Utc::now(),
    };

    (status, Json(body)).into_response()
}

pub(crate) async fn criteria_handler(State(service): State<Arc<EligibilityService>>) -> Response {
    (StatusCode::OK, Json(service.criteria())).into_response()
}

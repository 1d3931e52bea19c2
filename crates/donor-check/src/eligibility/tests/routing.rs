use super::common::*;
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::eligibility::eligibility_router;

fn check_request(payload: serde_json::Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post("/api/v1/eligibility/check")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(payload.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn check_endpoint_returns_volume_for_eligible_donor() {
    let app = eligibility_router(Arc::new(service()));

    let response = app
        .oneshot(check_request(json!({
            "age": "25",
            "weight": "55.5",
            "is_healthy": true,
            "slept_enough": true,
        })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["status"], "eligible");
    assert_eq!(body["donation_volume_ml"], 450);
    assert_eq!(body["resource"]["url"], "https://www.pdn.gov.my/");
    assert!(body.get("reasons").is_none());
    assert!(body["checked_at"].is_string());
}

#[tokio::test]
async fn check_endpoint_lists_reasons_for_ineligible_donor() {
    let app = eligibility_router(Arc::new(service()));

    let response = app
        .oneshot(check_request(json!({
            "age": "30",
            "weight": "60",
            "is_healthy": false,
            "slept_enough": false,
        })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["status"], "not_eligible");
    assert_eq!(
        body["reasons"],
        json!([
            "Must be healthy and feeling well.",
            "Must have slept more than 5 hours."
        ])
    );
    assert!(body.get("donation_volume_ml").is_none());
}

#[tokio::test]
async fn check_endpoint_rejects_unparseable_age() {
    let app = eligibility_router(Arc::new(service()));

    let response = app
        .oneshot(check_request(json!({ "age": "twenty", "weight": "60" })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["status"], "input_invalid");
    assert_eq!(body["field"], "age");
    assert_eq!(body["message"], "Please enter a valid age (number).");
}

#[tokio::test]
async fn criteria_endpoint_exposes_thresholds_and_link() {
    let app = eligibility_router(Arc::new(service()));

    let response = app
        .oneshot(
            axum::http::Request::get("/api/v1/eligibility/criteria")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["criteria"]["min_age"], 18);
    assert_eq!(body["criteria"]["max_age"], 60);
    assert_eq!(body["criteria"]["min_weight_kg"], 45.0);
    assert_eq!(body["criteria"]["reason_policy"], "collect_all");
    assert_eq!(
        body["resource"]["label"],
        "Visit National Blood Centre Website"
    );
}

#[tokio::test]
async fn check_endpoint_reports_missing_age_as_input_invalid() {
    let app = eligibility_router(Arc::new(service()));

    let response = app
        .oneshot(check_request(json!({ "weight": "60" })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["status"], "input_invalid");
    assert_eq!(body["field"], "age");
    assert_eq!(body["message"], "Please enter a valid age (number).");
}

#[tokio::test]
async fn check_endpoint_accepts_numeric_fields() {
    let app = eligibility_router(Arc::new(service()));

    let response = app
        .oneshot(check_request(json!({ "age": 25, "weight": 50.5 })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["status"], "eligible");
    assert_eq!(body["donation_volume_ml"], 450);
}

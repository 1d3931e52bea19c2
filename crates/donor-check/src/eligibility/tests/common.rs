use axum::response::Response;
use serde_json::Value;

use crate::eligibility::{
    EligibilityConfig, EligibilityEngine, EligibilityInput, EligibilityService, ReasonPolicy,
    ResourceLink,
};

pub(super) fn eligibility_config() -> EligibilityConfig {
    EligibilityConfig::standard()
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new(eligibility_config())
}

pub(super) fn first_failure_engine() -> EligibilityEngine {
    EligibilityEngine::new(EligibilityConfig {
        reason_policy: ReasonPolicy::FirstFailure,
        ..eligibility_config()
    })
}

pub(super) fn service() -> EligibilityService {
    EligibilityService::new(
        eligibility_config(),
        ResourceLink::new("https://www.pdn.gov.my/"),
    )
    .expect("standard criteria are valid")
}

/// Healthy, rested donor of the given age and weight.
pub(super) fn donor(age: i32, weight_kg: f64) -> EligibilityInput {
    EligibilityInput {
        age,
        weight_kg,
        is_healthy: true,
        slept_enough: true,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

use tracing::info;

use super::config::{CriteriaError, EligibilityConfig};
use super::intake::{self, RawSubmission};
use super::outcome::EligibilityResult;
use super::view::{CriteriaView, ResourceLink};
use super::EligibilityEngine;

/// Service pairing the engine with the informational link shown next to results.
#[derive(Debug, Clone, Default)]
pub struct EligibilityService {
    engine: EligibilityEngine,
    resource: ResourceLink,
}

impl EligibilityService {
    /// Builds a service after rejecting inconsistent thresholds.
    pub fn new(config: EligibilityConfig, resource: ResourceLink) -> Result<Self, CriteriaError> {
        config.validate()?;
        Ok(Self {
            engine: EligibilityEngine::new(config),
            resource,
        })
    }

    pub fn engine(&self) -> &EligibilityEngine {
        &self.engine
    }

    pub fn resource(&self) -> &ResourceLink {
        &self.resource
    }

    pub fn check(&self, submission: &RawSubmission) -> EligibilityResult {
        let result = intake::check(&self.engine, submission);
        let reasons = match &result {
            EligibilityResult::NotEligible { reasons } => reasons.len(),
            _ => 0,
        };
        info!(
            status = result.status_label(),
            reasons,
            "eligibility check completed"
        );
        result
    }

    pub fn criteria(&self) -> CriteriaView {
        CriteriaView::new(self.engine.config(), self.resource.clone())
    }
}

//! Blood donor eligibility rules.
//!
//! The engine is a pure function of the donor's answers and its threshold configuration.
//! Parsing of raw form text lives in [`intake`]; rendering helpers live in [`view`]; the
//! service and router are thin shells over both.

mod config;
pub mod intake;
mod outcome;
pub mod router;
mod rules;
pub mod service;
pub mod view;

#[cfg(test)]
mod tests;

pub use config::{CriteriaError, EligibilityConfig, ReasonPolicy};
pub use intake::{check, InputError, RawSubmission};
pub use outcome::{EligibilityInput, EligibilityResult, IneligibilityReason, InputField};
pub use router::eligibility_router;
pub use service::EligibilityService;
pub use view::{CriteriaView, EligibilityView, ResourceLink};

/// Stateless evaluator that applies the threshold configuration to a donor's answers.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    config: EligibilityConfig,
}

impl EligibilityEngine {
    pub fn new(config: EligibilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EligibilityConfig {
        &self.config
    }

    pub fn evaluate(&self, input: &EligibilityInput) -> EligibilityResult {
        let reasons = rules::failing_criteria(input, &self.config);

        if reasons.is_empty() {
            EligibilityResult::Eligible {
                donation_volume_ml: rules::donation_volume_ml(input.weight_kg, &self.config),
            }
        } else {
            EligibilityResult::NotEligible { reasons }
        }
    }
}

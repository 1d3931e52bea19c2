use super::config::{EligibilityConfig, ReasonPolicy};
use super::outcome::{EligibilityInput, IneligibilityReason};

/// Runs every criterion in check order and returns the ones that failed.
pub(crate) fn failing_criteria(
    input: &EligibilityInput,
    config: &EligibilityConfig,
) -> Vec<IneligibilityReason> {
    let mut reasons = Vec::new();

    if !input.is_healthy {
        reasons.push(IneligibilityReason::Unwell);
    }

    if input.age < config.min_age || input.age > config.max_age {
        reasons.push(IneligibilityReason::AgeOutOfRange {
            min: config.min_age,
            max: config.max_age,
            actual: input.age,
        });
    }

    if input.weight_kg < config.min_weight_kg {
        reasons.push(IneligibilityReason::Underweight {
            minimum_kg: config.min_weight_kg,
            actual_kg: input.weight_kg,
        });
    }

    if !input.slept_enough {
        reasons.push(IneligibilityReason::InsufficientSleep);
    }

    // Checks are side-effect free, so trimming afterwards matches stopping early.
    if config.reason_policy == ReasonPolicy::FirstFailure {
        reasons.truncate(1);
    }

    reasons
}

/// Volume tier for a donor who passed every criterion.
pub(crate) fn donation_volume_ml(weight_kg: f64, config: &EligibilityConfig) -> u32 {
    if weight_kg > config.high_volume_weight_threshold_kg {
        config.high_volume_ml
    } else {
        config.standard_volume_ml
    }
}

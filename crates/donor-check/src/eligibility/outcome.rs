use serde::{Deserialize, Serialize};

/// Validated values handed to the engine for a single check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EligibilityInput {
    pub age: i32,
    pub weight_kg: f64,
    pub is_healthy: bool,
    pub slept_enough: bool,
}

/// Outcome of a single eligibility check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EligibilityResult {
    Eligible {
        donation_volume_ml: u32,
    },
    NotEligible {
        reasons: Vec<IneligibilityReason>,
    },
    InputInvalid {
        field: InputField,
        message: String,
    },
}

impl EligibilityResult {
    pub fn is_eligible(&self) -> bool {
        matches!(self, EligibilityResult::Eligible { .. })
    }

    pub fn donation_volume_ml(&self) -> Option<u32> {
        match self {
            EligibilityResult::Eligible { donation_volume_ml } => Some(*donation_volume_ml),
            _ => None,
        }
    }

    /// Human readable reasons, in the order the criteria were checked.
    pub fn reason_messages(&self) -> Vec<String> {
        match self {
            EligibilityResult::NotEligible { reasons } => {
                reasons.iter().map(IneligibilityReason::message).collect()
            }
            _ => Vec::new(),
        }
    }

    pub fn status_label(&self) -> &'static str {
        match self {
            EligibilityResult::Eligible { .. } => "eligible",
            EligibilityResult::NotEligible { .. } => "not_eligible",
            EligibilityResult::InputInvalid { .. } => "input_invalid",
        }
    }
}

/// Failing criterion, carrying the bound that was violated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "criterion", rename_all = "snake_case")]
pub enum IneligibilityReason {
    Unwell,
    AgeOutOfRange { min: i32, max: i32, actual: i32 },
    Underweight { minimum_kg: f64, actual_kg: f64 },
    InsufficientSleep,
}

impl IneligibilityReason {
    pub fn message(&self) -> String {
        match self {
            IneligibilityReason::Unwell => "Must be healthy and feeling well.".to_string(),
            IneligibilityReason::AgeOutOfRange { min, max, .. } => {
                format!("Age must be between {min} and {max}.")
            }
            IneligibilityReason::Underweight { minimum_kg, .. } => {
                format!("Weight must be {} kg or more.", format_kg(*minimum_kg))
            }
            IneligibilityReason::InsufficientSleep => {
                "Must have slept more than 5 hours.".to_string()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Age,
    Weight,
}

impl InputField {
    pub fn label(&self) -> &'static str {
        match self {
            InputField::Age => "age",
            InputField::Weight => "weight",
        }
    }
}

/// Whole kilograms keep one decimal ("45.0"); fractional ones print exactly ("45.25").
pub(crate) fn format_kg(kg: f64) -> String {
    if kg.fract() == 0.0 {
        format!("{kg:.1}")
    } else {
        format!("{kg}")
    }
}

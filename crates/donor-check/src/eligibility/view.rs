use serde::Serialize;

use super::config::EligibilityConfig;
use super::outcome::{format_kg, EligibilityResult, InputField};

pub const DEFAULT_RESOURCE_URL: &str = "https://www.pdn.gov.my/";
pub const DEFAULT_RESOURCE_LABEL: &str = "Visit National Blood Centre Website";

/// Rendering-ready projection of an eligibility result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityView {
    pub status: &'static str,
    pub headline: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donation_volume_ml: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<InputField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl EligibilityView {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.headline.to_string()];
        if let Some(volume) = self.donation_volume_ml {
            lines.push(format!("Maximum donation amount: {volume} ml"));
        }
        if !self.reasons.is_empty() {
            lines.push("Reason(s):".to_string());
            lines.extend(self.reasons.iter().cloned());
        }
        if let Some(message) = &self.message {
            lines.push(message.clone());
        }
        lines
    }

    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}

impl From<&EligibilityResult> for EligibilityView {
    fn from(result: &EligibilityResult) -> Self {
        let headline = match result {
            EligibilityResult::Eligible { .. } => "Result: Eligible to Donate!",
            EligibilityResult::NotEligible { .. } => "Result: Not Eligible to Donate",
            EligibilityResult::InputInvalid { .. } => "Error",
        };

        let (field, message) = match result {
            EligibilityResult::InputInvalid { field, message } => {
                (Some(*field), Some(message.clone()))
            }
            _ => (None, None),
        };

        Self {
            status: result.status_label(),
            headline,
            donation_volume_ml: result.donation_volume_ml(),
            reasons: result.reason_messages(),
            field,
            message,
        }
    }
}

/// External page offered next to every result. Opening it is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
    pub label: String,
    pub url: String,
}

impl ResourceLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            label: DEFAULT_RESOURCE_LABEL.to_string(),
            url: url.into(),
        }
    }
}

impl Default for ResourceLink {
    fn default() -> Self {
        Self::new(DEFAULT_RESOURCE_URL)
    }
}

/// Active thresholds, as shown to donors before they fill in the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriteriaView {
    pub criteria: EligibilityConfig,
    pub requirements: Vec<String>,
    pub resource: ResourceLink,
}

impl CriteriaView {
    pub fn new(config: &EligibilityConfig, resource: ResourceLink) -> Self {
        let requirements = vec![
            "Must be healthy and feeling well.".to_string(),
            format!("Age between {} and {} years.", config.min_age, config.max_age),
            format!("Weight of {} kg or more.", format_kg(config.min_weight_kg)),
            "Slept more than 5 hours last night.".to_string(),
            format!(
                "Donors up to {} kg give {} ml; heavier donors give {} ml.",
                format_kg(config.high_volume_weight_threshold_kg),
                config.standard_volume_ml,
                config.high_volume_ml
            ),
        ];

        Self {
            criteria: config.clone(),
            requirements,
            resource,
        }
    }

    pub fn render(&self) -> String {
        let mut lines = vec!["Blood Donor Eligibility Criteria".to_string()];
        lines.extend(self.requirements.iter().map(|line| format!("- {line}")));
        lines.push(format!(
            "Reason policy: {}",
            self.criteria.reason_policy.label()
        ));
        lines.push(format!("{}: {}", self.resource.label, self.resource.url));
        lines.join("\n")
    }
}

use serde::{Deserialize, Serialize};

use super::outcome::{EligibilityInput, EligibilityResult, InputField};
use super::EligibilityEngine;

/// Form values exactly as the donor typed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSubmission {
    #[serde(default, deserialize_with = "deserialize_field_text")]
    pub age: String,
    #[serde(default, deserialize_with = "deserialize_field_text")]
    pub weight: String,
    #[serde(default = "answered_yes")]
    pub is_healthy: bool,
    #[serde(default = "answered_yes")]
    pub slept_enough: bool,
}

fn answered_yes() -> bool {
    true
}

/// Accepts the field as text or as a JSON number; anything else becomes empty text so
/// intake reports it against the right field.
fn deserialize_field_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FieldText {
        Text(String),
        Number(serde_json::Number),
        Other(serde::de::IgnoredAny),
    }

    Ok(match FieldText::deserialize(deserializer)? {
        FieldText::Text(text) => text,
        FieldText::Number(number) => number.to_string(),
        FieldText::Other(_) => String::new(),
    })
}

impl RawSubmission {
    pub fn new(
        age: impl Into<String>,
        weight: impl Into<String>,
        is_healthy: bool,
        slept_enough: bool,
    ) -> Self {
        Self {
            age: age.into(),
            weight: weight.into(),
            is_healthy,
            slept_enough,
        }
    }

    /// Parses age then weight, reporting the first field that fails.
    pub fn parse(&self) -> Result<EligibilityInput, InputError> {
        let age = self
            .age
            .trim()
            .parse::<i32>()
            .map_err(|_| InputError::new(InputField::Age))?;

        let weight_kg = self
            .weight
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|weight| weight.is_finite())
            .ok_or_else(|| InputError::new(InputField::Weight))?;

        Ok(EligibilityInput {
            age,
            weight_kg,
            is_healthy: self.is_healthy,
            slept_enough: self.slept_enough,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct InputError {
    pub field: InputField,
    pub message: String,
}

impl InputError {
    fn new(field: InputField) -> Self {
        let message = match field {
            InputField::Age => "Please enter a valid age (number).",
            InputField::Weight => "Please enter a valid weight (number).",
        };

        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl From<InputError> for EligibilityResult {
    fn from(error: InputError) -> Self {
        EligibilityResult::InputInvalid {
            field: error.field,
            message: error.message,
        }
    }
}

/// Parses a raw submission and evaluates it once when parsing succeeds.
pub fn check(engine: &EligibilityEngine, submission: &RawSubmission) -> EligibilityResult {
    match submission.parse() {
        Ok(input) => engine.evaluate(&input),
        Err(error) => error.into(),
    }
}

use serde::{Deserialize, Serialize};

/// Threshold configuration applied by the eligibility engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    pub min_age: i32,
    pub max_age: i32,
    pub min_weight_kg: f64,
    pub high_volume_weight_threshold_kg: f64,
    pub standard_volume_ml: u32,
    pub high_volume_ml: u32,
    #[serde(default)]
    pub reason_policy: ReasonPolicy,
}

impl EligibilityConfig {
    /// National Blood Centre thresholds used when nothing is overridden.
    pub fn standard() -> Self {
        Self {
            min_age: 18,
            max_age: 60,
            min_weight_kg: 45.0,
            high_volume_weight_threshold_kg: 50.0,
            standard_volume_ml: 350,
            high_volume_ml: 450,
            reason_policy: ReasonPolicy::CollectAll,
        }
    }

    pub fn validate(&self) -> Result<(), CriteriaError> {
        if self.min_age > self.max_age {
            return Err(CriteriaError::AgeRange {
                min: self.min_age,
                max: self.max_age,
            });
        }

        if !self.min_weight_kg.is_finite() || self.min_weight_kg <= 0.0 {
            return Err(CriteriaError::MinimumWeight(self.min_weight_kg));
        }

        if !self.high_volume_weight_threshold_kg.is_finite()
            || self.high_volume_weight_threshold_kg < self.min_weight_kg
        {
            return Err(CriteriaError::VolumeThreshold {
                threshold: self.high_volume_weight_threshold_kg,
                minimum: self.min_weight_kg,
            });
        }

        if self.standard_volume_ml == 0 || self.standard_volume_ml > self.high_volume_ml {
            return Err(CriteriaError::VolumeTiers {
                standard: self.standard_volume_ml,
                high: self.high_volume_ml,
            });
        }

        Ok(())
    }
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Controls whether every failing criterion is reported or only the first one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonPolicy {
    #[default]
    CollectAll,
    FirstFailure,
}

impl ReasonPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "collect_all" | "collect-all" | "all" => Some(Self::CollectAll),
            "first_failure" | "first-failure" | "first" => Some(Self::FirstFailure),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReasonPolicy::CollectAll => "collect_all",
            ReasonPolicy::FirstFailure => "first_failure",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CriteriaError {
    #[error("minimum age {min} exceeds maximum age {max}")]
    AgeRange { min: i32, max: i32 },
    #[error("minimum weight must be a positive number of kilograms (found {0})")]
    MinimumWeight(f64),
    #[error("high volume threshold {threshold} kg must not be below minimum weight {minimum} kg")]
    VolumeThreshold { threshold: f64, minimum: f64 },
    #[error("donation volumes must be positive with standard <= high (standard {standard} ml, high {high} ml)")]
    VolumeTiers { standard: u32, high: u32 },
}

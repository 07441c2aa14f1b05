// ============================================================
// Layer 3 — AttritionPrediction Domain Type
// ============================================================
// What the classifier said about one employee, plus the
// human-facing views of it:
//
//   label       — "Yes (High Risk)" / "No (Low Risk)"
//   probability — P(attrition) as a percentage, 1 decimal
//   confidence  — max class probability as a percentage, 1 decimal

use serde::Serialize;
use std::fmt;

pub const HIGH_RISK_LABEL: &str = "Yes (High Risk)";
pub const LOW_RISK_LABEL:  &str = "No (Low Risk)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttritionPrediction {
    /// Discrete class from the classifier: 1 = will leave, 0 = will stay
    pub class: u8,

    /// [P(class 0), P(class 1)]
    pub probabilities: [f64; 2],
}

impl AttritionPrediction {
    pub fn new(class: u8, probabilities: [f64; 2]) -> Self {
        Self { class, probabilities }
    }

    pub fn is_high_risk(&self) -> bool {
        self.class == 1
    }

    pub fn label(&self) -> &'static str {
        if self.is_high_risk() { HIGH_RISK_LABEL } else { LOW_RISK_LABEL }
    }

    /// Probability of attrition (class 1), in percent
    pub fn attrition_percent(&self) -> f64 {
        self.probabilities[1] * 100.0
    }

    /// Largest class probability, in percent
    pub fn confidence_percent(&self) -> f64 {
        self.probabilities[0].max(self.probabilities[1]) * 100.0
    }

    /// Serializable view with the percentages already rounded for display
    pub fn report(&self) -> PredictionReport {
        PredictionReport {
            label:       self.label(),
            prediction:  self.class,
            probability: round1(self.attrition_percent()),
            confidence:  round1(self.confidence_percent()),
        }
    }
}

impl fmt::Display for AttritionPrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Prediction: {}", self.label())?;
        writeln!(f, "Probability of Attrition: {:.1}%", self.attrition_percent())?;
        write!(f, "Attrition Confidence: {:.1}%", self.confidence_percent())
    }
}

/// JSON output shape of one prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    pub label:       &'static str,
    pub prediction:  u8,
    pub probability: f64,
    pub confidence:  f64,
}

/// Round exactly as `{:.1}` prints, so JSON matches the text and CSV output
fn round1(v: f64) -> f64 {
    format!("{v:.1}").parse().unwrap_or(v)
}

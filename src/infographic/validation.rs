//! Human input validation.
//!
//! A submission is accepted iff the name is non-empty, weight > 0 and
//! 12 * feet + inches > 0, with both measurements finite. Validation runs
//! before any tile is rendered.

use serde::{Deserialize, Serialize};

use crate::error::InfographicError;
use crate::infographic::types::{Human, Traits, HUMAN_ERA};

/// Numeric form of the submitted measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanInput {
    pub name: String,
    /// Pounds. Missing numeric fields default to 0.
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub feet: f64,
    #[serde(default)]
    pub inches: f64,
    #[serde(default)]
    pub diet: String,
    #[serde(default)]
    pub location: String,
}

impl HumanInput {
    pub fn height_inches(&self) -> f64 {
        12.0 * self.feet + self.inches
    }

    /// Validate and build the human entity.
    pub fn validate(&self) -> Result<Human, InfographicError> {
        let name = self.name.trim();
        let height = self.height_inches();

        // NaN compares false, so unparseable numbers are rejected here too
        let valid = !name.is_empty()
            && self.weight.is_finite()
            && self.weight > 0.0
            && height.is_finite()
            && height > 0.0;
        if !valid {
            tracing::warn!(
                "Rejected submission (name empty: {}, weight: {}, height: {})",
                name.is_empty(),
                self.weight,
                height
            );
            return Err(InfographicError::InvalidInput);
        }

        Ok(Human {
            name: name.to_string(),
            traits: Traits {
                weight_lbs: self.weight,
                height_in: height,
                diet: self.diet.trim().to_string(),
                location: self.location.trim().to_string(),
                era: HUMAN_ERA.to_string(),
            },
        })
    }
}

/// Raw HTML form submission; every field arrives as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumanForm {
    pub name: String,
    pub weight: String,
    pub feet: String,
    pub inches: String,
    pub diet: String,
    pub location: String,
}

impl HumanForm {
    /// Parse text fields. Blank weight is 0, blank feet/inches are 0,
    /// anything non-numeric becomes NaN and fails validation.
    pub fn to_input(&self) -> HumanInput {
        HumanInput {
            name: self.name.clone(),
            weight: parse_number(&self.weight),
            feet: parse_number(&self.feet),
            inches: parse_number(&self.inches),
            diet: self.diet.clone(),
            location: self.location.clone(),
        }
    }
}

fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

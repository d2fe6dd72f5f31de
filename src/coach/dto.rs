use serde::{Deserialize, Serialize};

use crate::serde_ext::{lenient_f64, lenient_or_default, lenient_string, lenient_strings};

/// Per-serving macros; the backend may leave any of them out or send them as
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacrosPerServing {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub kcal: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub protein_g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub carbs_g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fat_g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fiber_g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sodium_mg: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sugar_g: Option<f64>,
}

/// A healthier recipe suggested for the detected food. The text is model
/// generated, so every field tolerates being absent, `null` or of the wrong
/// type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoachRecommendation {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub why_better: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub servings: Option<f64>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub macros_per_serving: MacrosPerServing,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub ingredients: Vec<String>,
    /// In execution order.
    #[serde(default, deserialize_with = "lenient_strings")]
    pub steps: Vec<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub prep_time_min: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cook_time_min: Option<f64>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub dietary_swaps: Vec<String>,
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coach::CoachRecommendation;
use crate::serde_ext::{lenient_f64, lenient_or_default, null_as_default};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Body of `POST /image-nutrition`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageAnalysisResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub detected_label: String,
    #[serde(default)]
    pub fdc_id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub brand_owner: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub serving_size: Option<f64>,
    #[serde(default)]
    pub serving_unit: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nutrients: Vec<Nutrient>,
    #[serde(
        default,
        deserialize_with = "lenient_or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub coach: Option<CoachRecommendation>,
    /// Older backends send the recommendation under this key instead of
    /// `coach`. Only read by [`super::normalize::normalize`].
    #[serde(
        rename = "Coach Recommendation",
        default,
        deserialize_with = "lenient_or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub coach_recommendation: Option<CoachRecommendation>,
    /// Fields this client does not know about, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

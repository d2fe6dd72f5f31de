use super::dto::ImageAnalysisResponse;

// TODO: drop once /image-nutrition emits `coach` on every deployed backend.
/// Resolves the `"Coach Recommendation"` alias into `coach`.
///
/// An existing `coach` always wins; the alias field itself is left in place.
/// Downstream code only ever reads `coach`.
pub fn normalize(mut raw: ImageAnalysisResponse) -> ImageAnalysisResponse {
    if raw.coach.is_none() {
        if let Some(alias) = &raw.coach_recommendation {
            raw.coach = Some(alias.clone());
        }
    }
    raw
}

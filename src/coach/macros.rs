use super::dto::CoachRecommendation;

/// One pill of the macro row: a fixed label and the per-serving value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRow {
    pub label: &'static str,
    pub value: Option<f64>,
}

/// The seven macro pills in display order, or nothing without a
/// recommendation.
pub fn macro_rows(coach: Option<&CoachRecommendation>) -> Vec<MacroRow> {
    let Some(coach) = coach else {
        return Vec::new();
    };
    let m = &coach.macros_per_serving;
    [
        ("kcal", m.kcal),
        ("Protein (g)", m.protein_g),
        ("Carbs (g)", m.carbs_g),
        ("Fat (g)", m.fat_g),
        ("Fiber (g)", m.fiber_g),
        ("Sodium (mg)", m.sodium_mg),
        ("Sugar (g)", m.sugar_g),
    ]
    .into_iter()
    .map(|(label, value)| MacroRow { label, value })
    .collect()
}

use serde::{Deserialize, Serialize};

/// Body of `POST /plan-week`. The client always asks for the same plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlanRequest {
    pub diet: String,
    pub protein_per_meal: u32,
    pub weekly_budget: u32,
    pub daily_calories: u32,
}

impl Default for WeeklyPlanRequest {
    fn default() -> Self {
        Self {
            diet: "vegetarian".into(),
            protein_per_meal: 30,
            weekly_budget: 30,
            daily_calories: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlanResponse {
    pub days: Vec<DayPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: String,
    pub meals: Vec<Meal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub time: String,
    pub recipe: Recipe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub label: String,
    pub protein: f64,
    pub calories: f64,
    pub cost: f64,
}

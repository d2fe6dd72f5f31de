pub mod dto;
pub mod services;

pub use dto::{DayPlan, Meal, Recipe, WeeklyPlanRequest, WeeklyPlanResponse};
pub use services::get_weekly_plan;

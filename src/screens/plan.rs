use tokio::sync::broadcast;
use tracing::{error, info, instrument};

use super::{fmt_value, Screen, ScreenPhase, ScreenState};
use crate::plan::{get_weekly_plan, WeeklyPlanResponse};
use crate::state::AppState;

/// Weekly plan, fetched when the screen mounts.
///
/// Failures are logged and end in a "no data" view; the user is not alerted.
#[derive(Default)]
pub struct PlanScreen {
    screen: Screen<WeeklyPlanResponse>,
}

impl PlanScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ScreenPhase> {
        self.screen.subscribe()
    }

    pub fn state(&self) -> &ScreenState<WeeklyPlanResponse> {
        self.screen.state()
    }

    #[instrument(skip_all)]
    pub async fn load(&mut self, st: &AppState) {
        self.screen.set(ScreenState::Loading);
        match get_weekly_plan(st).await {
            Ok(plan) => {
                info!(days = plan.days.len(), "plan loaded");
                self.screen.set(ScreenState::Loaded(plan));
            }
            Err(e) => {
                error!(error = %e, "failed to load weekly plan");
                self.screen.set(ScreenState::Failed(e.to_string()));
            }
        }
    }

    pub fn render(&self) -> Vec<String> {
        let plan = match self.state() {
            ScreenState::Idle | ScreenState::Loading => return vec!["Loading…".into()],
            ScreenState::Failed(_) => return vec!["No data from server".into()],
            ScreenState::Loaded(plan) => plan,
        };

        let mut lines = vec!["Your Weekly Plan".to_string()];
        for day in &plan.days {
            lines.push(String::new());
            lines.push(day.date.clone());
            for m in &day.meals {
                lines.push(format!("  {} — {}", m.time, m.recipe.label));
                lines.push(format!(
                    "    {}g protein • {} kcal • ${}",
                    fmt_value(Some(m.recipe.protein)),
                    fmt_value(Some(m.recipe.calories)),
                    fmt_value(Some(m.recipe.cost)),
                ));
            }
        }
        lines
    }
}

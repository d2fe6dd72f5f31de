/// Screens reachable from the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Plan,
    Coach,
}

/// Landing screen with a single "Plan My Week" button.
#[derive(Debug, Default)]
pub struct HomeScreen;

impl HomeScreen {
    pub const BUTTON: &'static str = "Plan My Week";

    pub fn render(&self) -> Vec<String> {
        vec![
            "AI Meal Planner".into(),
            "Tap the button to generate a mock plan.".into(),
            format!("[ {} ]", Self::BUTTON),
        ]
    }

    pub fn press(&self) -> Route {
        Route::Plan
    }
}

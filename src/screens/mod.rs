pub mod coach;
pub mod home;
pub mod picker;
pub mod plan;

use tokio::sync::broadcast;

pub use coach::CoachScreen;
pub use home::{HomeScreen, Route};
pub use picker::{CliPicker, ImagePicker, Permission};
pub use plan::PlanScreen;

/// Shown for a value the backend left out.
pub const PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

/// Payload-free view of [`ScreenState`], published on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPhase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl<T> ScreenState<T> {
    pub fn phase(&self) -> ScreenPhase {
        match self {
            ScreenState::Idle => ScreenPhase::Idle,
            ScreenState::Loading => ScreenPhase::Loading,
            ScreenState::Loaded(_) => ScreenPhase::Loaded,
            ScreenState::Failed(_) => ScreenPhase::Failed,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ScreenState::Loaded(v) => Some(v),
            _ => None,
        }
    }
}

/// A transient, user-facing message. Not stored in screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Owns one screen's state and tells subscribers about each transition so
/// the view can re-render.
pub struct Screen<T> {
    state: ScreenState<T>,
    phases: broadcast::Sender<ScreenPhase>,
}

impl<T> Screen<T> {
    pub fn new() -> Self {
        let (phases, _) = broadcast::channel(16);
        Self {
            state: ScreenState::Idle,
            phases,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ScreenPhase> {
        self.phases.subscribe()
    }

    pub fn state(&self) -> &ScreenState<T> {
        &self.state
    }

    /// Replaces the state and returns the previous one.
    pub fn set(&mut self, next: ScreenState<T>) -> ScreenState<T> {
        let phase = next.phase();
        let prev = std::mem::replace(&mut self.state, next);
        // nobody listening is fine
        let _ = self.phases.send(phase);
        prev
    }
}

impl<T> Default for Screen<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn fmt_value(v: Option<f64>) -> String {
    match v {
        Some(n) => n.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

use tokio::sync::broadcast;
use tracing::{debug, info, instrument, warn};

use super::picker::{ImagePicker, Permission};
use super::{fmt_value, Alert, Screen, ScreenPhase, ScreenState};
use crate::coach::macro_rows;
use crate::images::{select_display_nutrients, upload_image, ImageAnalysisResponse};
use crate::state::AppState;

/// Pick a photo, upload it, show nutrients and the coach's recipe.
///
/// A failed upload never lands in the state: the previous view stays and the
/// caller gets an [`Alert`] to show.
#[derive(Default)]
pub struct CoachScreen {
    image: Option<String>,
    screen: Screen<ImageAnalysisResponse>,
}

impl CoachScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ScreenPhase> {
        self.screen.subscribe()
    }

    pub fn state(&self) -> &ScreenState<ImageAnalysisResponse> {
        self.screen.state()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.state().phase() == ScreenPhase::Loading
    }

    /// "Analyze" is disabled without an image and while a request runs.
    pub fn can_analyze(&self) -> bool {
        self.image.is_some() && !self.is_loading()
    }

    pub async fn pick_image(&mut self, picker: &dyn ImagePicker) -> Option<Alert> {
        if picker.request_permission().await == Permission::Denied {
            return Some(Alert::new("Permission required", "Please allow photo access."));
        }
        if let Some(locator) = picker.pick().await {
            debug!(%locator, "image selected");
            self.image = Some(locator);
            self.screen.set(ScreenState::Idle);
        }
        None
    }

    #[instrument(skip_all)]
    pub async fn analyze(&mut self, st: &AppState) -> Option<Alert> {
        if !self.can_analyze() {
            debug!("analyze ignored: no image or busy");
            return None;
        }
        let locator = self.image.clone()?;

        let prev = self.screen.set(ScreenState::Loading);
        match upload_image(st, &locator).await {
            Ok(data) => {
                info!(label = %data.detected_label, coach = data.coach.is_some(), "analysis ready");
                self.screen.set(ScreenState::Loaded(data));
                None
            }
            Err(e) => {
                warn!(error = %e, "analysis failed");
                self.screen.set(prev);
                Some(Alert::new("Upload failed", e.to_string()))
            }
        }
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![
            "Image Nutrition Analyzer and Meal Recommender".to_string(),
            "Upload a food item and get detailed nutritional information and a healthy meal!"
                .to_string(),
        ];
        if let Some(image) = &self.image {
            lines.push(format!("Image: {}", image));
        }

        match self.state() {
            ScreenState::Loading => lines.push("Analyzing…".into()),
            ScreenState::Loaded(data) => render_result(data, &mut lines),
            _ => lines.push("Pick an image and tap Analyze to see results here.".into()),
        }
        lines
    }
}

fn render_result(data: &ImageAnalysisResponse, lines: &mut Vec<String>) {
    lines.push(String::new());
    let label = if data.detected_label.is_empty() {
        "Detected food"
    } else {
        data.detected_label.as_str()
    };
    let pills: Vec<String> = [&data.brand_name, &data.category]
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .map(|p| format!("({})", p))
        .collect();
    if pills.is_empty() {
        lines.push(label.to_string());
    } else {
        lines.push(format!("{} {}", label, pills.join(" ")));
    }
    if let Some(desc) = data.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(desc.to_string());
    }

    lines.push(String::new());
    lines.push("Nutrients".into());
    for n in select_display_nutrients(&data.nutrients) {
        let row = format!(
            "  {}: {} {}",
            n.name,
            fmt_value(n.amount),
            n.unit.as_deref().unwrap_or_default()
        );
        lines.push(row.trim_end().to_string());
    }

    let Some(coach) = &data.coach else {
        return;
    };
    lines.push(String::new());
    lines.push(format!(
        "Coach Recommendation ({} + {} min)",
        fmt_value(coach.prep_time_min),
        fmt_value(coach.cook_time_min)
    ));
    lines.push(coach.title.clone());
    lines.push(coach.why_better.clone());
    let macros: Vec<String> = macro_rows(Some(coach))
        .iter()
        .map(|r| format!("{}: {}", r.label, fmt_value(r.value)))
        .collect();
    lines.push(macros.join(" | "));

    lines.push("Ingredients".into());
    lines.extend(coach.ingredients.iter().map(|i| format!("  • {}", i)));
    lines.push("Steps".into());
    lines.extend(
        coach
            .steps
            .iter()
            .enumerate()
            .map(|(idx, s)| format!("  {}. {}", idx + 1, s)),
    );
    if !coach.dietary_swaps.is_empty() {
        lines.push("Dietary swaps".into());
        lines.extend(coach.dietary_swaps.iter().map(|s| format!("  • {}", s)));
    }
}

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument, warn};

use super::dto::{WeeklyPlanRequest, WeeklyPlanResponse};
use crate::error::ClientError;
use crate::state::AppState;

/// Asks the backend for this week's plan. One attempt, no retry.
#[instrument(skip(st))]
pub async fn get_weekly_plan(st: &AppState) -> Result<WeeklyPlanResponse, ClientError> {
    let url = st.config.endpoint("/plan-week");
    let body = serde_json::to_vec(&WeeklyPlanRequest::default())?;

    let res = st
        .http
        .post(&url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        warn!(%url, %status, "plan request rejected");
        return Err(ClientError::Server);
    }

    let text = res.text().await?;
    let plan: WeeklyPlanResponse = serde_json::from_str(&text)?;
    debug!(%status, days = plan.days.len(), "weekly plan received");
    Ok(plan)
}

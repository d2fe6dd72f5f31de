use reqwest::header::ACCEPT;
use tracing::{debug, instrument, warn};

use super::dto::ImageAnalysisResponse;
use super::normalize::normalize;
use crate::error::ClientError;
use crate::state::AppState;

/// Uploads the picked image to `/image-nutrition` and returns the normalized
/// analysis. One attempt, no retry.
#[instrument(skip(st))]
pub async fn upload_image(st: &AppState, locator: &str) -> Result<ImageAnalysisResponse, ClientError> {
    let attachment = st.attachments.attach(locator).await?;
    debug!(
        file_name = %attachment.file_name,
        mime = %attachment.mime,
        bytes = attachment.body.len(),
        "attachment ready"
    );

    let form = reqwest::multipart::Form::new().part("file", attachment.into_part()?);
    let url = st.config.endpoint("/image-nutrition");

    let res = st
        .http
        .post(&url)
        .header(ACCEPT, "application/json")
        .multipart(form)
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;
    if !status.is_success() {
        warn!(%url, %status, "image upload rejected");
        return Err(ClientError::Upload {
            status: status.as_u16(),
            body,
        });
    }

    let raw: ImageAnalysisResponse = serde_json::from_str(&body)?;
    debug!(
        %status,
        label = %raw.detected_label,
        nutrients = raw.nutrients.len(),
        "image analysed"
    );
    Ok(normalize(raw))
}

use std::sync::Arc;

use async_trait::async_trait;
use base64ct::{Base64, Encoding};
use bytes::Bytes;
use tracing::{debug, warn};

use crate::config::RuntimeTarget;
use crate::error::ClientError;

const FALLBACK_FILE_NAME: &str = "upload.jpg";

/// The `file` part of an upload, ready to be put into a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime: String,
    pub body: Bytes,
}

impl Attachment {
    /// A blob type that is not a valid MIME falls back to the one derived from
    /// the file name.
    pub fn into_part(self) -> Result<reqwest::multipart::Part, ClientError> {
        let part = |mime: &str| {
            reqwest::multipart::Part::stream(self.body.clone())
                .file_name(self.file_name.clone())
                .mime_str(mime)
        };
        match part(&self.mime) {
            Ok(p) => Ok(p),
            Err(e) => {
                let fallback = mime_for(&self.file_name);
                warn!(mime = %self.mime, %fallback, error = %e, "unusable blob type");
                Ok(part(fallback)?)
            }
        }
    }
}

/// Turns a locally picked image reference into an upload attachment.
#[async_trait]
pub trait AttachmentSource: Send + Sync {
    async fn attach(&self, locator: &str) -> Result<Attachment, ClientError>;
}

pub fn for_target(target: RuntimeTarget, http: reqwest::Client) -> Arc<dyn AttachmentSource> {
    if target.is_browser() {
        Arc::new(BrowserAttachments { http })
    } else {
        Arc::new(NativeAttachments)
    }
}

/// Last path segment of the locator, or `upload.jpg` when there is none. A
/// `data:` URI has no path at all.
pub fn file_name_for(locator: &str) -> String {
    if locator.starts_with("data:") {
        return FALLBACK_FILE_NAME.to_string();
    }
    locator
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_FILE_NAME)
        .to_string()
}

/// Only PNG is told apart; everything else is sent as JPEG.
pub fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name.rsplit('.').next().unwrap_or_default();
    if ext.eq_ignore_ascii_case("png") {
        "image/png"
    } else {
        "image/jpeg"
    }
}

/// Browser-hosted: the locator is a URL (or `data:` URI) whose bytes have to be
/// fetched before they can go into the form.
pub struct BrowserAttachments {
    http: reqwest::Client,
}

#[async_trait]
impl AttachmentSource for BrowserAttachments {
    async fn attach(&self, locator: &str) -> Result<Attachment, ClientError> {
        let file_name = file_name_for(locator);

        if let Some(rest) = locator.strip_prefix("data:") {
            let (blob_type, body) = decode_data_uri(rest)?;
            let mime = blob_type.unwrap_or_else(|| mime_for(&file_name).to_string());
            debug!(%file_name, %mime, bytes = body.len(), "decoded data uri");
            return Ok(Attachment {
                file_name,
                mime,
                body,
            });
        }

        let resp = self.http.get(locator).send().await?.error_for_status()?;
        let blob_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string());
        let body = resp.bytes().await?;
        let mime = blob_type.unwrap_or_else(|| mime_for(&file_name).to_string());
        debug!(%file_name, %mime, bytes = body.len(), "fetched image blob");

        Ok(Attachment {
            file_name,
            mime,
            body,
        })
    }
}

/// Native-hosted: the locator names a file on the device, attached as is.
pub struct NativeAttachments;

#[async_trait]
impl AttachmentSource for NativeAttachments {
    async fn attach(&self, locator: &str) -> Result<Attachment, ClientError> {
        let file_name = file_name_for(locator);
        let mime = mime_for(&file_name).to_string();
        let path = locator.strip_prefix("file://").unwrap_or(locator);

        let data = tokio::fs::read(path)
            .await
            .map_err(|source| ClientError::LocalImage {
                locator: locator.to_string(),
                source,
            })?;
        debug!(%file_name, %mime, bytes = data.len(), "read local image");

        Ok(Attachment {
            file_name,
            mime,
            body: Bytes::from(data),
        })
    }
}

// `<type>[;params][;base64],<payload>`, already stripped of `data:`
fn decode_data_uri(rest: &str) -> Result<(Option<String>, Bytes), ClientError> {
    let (meta, payload) = rest.split_once(',').ok_or(ClientError::InvalidDataUri)?;
    let meta = meta
        .strip_suffix(";base64")
        .ok_or(ClientError::InvalidDataUri)?;
    let blob_type = meta
        .split(';')
        .next()
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string());
    let data = Base64::decode_vec(payload.trim()).map_err(|_| ClientError::InvalidDataUri)?;
    Ok((blob_type, Bytes::from(data)))
}

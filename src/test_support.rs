//! In-process stand-in for the backend used by the async tests.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use bytes::Bytes;
use serde_json::Value;

use crate::config::{AppConfig, RuntimeTarget};
use crate::state::AppState;

/// One multipart field as the server saw it.
#[derive(Debug, Clone)]
pub struct ReceivedField {
    pub name: Option<String>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// What a fake endpoint received, for assertions after the call.
#[derive(Debug, Default, Clone)]
pub struct Received {
    pub json_bodies: Vec<Value>,
    pub content_types: Vec<Option<String>>,
    pub accepts: Vec<Option<String>>,
    pub fields: Vec<ReceivedField>,
}

pub type Recorder = Arc<Mutex<Received>>;

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: String,
    recorder: Recorder,
}

pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    format!("http://{}", addr)
}

/// A loopback address nothing listens on.
pub async fn closed_base() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

/// Serves `/plan-week` and `/image-nutrition` with the given status and raw
/// body, recording every request.
pub async fn backend(status: u16, body: impl Into<String>) -> (String, Recorder) {
    let recorder: Recorder = Arc::default();
    let canned = Canned {
        status: StatusCode::from_u16(status).expect("valid status"),
        body: body.into(),
        recorder: recorder.clone(),
    };
    let router = Router::new()
        .route("/plan-week", post(plan_week))
        .route("/image-nutrition", post(image_nutrition))
        .with_state(canned);
    (spawn(router).await, recorder)
}

/// Serves a single image at `/img/<name>` with the given content type.
pub async fn image_host(name: &str, content_type: &'static str, data: &'static [u8]) -> String {
    let path = format!("/img/{}", name);
    let router = Router::new().route(
        &path,
        get(move || async move { ([(header::CONTENT_TYPE, content_type)], data) }),
    );
    format!("{}{}", spawn(router).await, path)
}

pub fn state_for(base: &str, target: RuntimeTarget) -> AppState {
    AppState::new(AppConfig::new(target, Some(base)))
}

/// An image file inside its own temporary directory. The directory is
/// removed when the guard is dropped.
pub struct TempImage {
    _dir: tempfile::TempDir,
    path: PathBuf,
}

impl TempImage {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn locator(&self) -> String {
        self.path.display().to_string()
    }
}

pub fn temp_image(name: &str, data: &[u8]) -> TempImage {
    let dir = tempfile::Builder::new()
        .prefix("mealcoach-test-")
        .tempdir()
        .expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, data).expect("write temp image");
    TempImage { _dir: dir, path }
}

async fn plan_week(State(c): State<Canned>, headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    {
        let mut rec = c.recorder.lock().expect("recorder lock");
        rec.content_types.push(header_str(&headers, header::CONTENT_TYPE));
        rec.accepts.push(header_str(&headers, header::ACCEPT));
        if let Ok(v) = serde_json::from_slice::<Value>(&body) {
            rec.json_bodies.push(v);
        }
    }
    reply(&c)
}

async fn image_nutrition(
    State(c): State<Canned>,
    headers: HeaderMap,
    mut mp: Multipart,
) -> impl IntoResponse {
    let mut fields = Vec::new();
    while let Ok(Some(field)) = mp.next_field().await {
        let name = field.name().map(|s| s.to_string());
        let file_name = field.file_name().map(|s| s.to_string());
        let content_type = field.content_type().map(|s| s.to_string());
        let data = field.bytes().await.unwrap_or_default();
        fields.push(ReceivedField {
            name,
            file_name,
            content_type,
            data,
        });
    }
    {
        let mut rec = c.recorder.lock().expect("recorder lock");
        rec.content_types.push(header_str(&headers, header::CONTENT_TYPE));
        rec.accepts.push(header_str(&headers, header::ACCEPT));
        rec.fields.extend(fields);
    }
    reply(&c)
}

fn reply(c: &Canned) -> axum::response::Response {
    (
        c.status,
        [(header::CONTENT_TYPE, "application/json")],
        c.body.clone(),
    )
        .into_response()
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_image_is_removed_on_drop() {
        let img = temp_image("leftover.jpg", b"\xff\xd8");
        let dir = img.path().parent().expect("parent").to_path_buf();
        assert_eq!(std::fs::read(img.path()).unwrap(), b"\xff\xd8");
        drop(img);
        assert!(!dir.exists());
    }
}

use crate::config::AppConfig;
use crate::images::attachment::{self, AttachmentSource};
use std::sync::Arc;

/// Everything a screen needs to talk to the backend. Cheap to clone and never
/// mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub http: reqwest::Client,
    pub attachments: Arc<dyn AttachmentSource>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let http = reqwest::Client::new();
        let attachments = attachment::for_target(config.target, http.clone());
        Self {
            config: Arc::new(config),
            http,
            attachments,
        }
    }
}

use std::io::ErrorKind;

use async_trait::async_trait;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Access to the user's photo library.
#[async_trait]
pub trait ImagePicker: Send + Sync {
    async fn request_permission(&self) -> Permission;

    /// The picked image's locator, or `None` when the user cancelled.
    async fn pick(&self) -> Option<String>;
}

/// Picker for the terminal front-end: the "library" is whatever the user
/// passed on the command line. URLs and `data:` URIs are handed through; a
/// file path is checked on disk.
pub struct CliPicker {
    locator: String,
}

impl CliPicker {
    pub fn new(locator: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
        }
    }

    fn is_remote(&self) -> bool {
        ["http://", "https://", "data:"]
            .iter()
            .any(|p| self.locator.starts_with(p))
    }

    fn path(&self) -> &str {
        self.locator.strip_prefix("file://").unwrap_or(&self.locator)
    }
}

#[async_trait]
impl ImagePicker for CliPicker {
    async fn request_permission(&self) -> Permission {
        if self.is_remote() {
            return Permission::Granted;
        }
        match tokio::fs::File::open(self.path()).await {
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                warn!(path = %self.path(), "image not readable");
                Permission::Denied
            }
            _ => Permission::Granted,
        }
    }

    async fn pick(&self) -> Option<String> {
        if self.is_remote() {
            return Some(self.locator.clone());
        }
        match tokio::fs::metadata(self.path()).await {
            Ok(meta) if meta.is_file() => {
                debug!(path = %self.path(), bytes = meta.len(), "image picked");
                Some(self.locator.clone())
            }
            _ => {
                warn!(path = %self.path(), "no such image, nothing picked");
                None
            }
        }
    }
}

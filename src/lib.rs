pub mod coach;
pub mod config;
pub mod error;
pub mod images;
pub mod plan;
pub mod screens;
pub mod state;

mod serde_ext;

#[cfg(test)]
mod test_support;

pub use config::{AppConfig, RuntimeTarget};
pub use error::ClientError;
pub use state::AppState;

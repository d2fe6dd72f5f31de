pub mod attachment;
pub mod dto;
pub mod normalize;
pub mod nutrients;
pub mod services;

pub use dto::{ImageAnalysisResponse, Nutrient};
pub use normalize::normalize;
pub use nutrients::select_display_nutrients;
pub use services::upload_image;

pub mod dto;
pub mod macros;

pub use dto::{CoachRecommendation, MacrosPerServing};
pub use macros::{macro_rows, MacroRow};

pub mod colors;
pub mod loading_indicator;
pub mod page;

pub use loading_indicator::LoadingIndicator;
pub use page::{RowStyle, TeletextPage, TeletextRow, fit_to_width};

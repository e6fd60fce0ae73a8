pub mod interactive;
pub mod teletext;
pub mod views;

pub use interactive::{InteractiveOptions, run_interactive_ui};
pub use teletext::TeletextPage;
pub use views::{DetailTab, LoadState, build_detail_page, build_list_page};

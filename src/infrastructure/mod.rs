mod fetcher_rest;
mod loader_widget;
mod target_html_file;
mod target_memory;

pub use fetcher_rest::*;
pub use loader_widget::*;
pub use target_html_file::*;
pub use target_memory::*;

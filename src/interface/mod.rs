mod fetcher;
mod loader;
mod render_target;

pub use fetcher::*;
pub use loader::*;
pub use render_target::*;

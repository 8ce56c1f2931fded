//! Renders the public repositories of a GitHub user as a definition list, most watched first,
//! forks left out.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;

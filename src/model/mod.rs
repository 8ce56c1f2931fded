mod entities;
mod error;
mod markup;
mod request;
mod response;

pub use entities::*;
pub use error::*;
pub use markup::*;
pub use request::*;
pub use response::*;

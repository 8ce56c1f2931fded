use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Request error
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    /// The username is empty
    #[error("Username must not be empty")]
    EmptyUsername,
}
